//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        }) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Segment length: {} {}",
                    config.segmentation.segment_length,
                    config.segmentation.length_unit.to_len_fn().name()
                );
                println!("  Segment overlap: {}", config.segmentation.segment_overlap);
                println!("  Output format: {}", config.output.default_format.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
