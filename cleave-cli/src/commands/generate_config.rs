//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, CliConfig::default_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!(
            "✓ Configuration template written to {}",
            self.output.display()
        );
        println!("Use it with: cleave segment -i <FILES> -c {}", self.output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_execute_writes_loadable_template() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("cleave.toml");

        let args = GenerateConfigArgs {
            output: output.clone(),
        };
        args.execute().unwrap();

        let config = CliConfig::load(&output).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_into_missing_directory_fails() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/cleave.toml"),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
