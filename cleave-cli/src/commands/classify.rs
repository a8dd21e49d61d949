//! Classify command implementation

use crate::input::{resolve_patterns, FileReader};
use anyhow::Result;
use clap::Args;
use cleave_core::Classification;
use std::path::Path;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Decode input files from this encoding instead of UTF-8
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let reader = match &self.encoding {
            Some(label) => FileReader::with_encoding(label)?,
            None => FileReader::new(),
        };

        for path in resolve_patterns(&self.input)? {
            let text = reader.read_text(&path)?;
            let classification = cleave_core::classify(&text);
            println!("{}", describe(&path, &classification));
        }
        Ok(())
    }
}

/// One report line: `path: markup (heading, list)` or `path: plain`
fn describe(path: &Path, classification: &Classification) -> String {
    let verdict = if classification.is_markup() {
        "markup"
    } else {
        "plain"
    };
    let indicators: Vec<&str> = classification
        .indicators()
        .iter()
        .map(|indicator| indicator.as_str())
        .collect();

    if indicators.is_empty() {
        format!("{}: {verdict}", path.display())
    } else {
        format!("{}: {verdict} ({})", path.display(), indicators.join(", "))
    }
}
