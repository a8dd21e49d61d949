//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod classify;
pub mod generate_config;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into bounded, boundary-aligned segments
    Segment(segment::SegmentArgs),

    /// Report whether files are treated as Markdown
    Classify(classify::ClassifyArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration file with the defaults
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List languages with keyword-aware splitting
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        print!("{}", self.render());
        Ok(())
    }

    fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Languages => {
                out.push_str("Supported languages:\n");
                for language in cleave_core::CodeLanguage::ALL {
                    let extensions: Vec<String> = language
                        .extensions()
                        .iter()
                        .map(|ext| format!(".{ext}"))
                        .collect();
                    out.push_str(&format!(
                        "  {:<12} {}\n",
                        language.name(),
                        extensions.join(", ")
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Supported output formats:\n");
                for format in crate::output::OutputFormat::ALL {
                    out.push_str(&format!(
                        "  {:<10} {}\n",
                        format.as_str(),
                        format.description()
                    ));
                }
            }
        }
        out
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the flags. Repeated initialization is
/// ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
