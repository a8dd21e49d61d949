//! cleave - split documents into bounded, boundary-aligned segments

use anyhow::Result;
use clap::Parser;
use cleave_cli::commands::Commands;

/// Hierarchical text chunking for prose, Markdown and source code
#[derive(Debug, Parser)]
#[command(name = "cleave", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::Classify(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
    }
}
