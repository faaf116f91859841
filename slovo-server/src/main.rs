//! slovo command-line entry point

use clap::Parser;
use slovo_server::commands::Commands;

/// Russian morphological analysis service: segmentation, tagging and
/// lemmatization over HTTP
#[derive(Debug, Parser)]
#[command(name = "slovo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
