//! Generate config command implementation

use crate::config::SlovoConfig;
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
        use std::fs;

        fs::write(&self.output, SlovoConfig::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Start the server with it:");
        println!("   slovo serve --config {}", self.output.display());

        Ok(())
    }
}
