//! Serve command implementation

use crate::backend::load_pipeline;
use crate::config::SlovoConfig;
use crate::http;
use crate::logging::init_logging;
use anyhow::{Context, Result};
use clap::Args;
use slovo_core::Analyzer;
use std::path::PathBuf;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SLOVO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bind host (overrides the configuration file)
    #[arg(long, env = "SLOVO_HOST")]
    pub host: Option<String>,

    /// Bind port (overrides the configuration file)
    #[arg(short, long, env = "SLOVO_PORT")]
    pub port: Option<u16>,

    /// Virtual environment with natasha installed
    #[arg(long, value_name = "DIR", env = "PYTHON_HOME")]
    pub python_home: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ServeArgs {
    /// Resolve the configuration: file first, then flag overrides
    pub fn resolve_config(&self) -> Result<SlovoConfig> {
        let mut config = SlovoConfig::load(self.config.as_deref())?;

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(home) = &self.python_home {
            config.pipeline.python_home = Some(home.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Execute the serve command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = self.resolve_config()?;
        log::debug!("Configuration: {config:?}");

        // Models load before the listener binds, so no request ever sees
        // a half-initialized pipeline
        let pipeline = load_pipeline(&config.pipeline)?;
        let analyzer = Analyzer::with_options(pipeline, config.analyzer_options());

        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
        runtime.block_on(http::serve(&config.server, analyzer))?;

        Ok(())
    }
}
