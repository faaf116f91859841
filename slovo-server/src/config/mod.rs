//! Configuration module
//!
//! Settings come from an optional TOML file; command-line flags (and
//! their environment variables) override individual values afterwards.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use slovo_core::{AnalyzerOptions, LemmaSpacing};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SlovoConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// `host:port` for display and binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the embedded Python finds natasha
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Virtual environment root
    pub python_home: Option<PathBuf>,

    /// Extra `sys.path` entries
    pub extra_python_paths: Vec<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// How lemmas are joined by `lemmatize`
    pub lemma_spacing: LemmaSpacing,

    /// Pretty print JSON in one-shot commands
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            lemma_spacing: LemmaSpacing::Padded,
            pretty_json: true,
        }
    }
}

impl SlovoConfig {
    /// Load configuration from a file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        Self::from_toml(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// Parse TOML configuration text
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), CliError> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::ConfigError("server.host must not be empty".into()));
        }
        if self.server.max_body_bytes == 0 {
            return Err(CliError::ConfigError(
                "server.max_body_bytes must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Analyzer options derived from the output section
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            lemma_spacing: self.output.lemma_spacing,
        }
    }

    /// Commented configuration file with every default spelled out
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# slovo configuration

[server]
# Address the HTTP listener binds to
host = "{host}"
port = {port}
# Requests with larger bodies are rejected with 413
max_body_bytes = {max_body}

[pipeline]
# Virtual environment with natasha installed (defaults to the interpreter's own path)
# python_home = "/opt/slovo/venv"
# Additional directories searched for Python packages
extra_python_paths = []

[output]
# "padded" wraps every lemma in spaces (" a  b "), "single" joins with one space ("a b")
lemma_spacing = "padded"
# Pretty print JSON written by the analyse and lemmatize commands
pretty_json = {pretty}
"#,
            host = defaults.server.host,
            port = defaults.server.port,
            max_body = defaults.server.max_body_bytes,
            pretty = defaults.output.pretty_json,
        )
    }
}
