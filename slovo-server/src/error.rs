//! Error handling for the server and CLI

use thiserror::Error;

/// Errors raised outside request handling
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The pipeline could not be loaded
    #[error("Pipeline error: {0}")]
    PipelineError(String),

    /// The listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    BindError {
        /// Requested address
        addr: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The server stopped with an I/O error
    #[error("Server error: {0}")]
    ServeError(std::io::Error),
}
