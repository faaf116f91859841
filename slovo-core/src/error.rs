//! Layered error types
//!
//! [`InputError`] covers everything wrong with a request body and is
//! reported back to the caller. [`PipelineError`] covers failures inside
//! the NLP backend. [`SlovoError`] is the union returned by the analyzer.

use thiserror::Error;

/// Message returned when a request carries no usable text
pub const NO_TEXT_MESSAGE: &str = "No text provided";

/// Errors in the request body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// `text` is missing, null or otherwise empty
    #[error("No text provided")]
    NoText,

    /// The body is not valid JSON
    #[error("malformed JSON body: {0}")]
    MalformedJson(String),

    /// The body is valid JSON but not an object
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// `text` is present and non-empty but not a string
    #[error("field `text` must be a string, got {found}")]
    NotAString {
        /// JSON type name of the offending value
        found: &'static str,
    },
}

impl InputError {
    /// Whether this is the "no text" case, which is answered with a normal
    /// response body rather than a client error
    pub fn is_no_text(&self) -> bool {
        matches!(self, InputError::NoText)
    }
}

/// Errors raised by a [`crate::Pipeline`] implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The backend failed while processing the text
    #[error("{backend} failed: {message}")]
    Backend {
        /// Backend name
        backend: String,
        /// Backend-provided description
        message: String,
    },

    /// The backend produced a token without a required annotation
    #[error("token {token:?} has no {attribute}")]
    MissingAttribute {
        /// Surface text of the token
        token: String,
        /// Name of the missing annotation (`lemma`, `pos`)
        attribute: &'static str,
    },
}

impl PipelineError {
    /// Create a backend error
    pub fn backend(backend: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::Backend {
            backend: backend.into(),
            message: message.into(),
        }
    }
}

/// Errors returned by the analyzer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlovoError {
    /// Invalid request
    #[error(transparent)]
    Input(#[from] InputError),

    /// Pipeline failure
    #[error("Processing error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Result type for analyzer operations
pub type Result<T> = std::result::Result<T, SlovoError>;
