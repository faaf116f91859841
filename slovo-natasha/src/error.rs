//! Error handling for the natasha binding

use pyo3::PyErr;
use slovo_core::PipelineError;
use thiserror::Error;

/// Errors raised while loading or calling natasha
#[derive(Error, Debug)]
pub enum NatashaError {
    /// The `natasha` package could not be imported
    #[error("Failed to import natasha: {0}. Make sure it is installed: pip install natasha")]
    Import(String),

    /// A model object could not be constructed
    #[error("Failed to load natasha {component}: {message}")]
    Model {
        /// Class that failed, e.g. `NewsEmbedding`
        component: &'static str,
        /// Python error text
        message: String,
    },

    /// A Python call failed
    #[error("Failed to {operation}: {message}")]
    Python {
        /// What the binding was doing
        operation: &'static str,
        /// Python error text
        message: String,
    },

    /// natasha left a token without a lemma or part of speech
    #[error("token {token:?} has no {attribute}")]
    MissingAttribute {
        /// Surface text of the token
        token: String,
        /// `lemma` or `pos`
        attribute: &'static str,
    },
}

impl NatashaError {
    pub(crate) fn python(operation: &'static str, err: PyErr) -> Self {
        NatashaError::Python {
            operation,
            message: err.to_string(),
        }
    }
}

impl From<NatashaError> for PipelineError {
    fn from(err: NatashaError) -> Self {
        match err {
            NatashaError::MissingAttribute { token, attribute } => {
                PipelineError::MissingAttribute { token, attribute }
            }
            other => PipelineError::backend("natasha", other.to_string()),
        }
    }
}

/// Attach the failing operation to a Python error
pub(crate) trait PyResultExt<T> {
    fn during(self, operation: &'static str) -> Result<T, NatashaError>;
}

impl<T> PyResultExt<T> for Result<T, PyErr> {
    fn during(self, operation: &'static str) -> Result<T, NatashaError> {
        self.map_err(|e| NatashaError::python(operation, e))
    }
}
