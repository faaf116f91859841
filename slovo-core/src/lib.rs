//! Core of the slovo morphology service
//!
//! This crate holds everything between an HTTP body and a morphological
//! pipeline: the response document model, request validation, the
//! [`Pipeline`] seam behind which the actual NLP backend lives, and the
//! [`Analyzer`] that turns pipeline output into numbered documents or
//! lemmatized strings.

#![warn(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod request;

// Re-export key types
pub use analyzer::{Analyzer, AnalyzerOptions, LemmaSpacing};
pub use error::{InputError, PipelineError, Result, SlovoError};
pub use model::{Document, LemmatizedString, Sentence, Token};
pub use pipeline::{Pipeline, TaggedSentence, TaggedToken, PUNCT};
pub use request::TextRequest;
