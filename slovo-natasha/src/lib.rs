//! natasha pipeline for slovo
//!
//! Embeds a Python interpreter through pyo3 and drives the natasha
//! library: `Segmenter` for sentences and tokens, `NewsMorphTagger` for
//! part of speech and features, `MorphVocab` for lemmas. The models are
//! loaded once by [`NatashaPipeline::load`] and reused for every call.

#![warn(missing_docs)]

mod config;
mod error;
mod pipeline;

pub use config::NatashaConfig;
pub use error::NatashaError;
pub use pipeline::NatashaPipeline;
