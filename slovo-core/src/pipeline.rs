//! The seam between the service and the NLP backend
//!
//! A [`Pipeline`] takes raw text through segmentation, morphological
//! tagging and lemmatization, in that order. Lemmatization runs last
//! because the lemma of a token is chosen from its assigned tag.
//!
//! Numbering is deliberately absent from [`TaggedSentence`] and
//! [`TaggedToken`]: positions are assigned by the analyzer when the
//! response is built.

use crate::error::PipelineError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Part-of-speech tag of punctuation tokens
pub const PUNCT: &str = "PUNCT";

/// A token after tagging and lemmatization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Surface text
    pub text: String,
    /// Lemma chosen for the assigned tag
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: String,
    /// Morphological features
    pub feats: BTreeMap<String, String>,
}

impl TaggedToken {
    /// Whether the tagger marked this token as punctuation
    pub fn is_punct(&self) -> bool {
        self.pos == PUNCT
    }
}

/// A sentence as produced by the segmenter, with tagged tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSentence {
    /// Raw text span
    pub text: String,
    /// Tokens in tagger order
    pub tokens: Vec<TaggedToken>,
}

/// A segment -> tag -> lemmatize pipeline
///
/// Implementations are initialized once and then shared read-only across
/// requests, so they must tolerate concurrent calls to [`process`].
///
/// [`process`]: Pipeline::process
pub trait Pipeline: Send + Sync {
    /// Backend name, used in logs and error messages
    fn name(&self) -> &str;

    /// Run the full pipeline on `text`
    ///
    /// Sentences are returned in segmenter order, tokens in tagger order.
    fn process(&self, text: &str) -> Result<Vec<TaggedSentence>, PipelineError>;
}

impl<P: Pipeline + ?Sized> Pipeline for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn process(&self, text: &str) -> Result<Vec<TaggedSentence>, PipelineError> {
        (**self).process(text)
    }
}

impl<P: Pipeline + ?Sized> Pipeline for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn process(&self, text: &str) -> Result<Vec<TaggedSentence>, PipelineError> {
        (**self).process(text)
    }
}
