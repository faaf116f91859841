//! Response documents
//!
//! These are the shapes serialized back to clients. They are built per
//! request by the [`crate::Analyzer`] and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single annotated token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 0-based position within the sentence
    pub num: usize,
    /// Surface text
    pub text: String,
    /// Dictionary base form
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: String,
    /// Morphological features, e.g. `Case -> Nom`
    pub attrs: BTreeMap<String, String>,
}

/// A sentence with its tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// 0-based position within the document
    pub num: usize,
    /// Raw text span of the sentence
    pub text: String,
    /// Tokens in tagger order
    pub tokens: Vec<Token>,
}

/// A fully annotated document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Sentences in segmenter order
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Total number of tokens across all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }
}

/// Lemmas of a text joined into one string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmatizedString {
    /// Joined lemmas, punctuation excluded
    pub lemmatized_string: String,
}
