//! Analysis operations
//!
//! The [`Analyzer`] is constructed once with a loaded pipeline and shared
//! by reference with every request. It owns no per-request state.

use crate::error::{Result, SlovoError};
use crate::model::{Document, LemmatizedString, Sentence, Token};
use crate::pipeline::{Pipeline, TaggedSentence};
use crate::request::TextRequest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// How lemmas are joined by [`Analyzer::lemmatize`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmaSpacing {
    /// Every lemma wrapped in one leading and one trailing space:
    /// `" a  b "`. This is the established wire format.
    #[default]
    Padded,
    /// Lemmas separated by a single space: `"a b"`
    Single,
}

impl LemmaSpacing {
    /// Join retained lemmas according to this spacing
    pub fn join<S: AsRef<str>>(self, lemmas: &[S]) -> String {
        match self {
            LemmaSpacing::Padded => {
                let mut out = String::new();
                for lemma in lemmas {
                    out.push(' ');
                    out.push_str(lemma.as_ref());
                    out.push(' ');
                }
                out
            }
            LemmaSpacing::Single => lemmas
                .iter()
                .map(|lemma| lemma.as_ref())
                .collect::<Vec<&str>>()
                .join(" "),
        }
    }
}

/// Analyzer options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Lemma join rule for [`Analyzer::lemmatize`]
    pub lemma_spacing: LemmaSpacing,
}

/// Runs a pipeline and shapes its output into response documents
#[derive(Clone)]
pub struct Analyzer {
    pipeline: Arc<dyn Pipeline>,
    options: AnalyzerOptions,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("pipeline", &self.pipeline.name())
            .field("options", &self.options)
            .finish()
    }
}

impl Analyzer {
    /// Create an analyzer with default options
    pub fn new(pipeline: Arc<dyn Pipeline>) -> Self {
        Self::with_options(pipeline, AnalyzerOptions::default())
    }

    /// Create an analyzer with explicit options
    pub fn with_options(pipeline: Arc<dyn Pipeline>, options: AnalyzerOptions) -> Self {
        Self { pipeline, options }
    }

    /// The analyzer's options
    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    /// Name of the underlying pipeline
    pub fn pipeline_name(&self) -> &str {
        self.pipeline.name()
    }

    /// Analyse text into a numbered document
    pub fn analyse(&self, text: &str) -> Result<Document> {
        let request = TextRequest::new(text)?;
        self.analyse_request(&request)
    }

    /// Analyse a validated request
    pub fn analyse_request(&self, request: &TextRequest) -> Result<Document> {
        let sentences = self.run(request.text())?;
        Ok(build_document(sentences))
    }

    /// Lemmatize text into a single string, skipping punctuation
    pub fn lemmatize(&self, text: &str) -> Result<LemmatizedString> {
        let request = TextRequest::new(text)?;
        self.lemmatize_request(&request)
    }

    /// Lemmatize a validated request
    pub fn lemmatize_request(&self, request: &TextRequest) -> Result<LemmatizedString> {
        let sentences = self.run(request.text())?;

        let lemmas: Vec<String> = sentences
            .into_iter()
            .flat_map(|s| s.tokens)
            .filter(|t| !t.is_punct())
            .map(|t| t.lemma)
            .collect();

        Ok(LemmatizedString {
            lemmatized_string: self.options.lemma_spacing.join(&lemmas),
        })
    }

    fn run(&self, text: &str) -> Result<Vec<TaggedSentence>> {
        let start = Instant::now();
        let sentences = self.pipeline.process(text).map_err(SlovoError::from)?;

        log::debug!(
            "{}: {} chars -> {} sentences, {} tokens in {:?}",
            self.pipeline.name(),
            text.chars().count(),
            sentences.len(),
            sentences.iter().map(|s| s.tokens.len()).sum::<usize>(),
            start.elapsed()
        );

        Ok(sentences)
    }
}

/// Number sentences and tokens from zero in the order given
fn build_document(sentences: Vec<TaggedSentence>) -> Document {
    let sentences = sentences
        .into_iter()
        .enumerate()
        .map(|(sentence_num, sent)| Sentence {
            num: sentence_num,
            text: sent.text,
            tokens: sent
                .tokens
                .into_iter()
                .enumerate()
                .map(|(token_num, tok)| Token {
                    num: token_num,
                    text: tok.text,
                    lemma: tok.lemma,
                    pos: tok.pos,
                    attrs: tok.feats,
                })
                .collect(),
        })
        .collect();

    Document { sentences }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, PipelineError};
    use crate::pipeline::TaggedToken;
    use std::collections::BTreeMap;

    struct Canned(Vec<TaggedSentence>);

    impl Pipeline for Canned {
        fn name(&self) -> &str {
            "canned"
        }

        fn process(&self, _text: &str) -> std::result::Result<Vec<TaggedSentence>, PipelineError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl Pipeline for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn process(&self, _text: &str) -> std::result::Result<Vec<TaggedSentence>, PipelineError> {
            Err(PipelineError::backend("failing", "model exploded"))
        }
    }

    fn tok(text: &str, lemma: &str, pos: &str) -> TaggedToken {
        TaggedToken {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            feats: BTreeMap::new(),
        }
    }

    fn ivan() -> Analyzer {
        Analyzer::new(Arc::new(Canned(vec![TaggedSentence {
            text: "Иван бежал быстро.".to_string(),
            tokens: vec![
                tok("Иван", "иван", "PROPN"),
                tok("бежал", "бежать", "VERB"),
                tok("быстро", "быстро", "ADV"),
                tok(".", ".", "PUNCT"),
            ],
        }])))
    }

    #[test]
    fn test_padded_join() {
        assert_eq!(LemmaSpacing::Padded.join(&["a", "b"]), " a  b ");
        assert_eq!(LemmaSpacing::Padded.join::<&str>(&[]), "");
    }

    #[test]
    fn test_single_join() {
        assert_eq!(LemmaSpacing::Single.join(&["a", "b"]), "a b");
        assert_eq!(LemmaSpacing::Single.join::<&str>(&[]), "");
    }

    #[test]
    fn test_lemmatize_skips_punct_and_pads() {
        let out = ivan().lemmatize("Иван бежал быстро.").unwrap();
        assert_eq!(out.lemmatized_string, " иван  бежать  быстро ");
    }

    #[test]
    fn test_lemmatize_single_spacing() {
        let analyzer = Analyzer::with_options(
            ivan().pipeline.clone(),
            AnalyzerOptions {
                lemma_spacing: LemmaSpacing::Single,
            },
        );
        let out = analyzer.lemmatize("Иван бежал быстро.").unwrap();
        assert_eq!(out.lemmatized_string, "иван бежать быстро");
    }

    #[test]
    fn test_analyse_numbers_from_zero() {
        let doc = ivan().analyse("Иван бежал быстро.").unwrap();
        assert_eq!(doc.sentences.len(), 1);
        assert_eq!(doc.sentences[0].num, 0);
        let nums: Vec<usize> = doc.sentences[0].tokens.iter().map(|t| t.num).collect();
        assert_eq!(nums, vec![0, 1, 2, 3]);
        assert_eq!(doc.sentences[0].tokens[1].lemma, "бежать");
        assert_eq!(doc.sentences[0].tokens[3].pos, "PUNCT");
    }

    #[test]
    fn test_empty_text_is_rejected_before_pipeline() {
        let analyzer = Analyzer::new(Arc::new(Failing));
        assert_eq!(
            analyzer.analyse(""),
            Err(SlovoError::Input(InputError::NoText))
        );
        assert_eq!(
            analyzer.lemmatize(""),
            Err(SlovoError::Input(InputError::NoText))
        );
    }

    #[test]
    fn test_pipeline_failure_surfaces() {
        let analyzer = Analyzer::new(Arc::new(Failing));
        let err = analyzer.analyse("text").unwrap_err();
        assert!(matches!(err, SlovoError::Pipeline(_)));
        assert!(err.to_string().starts_with("Processing error:"));
    }

    #[test]
    fn test_debug_shows_pipeline_name() {
        let debug = format!("{:?}", ivan());
        assert!(debug.contains("canned"));
    }

    #[test]
    fn test_spacing_deserializes_lowercase() {
        let spacing: LemmaSpacing = serde_json::from_str("\"single\"").unwrap();
        assert_eq!(spacing, LemmaSpacing::Single);
        let spacing: LemmaSpacing = serde_json::from_str("\"padded\"").unwrap();
        assert_eq!(spacing, LemmaSpacing::Padded);
    }
}
