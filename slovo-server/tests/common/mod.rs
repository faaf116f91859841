//! Test pipelines shared by the integration tests

use slovo_core::{Pipeline, PipelineError, TaggedSentence, TaggedToken, PUNCT};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Looks words up in a tiny lexicon; sentences end at `.`, `!` or `?`
#[derive(Default)]
pub struct LexiconPipeline {
    pub calls: AtomicUsize,
}

impl LexiconPipeline {
    fn tag(word: &str) -> TaggedToken {
        let (lemma, pos, feats): (&str, &str, &[(&str, &str)]) = match word {
            "Иван" => ("иван", "PROPN", &[("Case", "Nom"), ("Gender", "Masc"), ("Number", "Sing")]),
            "бежал" => ("бежать", "VERB", &[("Aspect", "Imp"), ("Tense", "Past")]),
            "быстро" => ("быстро", "ADV", &[("Degree", "Pos")]),
            "Мама" => ("мама", "NOUN", &[("Case", "Nom")]),
            "мыла" => ("мыть", "VERB", &[("Tense", "Past")]),
            "раму" => ("рама", "NOUN", &[("Case", "Acc")]),
            w if w.chars().all(|c| c.is_ascii_punctuation()) => (w, PUNCT, &[]),
            w => (w, "X", &[]),
        };

        TaggedToken {
            text: word.to_string(),
            lemma: lemma.to_lowercase(),
            pos: pos.to_string(),
            feats: feats
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}

impl Pipeline for LexiconPipeline {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn process(&self, text: &str) -> Result<Vec<TaggedSentence>, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut sentences = Vec::new();
        let mut sentence = String::new();
        let mut tokens = Vec::new();

        for word in text.split_whitespace() {
            if !sentence.is_empty() {
                sentence.push(' ');
            }
            sentence.push_str(word);

            let body = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
            if !body.is_empty() {
                tokens.push(Self::tag(body));
            }
            for c in word[body.len()..].chars() {
                tokens.push(Self::tag(&c.to_string()));
            }

            if word.ends_with(['.', '!', '?']) {
                sentences.push(TaggedSentence {
                    text: std::mem::take(&mut sentence),
                    tokens: std::mem::take(&mut tokens),
                });
            }
        }

        if !sentence.is_empty() {
            sentences.push(TaggedSentence {
                text: sentence,
                tokens,
            });
        }

        Ok(sentences)
    }
}

/// Fails every call
pub struct BrokenPipeline;

impl Pipeline for BrokenPipeline {
    fn name(&self) -> &str {
        "broken"
    }

    fn process(&self, _text: &str) -> Result<Vec<TaggedSentence>, PipelineError> {
        Err(PipelineError::backend("broken", "model file is corrupt"))
    }
}
