//! natasha-backed [`Pipeline`]

use crate::config::{site_packages, NatashaConfig};
use crate::error::{NatashaError, PyResultExt};
use pyo3::prelude::*;
use slovo_core::{Pipeline, PipelineError, TaggedSentence, TaggedToken};
use std::collections::BTreeMap;
use std::time::Instant;

/// Loaded natasha models
///
/// Every call goes through the GIL, so concurrent requests are serialized
/// by the interpreter rather than by this type. The model objects are
/// never mutated after [`load`](NatashaPipeline::load).
pub struct NatashaPipeline {
    doc_class: Py<PyAny>,
    segmenter: Py<PyAny>,
    morph_vocab: Py<PyAny>,
    morph_tagger: Py<PyAny>,
}

impl NatashaPipeline {
    /// Import natasha and build the segmenter, vocabulary, embedding and
    /// morphology tagger
    pub fn load(config: &NatashaConfig) -> Result<Self, NatashaError> {
        let start = Instant::now();
        log::info!("Loading natasha models");

        let pipeline = Python::with_gil(|py| -> Result<Self, NatashaError> {
            configure_sys_path(py, config)?;

            let natasha = py
                .import("natasha")
                .map_err(|e| NatashaError::Import(e.to_string()))?;

            let construct = |name: &'static str| {
                natasha
                    .getattr(name)
                    .and_then(|class| class.call0())
                    .map_err(|e| NatashaError::Model {
                        component: name,
                        message: e.to_string(),
                    })
            };

            let segmenter = construct("Segmenter")?;
            let morph_vocab = construct("MorphVocab")?;
            let embedding = construct("NewsEmbedding")?;
            let morph_tagger = natasha
                .getattr("NewsMorphTagger")
                .and_then(|class| class.call1((embedding,)))
                .map_err(|e| NatashaError::Model {
                    component: "NewsMorphTagger",
                    message: e.to_string(),
                })?;
            let doc_class = natasha.getattr("Doc").during("look up natasha.Doc")?;

            Ok(Self {
                doc_class: doc_class.unbind(),
                segmenter: segmenter.unbind(),
                morph_vocab: morph_vocab.unbind(),
                morph_tagger: morph_tagger.unbind(),
            })
        })?;

        log::info!("natasha models loaded in {:?}", start.elapsed());
        Ok(pipeline)
    }

    fn run(&self, text: &str) -> Result<Vec<TaggedSentence>, NatashaError> {
        Python::with_gil(|py| -> Result<Vec<TaggedSentence>, NatashaError> {
            let doc = self.doc_class.bind(py).call1((text,)).during("create Doc")?;

            doc.call_method1("segment", (self.segmenter.bind(py),))
                .during("segment text")?;
            doc.call_method1("tag_morph", (self.morph_tagger.bind(py),))
                .during("tag morphology")?;

            // Lemma selection reads the tag, so this must follow tag_morph
            let all_tokens = doc.getattr("tokens").during("get tokens")?;
            for token in all_tokens.try_iter().during("iterate tokens")? {
                token
                    .during("iterate tokens")?
                    .call_method1("lemmatize", (self.morph_vocab.bind(py),))
                    .during("lemmatize token")?;
            }

            let mut sentences = Vec::new();
            let sents = doc.getattr("sents").during("get sentences")?;
            for sent in sents.try_iter().during("iterate sentences")? {
                let sent = sent.during("iterate sentences")?;
                let text = sent
                    .getattr("text")
                    .and_then(|t| t.extract::<String>())
                    .during("read sentence text")?;

                let sent_tokens = sent.getattr("tokens").during("get sentence tokens")?;
                let mut tokens = Vec::new();
                for token in sent_tokens.try_iter().during("iterate sentence tokens")? {
                    tokens.push(read_token(&token.during("iterate sentence tokens")?)?);
                }

                sentences.push(TaggedSentence { text, tokens });
            }

            Ok(sentences)
        })
    }
}

impl Pipeline for NatashaPipeline {
    fn name(&self) -> &str {
        "natasha"
    }

    fn process(&self, text: &str) -> Result<Vec<TaggedSentence>, PipelineError> {
        self.run(text).map_err(PipelineError::from)
    }
}

/// Read one tagged and lemmatized natasha `DocToken`
fn read_token(token: &Bound<'_, PyAny>) -> Result<TaggedToken, NatashaError> {
    let text: String = token
        .getattr("text")
        .and_then(|t| t.extract())
        .during("read token text")?;
    let lemma: Option<String> = token
        .getattr("lemma")
        .and_then(|t| t.extract())
        .during("read token lemma")?;
    let pos: Option<String> = token
        .getattr("pos")
        .and_then(|t| t.extract())
        .during("read token pos")?;
    let feats: Option<BTreeMap<String, String>> = token
        .getattr("feats")
        .and_then(|t| t.extract())
        .during("read token feats")?;

    let missing = |attribute: &'static str| NatashaError::MissingAttribute {
        token: text.clone(),
        attribute,
    };
    let lemma = lemma.ok_or_else(|| missing("lemma"))?;
    let pos = pos.ok_or_else(|| missing("pos"))?;

    Ok(TaggedToken {
        text,
        lemma,
        pos,
        feats: feats.unwrap_or_default(),
    })
}

fn configure_sys_path(py: Python<'_>, config: &NatashaConfig) -> Result<(), NatashaError> {
    let mut paths = Vec::new();

    if let Some(home) = &config.python_home {
        let version = py.version_info();
        paths.push(site_packages(home, version.major, version.minor));
    }
    paths.extend(config.extra_python_paths.iter().cloned());

    if paths.is_empty() {
        return Ok(());
    }

    let sys_path = py
        .import("sys")
        .and_then(|sys| sys.getattr("path"))
        .during("get sys.path")?;

    // Insert in reverse so the first configured path ends up first
    for path in paths.iter().rev() {
        log::debug!("Prepending {} to sys.path", path.display());
        sys_path
            .call_method1("insert", (0, path.to_string_lossy().into_owned()))
            .during("insert into sys.path")?;
    }

    Ok(())
}
