//! End-to-end tests against the real natasha models
//!
//! These need a Python interpreter with `natasha` installed
//! (`pip install natasha`). Point `PYTHON_HOME` at a virtual environment
//! if it is not on the default path.

use slovo_core::{Analyzer, Pipeline, PUNCT};
use slovo_natasha::{NatashaConfig, NatashaPipeline};
use std::sync::Arc;

fn load() -> NatashaPipeline {
    let mut config = NatashaConfig::default();
    if let Ok(home) = std::env::var("PYTHON_HOME") {
        config = config.with_python_home(home);
    }
    NatashaPipeline::load(&config).expect("natasha should load")
}

#[test]
#[ignore = "requires Python with natasha installed"]
fn test_segments_and_tags_russian() {
    let pipeline = load();
    let sentences = pipeline.process("Иван бежал быстро. Мама мыла раму.").unwrap();

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].text, "Иван бежал быстро.");

    let first = &sentences[0].tokens;
    let texts: Vec<&str> = first.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Иван", "бежал", "быстро", "."]);
    assert_eq!(first[1].lemma, "бежать");
    assert_eq!(first[1].pos, "VERB");
    assert_eq!(first[3].pos, PUNCT);
    assert_eq!(first[0].feats.get("Case").map(String::as_str), Some("Nom"));
}

#[test]
#[ignore = "requires Python with natasha installed"]
fn test_lemmatize_example() {
    let analyzer = Analyzer::new(Arc::new(load()));
    let out = analyzer.lemmatize("Иван бежал быстро.").unwrap();

    assert!(out.lemmatized_string.starts_with(' '));
    assert!(out.lemmatized_string.ends_with(' '));
    assert!(!out.lemmatized_string.contains('.'));
    assert_eq!(out.lemmatized_string.split_whitespace().count(), 3);
    assert!(out.lemmatized_string.contains(" бежать "));
}

#[test]
#[ignore = "requires Python with natasha installed"]
fn test_repeated_analysis_is_identical() {
    let analyzer = Analyzer::new(Arc::new(load()));
    let text = "Мама мыла раму. Папа читал газету!";
    assert_eq!(analyzer.analyse(text).unwrap(), analyzer.analyse(text).unwrap());
}

#[test]
#[ignore = "requires Python with natasha installed"]
fn test_punctuation_only() {
    let analyzer = Analyzer::new(Arc::new(load()));
    let out = analyzer.lemmatize("...!?").unwrap();
    assert_eq!(out.lemmatized_string, "");
}

#[test]
#[ignore = "requires Python with natasha installed"]
fn test_concurrent_calls_share_models() {
    let pipeline = Arc::new(load());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            std::thread::spawn(move || pipeline.process("Иван бежал быстро.").unwrap())
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
