//! One-shot `analyse` and `lemmatize` commands
//!
//! These run a single text through the same analyzer the server uses and
//! print the response body the HTTP API would return.

use crate::backend::load_pipeline;
use crate::config::SlovoConfig;
use crate::http::ErrorBody;
use crate::input::FileReader;
use crate::logging::init_logging;
use crate::output::{open_output, JsonFormatter};
use anyhow::Result;
use clap::Args;
use slovo_core::{Analyzer, InputError, TextRequest};
use std::io::Write;
use std::path::PathBuf;

/// Which analysis to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Full annotated document
    Analyse,
    /// Lemma string without punctuation
    Lemmatize,
}

/// Arguments shared by the one-shot commands
#[derive(Debug, Args)]
pub struct OneShotArgs {
    /// Input file, or `-` for standard input
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SLOVO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Virtual environment with natasha installed
    #[arg(long, value_name = "DIR", env = "PYTHON_HOME")]
    pub python_home: Option<PathBuf>,

    /// Single-line JSON instead of pretty printing
    #[arg(long)]
    pub compact: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl OneShotArgs {
    /// Execute the command
    ///
    /// The JSON is rendered in memory first; the output file is only
    /// created once there is a complete result to put in it.
    pub fn execute(&self, operation: Operation) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let mut config = SlovoConfig::load(self.config.as_deref())?;
        if let Some(home) = &self.python_home {
            config.pipeline.python_home = Some(home.clone());
        }

        let text = FileReader::read_input(&self.input)?;
        let mut rendered = JsonFormatter::new(Vec::new(), config.output.pretty_json && !self.compact);

        // Answer an empty input the way the HTTP API does, without paying
        // for model loading
        let request = match TextRequest::new(text) {
            Ok(request) => request,
            Err(_) => {
                log::warn!("Input {} is empty", self.input.display());
                write_no_text(&mut rendered)?;
                return self.emit(&rendered.into_inner());
            }
        };

        let pipeline = load_pipeline(&config.pipeline)?;
        let analyzer = Analyzer::with_options(pipeline, config.analyzer_options());

        match operation {
            Operation::Analyse => {
                let document = analyzer.analyse_request(&request)?;
                log::info!(
                    "Analysed {} sentences, {} tokens",
                    document.sentences.len(),
                    document.token_count()
                );
                rendered.write(&document)?;
            }
            Operation::Lemmatize => rendered.write(&analyzer.lemmatize_request(&request)?)?,
        }

        self.emit(&rendered.into_inner())
    }

    fn emit(&self, rendered: &[u8]) -> Result<()> {
        let mut writer = open_output(self.output.as_deref())?;
        writer.write_all(rendered)?;
        writer.flush()?;
        Ok(())
    }
}

fn write_no_text<W: Write>(formatter: &mut JsonFormatter<W>) -> Result<()> {
    formatter.write(&ErrorBody {
        error: InputError::NoText.to_string(),
    })
}
