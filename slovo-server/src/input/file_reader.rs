//! Reading text for one-shot commands

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path that selects standard input
pub const STDIN: &str = "-";

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of a reader as UTF-8 text
    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut buffer = String::new();
        reader
            .read_to_string(&mut buffer)
            .context("Failed to read standard input")?;
        Ok(buffer)
    }

    /// Read `path`, or standard input when it is `-`
    pub fn read_input(path: &Path) -> Result<String> {
        if path.as_os_str() == STDIN {
            Self::read_from(io::stdin().lock())
        } else {
            Self::read_text(path)
        }
    }
}
