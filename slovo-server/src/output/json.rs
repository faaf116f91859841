//! JSON output formatter

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Writes one JSON document followed by a newline
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Serialize `value` and flush
    pub fn write<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
