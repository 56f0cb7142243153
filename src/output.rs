use std::io::Write;

use crate::domain::{Error, OperationResult, OutputSink};

/// Writes each result as a single JSON line.
#[derive(Debug)]
pub struct JsonLinesOutput<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for JsonLinesOutput<W> {
    fn emit(&mut self, result: &OperationResult) -> Result<(), Error> {
        serde_json::to_writer(&mut self.writer, result)
            .map_err(|e| Error::Output(format!("JSON serialization error: {}", e)))?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}
