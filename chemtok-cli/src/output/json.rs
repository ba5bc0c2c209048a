//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one entry per input file
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentData {
    /// Input file the sentences came from
    pub file: String,
    /// Tokenized sentences in input order
    pub sentences: Vec<Vec<String>>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start_document(&mut self, source: &str) -> Result<()> {
        self.documents.push(DocumentData {
            file: source.to_string(),
            sentences: Vec::new(),
        });
        Ok(())
    }

    fn format_sentence(&mut self, source: &str, tokens: &[String]) -> Result<()> {
        match self.documents.last_mut() {
            Some(document) if document.file == source => document.sentences.push(tokens.to_vec()),
            _ => self.documents.push(DocumentData {
                file: source.to_string(),
                sentences: vec![tokens.to_vec()],
            }),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
