//! Output formatting module

use anyhow::Result;
use std::io::Write;

use crate::commands::tokenize::OutputFormat;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Called before the sentences of each input file
    fn start_document(&mut self, _source: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output one tokenized sentence from `source`
    fn format_sentence(&mut self, source: &str, tokens: &[String]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Formatter for `format` writing to `writer`
pub fn create_formatter<W>(format: OutputFormat, writer: W) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
