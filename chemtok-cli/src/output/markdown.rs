//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs sentences as a numbered list with tokens in
/// code spans
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
            token_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, _source: &str, tokens: &[String]) -> Result<()> {
        self.sentence_count += 1;
        self.token_count += tokens.len();
        let spans: Vec<String> = tokens.iter().map(|token| code_span(token)).collect();
        writeln!(self.writer, "{}. {}", self.sentence_count, spans.join(" "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total sentences: {}, tokens: {}*",
            self.sentence_count, self.token_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Inline code span, widened past any backtick run inside the token
fn code_span(token: &str) -> String {
    let longest_run = token
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    if longest_run > 0 {
        format!("{fence} {token} {fence}")
    } else {
        format!("{fence}{token}{fence}")
    }
}
