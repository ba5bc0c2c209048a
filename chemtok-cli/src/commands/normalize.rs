//! Normalize command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use chemtok_core::Normalizer;

use super::{init_logging, open_output};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep line breaks instead of collapsing all whitespace
    #[arg(long)]
    pub keep_lines: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let normalizer = Normalizer::with_collapse(!self.keep_lines)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Normalizing {} file(s)", files.len());

        let mut writer = open_output(self.output.as_deref())?;
        for path in &files {
            let text = FileReader::read_text(path)?;
            let normalized = normalizer.normalize(&text);
            log::debug!(
                "{}: {} -> {} bytes",
                path.display(),
                text.len(),
                normalized.len()
            );
            writeln!(writer, "{normalized}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
