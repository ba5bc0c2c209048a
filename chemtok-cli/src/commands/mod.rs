//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chemtok_core::TokenizerConfig;

use crate::error::CliError;

pub mod generate_config;
pub mod list;
pub mod normalize;
pub mod tokenize;
pub mod validate;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize text files into sentences of chemistry-aware tokens
    Tokenize(tokenize::TokenizeArgs),

    /// Normalize text files without tokenizing
    Normalize(normalize::NormalizeArgs),

    /// Validate a tokenizer configuration file
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::Normalize(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the `-v` count.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Ignored when a logger is already installed
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Load the configuration at `path`, or the defaults when none is given
pub(crate) fn load_config(path: Option<&Path>) -> Result<TokenizerConfig> {
    match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            TokenizerConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
        }
        None => Ok(TokenizerConfig::default()),
    }
}

/// Buffered writer for `path`, or stdout
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
