//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use chemtok_core::{ChemTokenizer, TokenizerConfig};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the tokenizer configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        // Building the tokenizer also reads the configured word lists
        let loaded = TokenizerConfig::from_file(&self.config)
            .and_then(|config| ChemTokenizer::from_config(&config).map(|_| config));

        match loaded {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                print_summary(&config);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

fn print_summary(config: &TokenizerConfig) {
    let on_off = |enabled: bool| if enabled { "on" } else { "off" };
    let source = |path: Option<&Path>| {
        path.map_or_else(|| "bundled".to_string(), |p| p.display().to_string())
    };

    println!("  Normalization: {}", on_off(config.normalization.enabled));
    println!(
        "  Collapse whitespace: {}",
        on_off(config.normalization.collapse_whitespace)
    );
    println!(
        "  Last names: {}",
        source(config.word_lists.last_names.as_deref())
    );
    println!(
        "  Hyphen splits: {}",
        source(config.word_lists.hyphen_splits.as_deref())
    );
    println!(
        "  Extra abbreviations: {}",
        config.extra.abbreviations.len()
    );
    println!("  Extra collocations: {}", config.extra.collocations.len());
}
