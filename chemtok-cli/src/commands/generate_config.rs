//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Commented configuration carrying the default settings
const TEMPLATE: &str = r#"# chemtok tokenizer configuration
#
# Every section is optional. Omitted settings keep their defaults.

[normalization]
# Normalize text before tokenizing: Unicode forms, hyphens and quotes,
# British spellings, and spacing between numbers and their units
enabled = true

# Collapse all whitespace to single spaces; set to false to keep line breaks
collapse_whitespace = true

[word_lists]
# Newline-delimited word lists replacing the bundled ones.
# Relative paths are resolved against the directory of this file.
# last_names = "words/lastnames.txt"
# hyphen_splits = "words/hyphen_splits.txt"

[extra]
# Abbreviations whose trailing period never ends a sentence
# Example: abbreviations = ["expt.", "soln."]
abbreviations = []

# Word pairs around a period that never ends a sentence,
# compared in lower case
# Example: collocations = [["j", "phys"]]
collocations = []
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to add word lists or abbreviations");
        println!("2. Validate your configuration:");
        println!("   chemtok validate --config {}", self.output.display());
        println!("3. Use it for tokenizing:");
        println!(
            "   chemtok tokenize -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}
