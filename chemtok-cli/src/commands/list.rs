//! List command implementation

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use chemtok_core::tables::{abbreviations::ABBREVIATIONS, html::INLINE_ELEMENTS};

use super::tokenize::OutputFormat;

/// Things that can be listed
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// Inline HTML tags kept inside a single token
    Tags,

    /// Built-in abbreviations that keep their period
    Abbreviations,

    /// Output formats of the tokenize command
    Formats,
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> Result<()> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Tags => {
                let mut lines = vec!["Inline HTML tags:".to_string()];
                lines.extend(INLINE_ELEMENTS.iter().map(|tag| format!("  <{tag}>")));
                lines
            }
            ListCommands::Abbreviations => {
                let mut abbreviations = ABBREVIATIONS.to_vec();
                abbreviations.sort_unstable();
                let mut lines = vec![format!("Abbreviations ({}):", abbreviations.len())];
                lines.extend(abbreviations.iter().map(|abbr| format!("  {abbr}")));
                lines
            }
            ListCommands::Formats => {
                let mut lines = vec!["Output formats:".to_string()];
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(ToString::to_string).unwrap_or_default();
                        lines.push(format!("  {:<10} {}", value.get_name(), help));
                    }
                }
                lines
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_tags() {
        let lines = ListCommands::Tags.lines();
        assert_eq!(lines.len(), INLINE_ELEMENTS.len() + 1);
        assert!(lines.contains(&"  <strong>".to_string()));
    }

    #[test]
    fn test_list_abbreviations_sorted() {
        let lines = ListCommands::Abbreviations.lines();
        let entries = &lines[1..];
        assert!(entries.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(entries.contains(&"  ca.".to_string()));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].trim_start().starts_with("text"));
        assert!(lines[2].contains("JSON"));
        assert!(lines[3].trim_start().starts_with("markdown"));
    }

    #[test]
    fn test_execute() {
        assert!(ListCommands::Formats.execute().is_ok());
    }
}
