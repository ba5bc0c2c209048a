//! Construction-time error types
//!
//! Tokenizing and normalizing never fail. Everything that can go wrong
//! happens while the rule tables are being built.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a tokenizer or loading its configuration
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// A word list or configuration file could not be read
    #[error("failed to load resource {path}: {source}")]
    ResourceLoad {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A rule pattern failed to compile
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration file is not valid TOML for this schema
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but failed validation
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for tokenizer construction
pub type Result<T> = std::result::Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_load_display() {
        let error = TokenizerError::ResourceLoad {
            path: PathBuf::from("/missing/lastnames.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = error.to_string();
        assert!(message.starts_with("failed to load resource"));
        assert!(message.contains("/missing/lastnames.txt"));
    }

    #[test]
    fn test_config_display() {
        let error = TokenizerError::Config("abbreviation 'ca' must end with '.'".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: abbreviation 'ca' must end with '.'"
        );
    }

    #[test]
    fn test_pattern_from_regex_error() {
        let regex_error = regex::Regex::new("(unclosed").unwrap_err();
        let error: TokenizerError = regex_error.into();
        assert!(matches!(error, TokenizerError::Pattern(_)));
    }
}
