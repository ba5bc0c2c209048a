//! Tokenizer configuration
//!
//! TOML schema for the optional settings file. Every section may be
//! omitted; an empty document gives the default tokenizer.
//!
//! ```toml
//! [normalization]
//! enabled = true
//! collapse_whitespace = true
//!
//! [word_lists]
//! last_names = "words/lastnames.txt"
//!
//! [extra]
//! abbreviations = ["approx."]
//! collocations = [["j", "phys"]]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenizerError};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub normalization: NormalizationConfig,
    pub word_lists: WordListConfig,
    pub extra: ExtraEntries,
}

/// Normalization applied by `ChemTokenizer::tokenize` before splitting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Normalize input before tokenizing
    pub enabled: bool,
    /// Collapse whitespace runs to single spaces
    pub collapse_whitespace: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            collapse_whitespace: true,
        }
    }
}

/// External word lists; the bundled lists are used for any left unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListConfig {
    /// Newline-delimited surnames
    pub last_names: Option<PathBuf>,
    /// Newline-delimited hyphen-split exceptions
    pub hyphen_splits: Option<PathBuf>,
}

/// Entries appended to the built-in tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraEntries {
    /// Abbreviations including their trailing period
    pub abbreviations: Vec<String>,
    /// `[before, after]` word pairs
    pub collocations: Vec<[String; 2]>,
}

impl TokenizerConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// Relative word-list paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TokenizerError::ResourceLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            config.word_lists.resolve_relative_to(base);
        }
        tracing::debug!(path = %path.display(), "loaded tokenizer configuration");
        Ok(config)
    }

    /// Check entry shapes
    pub fn validate(&self) -> Result<()> {
        for abbr in &self.extra.abbreviations {
            if abbr.chars().count() < 2 || !abbr.ends_with('.') {
                return Err(TokenizerError::Config(format!(
                    "abbreviation '{abbr}' must end with '.' and have at least one other character"
                )));
            }
            if abbr.chars().any(char::is_whitespace) {
                return Err(TokenizerError::Config(format!(
                    "abbreviation '{abbr}' must not contain whitespace"
                )));
            }
        }

        for [before, after] in &self.extra.collocations {
            let valid = |word: &str| !word.is_empty() && !word.chars().any(char::is_whitespace);
            if !valid(before) || !valid(after) {
                return Err(TokenizerError::Config(format!(
                    "collocation [\"{before}\", \"{after}\"] must be two non-empty words"
                )));
            }
        }

        Ok(())
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TokenizerError::Config(e.to_string()))
    }
}

impl WordListConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.last_names, &mut self.hyphen_splits]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Builder for [`TokenizerConfig`]
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    config: TokenizerConfig,
}

impl TokenizerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable normalization before tokenizing
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.config.normalization.enabled = enabled;
        self
    }

    /// Keep line breaks when normalizing
    pub fn collapse_whitespace(mut self, collapse: bool) -> Self {
        self.config.normalization.collapse_whitespace = collapse;
        self
    }

    /// Read surnames from a file instead of the bundled list
    pub fn last_names(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.word_lists.last_names = Some(path.into());
        self
    }

    /// Read hyphen-split exceptions from a file instead of the bundled list
    pub fn hyphen_splits(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.word_lists.hyphen_splits = Some(path.into());
        self
    }

    /// Add an abbreviation
    pub fn abbreviation(mut self, abbr: impl Into<String>) -> Self {
        self.config.extra.abbreviations.push(abbr.into());
        self
    }

    /// Add a collocation pair
    pub fn collocation(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.config
            .extra
            .collocations
            .push([before.into(), after.into()]);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TokenizerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
