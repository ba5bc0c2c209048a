//! Newline-delimited word lists
//!
//! Blank lines and surrounding whitespace are ignored. Lists are either
//! embedded in the crate or read from disk once at construction.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, TokenizerError};

/// Bundled surname list
pub const EMBEDDED_LAST_NAMES: &str = include_str!("../../data/words/lastnames.txt");

/// Bundled hyphen-split exception list
pub const EMBEDDED_HYPHEN_SPLITS: &str = include_str!("../../data/words/hyphen_splits.txt");

/// Case handling applied to each entry when a list is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// Keep entries exactly as written
    Preserve,
    /// Fold entries to lower case
    Lower,
}

/// An immutable set of words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Parse a list from its text
    pub fn parse(text: &str, casing: Casing) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| match casing {
                Casing::Preserve => line.to_string(),
                Casing::Lower => line.to_lowercase(),
            })
            .collect();
        Self { words }
    }

    /// Read a list from disk
    ///
    /// A missing or unreadable file is a [`TokenizerError::ResourceLoad`].
    pub fn from_file(path: &Path, casing: Casing) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TokenizerError::ResourceLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&text, casing);
        tracing::debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    /// Read `path` when given, otherwise parse the embedded text
    pub fn load(path: Option<&Path>, embedded: &str, casing: Casing) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path, casing),
            None => Ok(Self::parse(embedded, casing)),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_skips_blank_lines() {
        let list = WordList::parse("Smith\n\n  Jones  \n", Casing::Preserve);
        assert_eq!(list.len(), 2);
        assert!(list.contains("Smith"));
        assert!(list.contains("Jones"));
        assert!(!list.contains("smith"));
    }

    #[test]
    fn test_parse_lowercase() {
        let list = WordList::parse("X-Ray\nIon Exchange\n", Casing::Lower);
        assert!(list.contains("x-ray"));
        assert!(list.contains("ion exchange"));
        assert!(!list.contains("X-Ray"));
    }

    #[test]
    fn test_embedded_lists_are_populated() {
        assert!(!WordList::parse(EMBEDDED_LAST_NAMES, Casing::Preserve).is_empty());
        assert!(!WordList::parse(EMBEDDED_HYPHEN_SPLITS, Casing::Lower).is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Pauling").unwrap();
        writeln!(file, "Curie").unwrap();

        let list = WordList::from_file(file.path(), Casing::Preserve).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("Curie"));
    }

    #[test]
    fn test_missing_file_is_resource_error() {
        let result = WordList::from_file(Path::new("/nonexistent/words.txt"), Casing::Lower);
        match result {
            Err(TokenizerError::ResourceLoad { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/words.txt"));
            }
            other => panic!("expected resource error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_prefers_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Only").unwrap();

        let list = WordList::load(Some(file.path()), "Embedded\n", Casing::Preserve).unwrap();
        assert!(list.contains("Only"));
        assert!(!list.contains("Embedded"));

        let list = WordList::load(None, "Embedded\n", Casing::Preserve).unwrap();
        assert!(list.contains("Embedded"));
    }
}
