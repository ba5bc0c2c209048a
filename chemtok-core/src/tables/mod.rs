//! Rule tables
//!
//! Vocabulary consulted by the normalizer and the rule engine. Everything
//! is built once per tokenizer and never mutated afterwards.

pub mod abbreviations;
pub mod elements;
pub mod html;
pub mod morphology;
pub mod solvents;
pub mod wordlist;

use std::collections::HashSet;

pub use wordlist::{Casing, WordList};

use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::text::NAME_SMALL;

/// Immutable lookup tables for one tokenizer instance
#[derive(Debug, Clone)]
pub struct RuleTables {
    pub elements: &'static [&'static str],
    pub element_symbols: &'static [&'static str],
    pub solvents: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    /// Lower-case abbreviations, each with its trailing period
    pub abbreviations: HashSet<String>,
    /// Case-sensitive surnames
    pub last_names: WordList,
    pub name_particles: HashSet<&'static str>,
    /// Lower-case `(before, after)` pairs
    pub collocations: HashSet<(String, String)>,
    /// Pattern fragments, see [`morphology::NO_SPLIT_PREFIXES`]
    pub no_split_prefixes: Vec<String>,
    pub split_words: HashSet<&'static str>,
    /// Lower-case hyphenated words kept whole and spaced pairs split apart
    pub hyphen_splits: WordList,
    pub inline_html_tags: &'static [&'static str],
}

impl RuleTables {
    /// Tables built from the bundled vocabulary only
    pub fn new() -> Self {
        Self::with_word_lists(
            WordList::parse(wordlist::EMBEDDED_LAST_NAMES, Casing::Preserve),
            WordList::parse(wordlist::EMBEDDED_HYPHEN_SPLITS, Casing::Lower),
        )
    }

    /// Tables with word lists and extra entries taken from `config`
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        let lists = &config.word_lists;
        let last_names = WordList::load(
            lists.last_names.as_deref(),
            wordlist::EMBEDDED_LAST_NAMES,
            Casing::Preserve,
        )?;
        let hyphen_splits = WordList::load(
            lists.hyphen_splits.as_deref(),
            wordlist::EMBEDDED_HYPHEN_SPLITS,
            Casing::Lower,
        )?;

        let mut tables = Self::with_word_lists(last_names, hyphen_splits);
        tables.abbreviations.extend(
            config
                .extra
                .abbreviations
                .iter()
                .map(|abbr| abbr.to_lowercase()),
        );
        tables.collocations.extend(
            config
                .extra
                .collocations
                .iter()
                .map(|[before, after]| (before.to_lowercase(), after.to_lowercase())),
        );
        Ok(tables)
    }

    fn with_word_lists(last_names: WordList, hyphen_splits: WordList) -> Self {
        let mut no_split_prefixes: Vec<String> = morphology::NO_SPLIT_PREFIXES
            .iter()
            .map(|prefix| prefix.to_string())
            .collect();
        no_split_prefixes.push(morphology::LOCANT_PREFIX.to_string());

        let tables = Self {
            elements: elements::ELEMENTS,
            element_symbols: elements::ELEMENT_SYMBOLS,
            solvents: solvents::SOLVENTS,
            prefixes: solvents::PREFIXES,
            abbreviations: abbreviations::ABBREVIATIONS
                .iter()
                .map(|abbr| abbr.to_lowercase())
                .collect(),
            last_names,
            name_particles: NAME_SMALL.iter().copied().collect(),
            collocations: abbreviations::COLLOCATIONS
                .iter()
                .map(|(before, after)| (before.to_string(), after.to_string()))
                .collect(),
            no_split_prefixes,
            split_words: morphology::SPLIT_WORDS.iter().copied().collect(),
            hyphen_splits,
            inline_html_tags: html::INLINE_ELEMENTS,
        };
        tracing::debug!(
            abbreviations = tables.abbreviations.len(),
            last_names = tables.last_names.len(),
            hyphen_splits = tables.hyphen_splits.len(),
            "built rule tables"
        );
        tables
    }

    /// `token` lower-cased is a known abbreviation
    pub fn is_abbreviation(&self, token: &str) -> bool {
        self.abbreviations.contains(&token.to_lowercase())
    }

    /// Case-insensitive collocation lookup
    pub fn is_collocation(&self, before: &str, after: &str) -> bool {
        self.collocations
            .contains(&(before.to_lowercase(), after.to_lowercase()))
    }

    pub fn is_name_particle(&self, word: &str) -> bool {
        self.name_particles.contains(word.to_lowercase().as_str())
    }

    /// Case-insensitive membership in the split word class
    pub fn is_split_word(&self, word: &str) -> bool {
        self.split_words.contains(word.to_lowercase().as_str())
    }

    /// `word` optionally prefixed with un/de/re/pre and optionally plural
    pub fn is_split_suffix(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        ["", "un", "de", "re", "pre"].iter().any(|prefix| {
            word.strip_prefix(prefix).is_some_and(|stem| {
                self.split_words.contains(stem)
                    || stem
                        .strip_suffix('s')
                        .is_some_and(|singular| self.split_words.contains(singular))
            })
        })
    }

    /// Hyphen-split exception lookup, case-insensitive
    pub fn is_hyphen_exception(&self, word: &str) -> bool {
        self.hyphen_splits.contains(&word.to_lowercase())
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations_case_insensitive() {
        let tables = RuleTables::new();
        assert!(tables.is_abbreviation("ca."));
        assert!(tables.is_abbreviation("Fig."));
        assert!(tables.is_abbreviation("ΛVS."));
        assert!(!tables.is_abbreviation("ca"));
    }

    #[test]
    fn test_collocations() {
        let tables = RuleTables::new();
        assert!(tables.is_collocation("J", "Chem"));
        assert!(tables.is_collocation("M", "1.5"));
        assert!(!tables.is_collocation("J", "Smith"));
    }

    #[test]
    fn test_split_suffix_forms() {
        let tables = RuleTables::new();
        assert!(tables.is_split_suffix("modified"));
        assert!(tables.is_split_suffix("bonds"));
        assert!(tables.is_split_suffix("Unsaturated"));
        assert!(tables.is_split_suffix("pretreatment"));
        assert!(tables.is_split_suffix("groups"));
        assert!(!tables.is_split_suffix("butanol"));
        assert!(!tables.is_split_suffix("d6"));
    }

    #[test]
    fn test_split_word_and_particles() {
        let tables = RuleTables::new();
        assert!(tables.is_split_word("Self"));
        assert!(!tables.is_split_word("tetra"));
        assert!(tables.is_name_particle("Van"));
        assert!(!tables.is_name_particle("Smith"));
    }

    #[test]
    fn test_no_split_prefixes_include_locant() {
        let tables = RuleTables::new();
        assert!(tables
            .no_split_prefixes
            .iter()
            .any(|prefix| prefix == morphology::LOCANT_PREFIX));
        assert!(tables.no_split_prefixes.iter().any(|prefix| prefix == "non"));
    }

    #[test]
    fn test_inline_tags() {
        let tables = RuleTables::new();
        assert!(tables.inline_html_tags.contains(&"strong"));
        assert!(tables.inline_html_tags.contains(&"sub"));
        assert!(!tables.inline_html_tags.contains(&"div"));
    }

    #[test]
    fn test_element_tables() {
        let tables = RuleTables::new();
        assert!(tables.elements.contains(&"iron"));
        assert!(tables.element_symbols.contains(&"Fe"));
        assert!(tables.element_symbols.contains(&"Cu"));
        assert_eq!(tables.element_symbols.len(), 118);
    }
}
