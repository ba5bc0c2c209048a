//! Chemistry-aware tokenization for scientific text
//!
//! Splits raw text from papers and patents into sentences of tokens while
//! keeping chemical names, formulae, oxidation states and isotope labels in
//! one piece, and separating numbers from their units.
//!
//! # Architecture
//!
//! - **Normalizer**: Unicode, hyphen, quote and whitespace unification plus
//!   spelling and unit-spacing fixes
//! - **Rule tables**: built-in vocabulary and optional external word lists
//! - **Rule engine**: an ordered cascade of splitting rules applied to one
//!   token at a time
//! - **Tokenizer**: whitespace split, inline HTML fusion and repeated rule
//!   application until the tokens stop changing
//! - **Segmenter**: groups the flat token list into sentences
//!
//! # Example
//!
//! ```rust
//! use chemtok_core::ChemTokenizer;
//!
//! let tokenizer = ChemTokenizer::new().unwrap();
//! let sentences = tokenizer.tokenize("Dissolved in NaOH(aq) at 25°C. Then Fe(III) was added.");
//!
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(
//!     sentences[0],
//!     vec!["Dissolved", "in", "NaOH", "(", "aq", ")", "at", "25", "°", "C", "."]
//! );
//! assert_eq!(sentences[1], vec!["Then", "Fe(III)", "was", "added", "."]);
//! ```

pub mod config;
pub mod error;
pub mod identifiers;
pub mod normalize;
mod pattern;
pub mod rules;
pub mod segment;
pub mod solvent;
pub mod tables;
pub mod text;
pub mod tokenizer;

pub use config::{
    ExtraEntries, NormalizationConfig, TokenizerConfig, TokenizerConfigBuilder, WordListConfig,
};
pub use error::{Result, TokenizerError};
pub use identifiers::IdentifierExtractor;
pub use normalize::Normalizer;
pub use rules::{Rule, RuleEngine, RULES};
pub use segment::segment;
pub use solvent::{SolventMatch, SolventMatcher};
pub use tables::{RuleTables, WordList};
pub use tokenizer::ChemTokenizer;
