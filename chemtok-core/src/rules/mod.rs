//! Subtoken rule cascade
//!
//! Each rule inspects one whitespace-delimited token together with the token
//! that follows it and either proposes a split or declines. Rules run in a
//! fixed priority order and the first one that fires wins.

pub mod brackets;
pub mod hyphen;
pub mod operators;
pub mod patterns;
pub mod punctuation;
pub mod quantity;

pub use patterns::RulePatterns;

use crate::error::Result;
use crate::tables::RuleTables;

/// Signature shared by every rule
pub type RuleFn = fn(&RuleEngine, &str, Option<&str>) -> Option<Vec<String>>;

/// A named entry in the cascade
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: RuleFn,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The cascade, highest priority first
pub const RULES: &[Rule] = &[
    Rule {
        name: "bracket_range",
        apply: brackets::bracket_range,
    },
    Rule {
        name: "bracket_peel",
        apply: brackets::bracket_peel,
    },
    Rule {
        name: "edge_punctuation",
        apply: punctuation::edge_punctuation,
    },
    Rule {
        name: "trailing_hyphen_conjunction",
        apply: punctuation::trailing_hyphen_conjunction,
    },
    Rule {
        name: "mark_suffix",
        apply: brackets::mark_suffix,
    },
    Rule {
        name: "state_suffix",
        apply: brackets::state_suffix,
    },
    Rule {
        name: "line_symbol_suffix",
        apply: brackets::line_symbol_suffix,
    },
    Rule {
        name: "terminal_period",
        apply: punctuation::terminal_period,
    },
    Rule {
        name: "quantity",
        apply: quantity::quantity,
    },
    Rule {
        name: "operator",
        apply: operators::operator,
    },
    Rule {
        name: "plus",
        apply: operators::plus,
    },
    Rule {
        name: "colon",
        apply: operators::colon,
    },
    Rule {
        name: "equals",
        apply: operators::equals,
    },
    Rule {
        name: "hyphen",
        apply: hyphen::hyphen_split,
    },
];

/// Rule tables plus the patterns compiled from them
#[derive(Debug, Clone)]
pub struct RuleEngine {
    tables: RuleTables,
    patterns: RulePatterns,
}

impl RuleEngine {
    pub fn new(tables: RuleTables) -> Result<Self> {
        let patterns = RulePatterns::new(&tables)?;
        Ok(Self { tables, patterns })
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    pub fn patterns(&self) -> &RulePatterns {
        &self.patterns
    }

    /// Tokens that are never split: single characters, known abbreviations
    /// and runs of line-drawing symbols
    pub fn is_atomic(&self, token: &str) -> bool {
        token.chars().nth(1).is_none()
            || self.tables.is_abbreviation(token)
            || self.patterns.line_symbol.is_match(token)
    }

    /// Run the cascade on `token`
    ///
    /// Returns the replacement pieces, all non-empty and at least two of
    /// them, or `None` when the token stays as it is.
    pub fn subtokenize(&self, token: &str, next: Option<&str>) -> Option<Vec<String>> {
        if self.is_atomic(token) {
            return None;
        }

        for rule in RULES {
            if let Some(pieces) = (rule.apply)(self, token, next) {
                let pieces: Vec<String> = pieces.into_iter().filter(|p| !p.is_empty()).collect();
                if pieces.len() < 2 {
                    return None;
                }
                tracing::trace!(rule = rule.name, token, ?pieces, "split token");
                return Some(pieces);
            }
        }

        None
    }
}

/// Collect a char slice into an owned string
pub(crate) fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

/// `[chars[..at], chars[at..]]`
pub(crate) fn split_at(chars: &[char], at: usize) -> Vec<String> {
    vec![collect(&chars[..at]), collect(&chars[at..])]
}

/// `[chars[..at], chars[at], chars[at + 1..]]`
pub(crate) fn split_around(chars: &[char], at: usize) -> Vec<String> {
    vec![
        collect(&chars[..at]),
        chars[at].to_string(),
        collect(&chars[at + 1..]),
    ]
}

/// `[stem, suffix]` when `token` ends with `suffix` and is longer than it
pub(crate) fn split_suffix(token: &str, suffix: &str) -> Option<Vec<String>> {
    let stem = token.strip_suffix(suffix)?;
    (!stem.is_empty()).then(|| vec![stem.to_string(), suffix.to_string()])
}
