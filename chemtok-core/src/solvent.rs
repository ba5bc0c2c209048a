//! Solvent name recognition
//!
//! Matches names from the solvent table with an optional isomer, locant or
//! deuteration prefix (`iso`, `1,2-`, `d2-`) and an optional `-dN` suffix.
//! Multi-word names also match when written with a hyphen or run together.

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::pattern::{literal_alternation, step_past};
use crate::tables::RuleTables;
use crate::text::is_word_boundary;

const SIZE_LIMIT: usize = 64 * (1 << 20);

/// Characters a prefix can take: the longest table prefix or a locant
/// such as `1,2,3,4`, plus its hyphen
fn prefix_chars(tables: &RuleTables) -> usize {
    let longest = tables.prefixes.iter().map(|p| p.chars().count()).max().unwrap_or(0);
    longest.max("1,2,3,4".len()) + 1
}

/// A solvent name found in text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolventMatch<'t> {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    pub text: &'t str,
}

impl<'t> SolventMatch<'t> {
    pub fn as_str(&self) -> &'t str {
        self.text
    }
}

/// Case-insensitive solvent finder
#[derive(Debug, Clone)]
pub struct SolventMatcher {
    regex: Regex,
    anchored: Regex,
    max_chars: usize,
}

impl SolventMatcher {
    /// Matcher over the bundled solvent and prefix tables
    pub fn new() -> Result<Self> {
        Self::from_tables(&RuleTables::new())
    }

    pub fn from_tables(tables: &RuleTables) -> Result<Self> {
        let prefixes = literal_alternation(tables.prefixes.iter().copied());
        let solvents = literal_alternation(tables.solvents.iter().copied()).replace(' ', r"[\s\-]?");
        let pattern = format!(
            r"(?:(?:{prefixes}|d[0-9]?[0-9]?|[0-9n](?:,[0-9n]){{0,3}}|[imnoptDLRS])-?)?(?:{solvents})(?:-d[0-9]?[0-9]?)?"
        );
        let build = |pattern: &str| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .size_limit(SIZE_LIMIT)
                .build()
        };
        let regex = build(&pattern)?;
        let anchored = build(&format!("^(?:{pattern})$"))?;

        let longest = tables.solvents.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        // `-d99` is the longest deuteration suffix
        let max_chars = prefix_chars(tables) + longest + 4;

        tracing::debug!(solvents = tables.solvents.len(), "compiled solvent matcher");
        Ok(Self {
            regex,
            anchored,
            max_chars,
        })
    }

    /// All solvent names in `text`, left to right
    ///
    /// A match must start and end on an ASCII word boundary or at the
    /// edges of the text. When the longest name at a position runs into a
    /// word character, shorter readings at the same position are tried, so
    /// `THF-d8x` still yields `THF`.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<SolventMatch<'t>> {
        let mut found = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(m) = self.regex.find_at(text, pos) else {
                break;
            };
            let start = m.start();
            match self.bounded_end(text, start) {
                Some(end) => {
                    found.push(SolventMatch {
                        start,
                        end,
                        text: &text[start..end],
                    });
                    pos = end;
                }
                None => pos = step_past(text, start),
            }
        }

        found
    }

    /// End of the longest name starting at `start` that also ends on a
    /// word boundary
    fn bounded_end(&self, text: &str, start: usize) -> Option<usize> {
        if start != 0 && !is_word_boundary(text, start) {
            return None;
        }

        let rest = &text[start..];
        let ends: Vec<usize> = rest
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(rest.len()))
            .take(self.max_chars)
            .filter(|&len| start + len == text.len() || is_word_boundary(text, start + len))
            .collect();

        ends.into_iter()
            .rev()
            .find(|&len| self.anchored.is_match(&rest[..len]))
            .map(|len| start + len)
    }

    /// Matched names only
    pub fn names<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.find_all(text)
            .into_iter()
            .map(|m| m.as_str())
            .collect()
    }

    pub fn is_match(&self, text: &str) -> bool {
        !self.find_all(text).is_empty()
    }
}
