//! Text normalization ahead of tokenization
//!
//! Unifies Unicode forms, hyphens, quotes and whitespace, then applies the
//! chemistry-specific spelling and spacing fixes. Normalizing never fails.

use regex::{Captures, Regex, RegexBuilder};
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizationConfig;
use crate::error::Result;
use crate::pattern::{
    literal_alternation, replace_all_before_tail, replace_all_where, starts_on_boundary,
};
use crate::tables::elements::ELEMENTS;
use crate::text::{is_hyphen, match_case, CONTROLS};

const SOFT_HYPHEN: char = '\u{00ad}';

/// Spelling variants unified to the IUPAC form
const SPELLINGS: &[(&str, &str)] = &[
    ("sulph", "sulf"),
    ("aluminum", "aluminium"),
    ("cesium", "caesium"),
];

// Quantity followed directly by a unit. The left context excludes `>`, `-`,
// approx signs and `)` so that formulae like `(C2H5)4N` are left alone.
const QUANTITY: &str = concat!(
    r"(^|[^A-Za-z0-9_>\-∼~≈)])([∼~≈]?)",
    r"((?:(?:(?:[0-9]|[1-9][0-9]+)(?:\.[0-9]+)?|\.[0-9]+)-)?(?:[0-9]|[1-9][0-9]+)(?:\.[0-9]+)?|\.[0-9]+)",
    r"([cdGkmMnpTuμµ]?(?:[JlLMmNVW]|[Gg]ramm?e?s?|Hz|[Mm][Oo][Ll](?:e|ar)?s?|h?Pa|ppm)(?:-?[0-9])?)",
    r"($|[^A-Za-z0-9_<\-])",
);

const QUANTITY_GRAMS: &str = concat!(
    r"(^|[^A-Za-z0-9_>\-∼~≈)])([∼~≈]?)",
    r"((?:[0-9]|[1-9][0-9]+)(?:\.[0-9]+)?|\.[0-9]+)",
    r"([kmnuμµ]?g(?:-?[0-9])?)",
    r"($|[^A-Za-z0-9_<\-])",
);

const QUANTITY_SECONDS: &str = concat!(
    r"(^|[^A-Za-z0-9_>\-∼~≈)])([∼~≈]?)",
    r"((?:[0-9]|[1-9][0-9]+)(?:\.[0-9]+)?|\.[0-9]+)",
    r"([mnpuμµ]?s(?:-?[0-9])?)",
    r"($|[^A-Za-z0-9_<\-])",
);

// The trailing group of the quantity patterns is left in place so that it
// can also serve as the leading context of the next quantity
const QUANTITY_REPLACEMENT: &str = "${1}${2}${3} ${4}";

/// Chemistry-aware text normalizer
#[derive(Debug, Clone)]
pub struct Normalizer {
    collapse_whitespace: bool,
    spellings: Vec<(Regex, &'static str)>,
    oxidation_state: Regex,
    quantity: Regex,
    quantity_grams: Regex,
    quantity_seconds: Regex,
    percent: Regex,
    ph: Regex,
    temperature: Regex,
}

impl Normalizer {
    /// Normalizer that collapses all whitespace to single spaces
    pub fn new() -> Result<Self> {
        Self::with_collapse(true)
    }

    /// Normalizer following the `[normalization]` settings
    pub fn from_config(config: &NormalizationConfig) -> Result<Self> {
        Self::with_collapse(config.collapse_whitespace)
    }

    /// Normalizer that keeps line breaks when `collapse_whitespace` is false
    pub fn with_collapse(collapse_whitespace: bool) -> Result<Self> {
        let spellings = SPELLINGS
            .iter()
            .map(|(from, to)| {
                RegexBuilder::new(&regex::escape(from))
                    .case_insensitive(true)
                    .build()
                    .map(|re| (re, *to))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let oxidation_state = Regex::new(&format!(
            r"(?i)({}) \(([0-9][+-]|[+-][0-9]|0|I{{1,3}}|IV|VI{{0,3}}|IX)\)",
            literal_alternation(ELEMENTS.iter().copied())
        ))?;

        Ok(Self {
            collapse_whitespace,
            spellings,
            oxidation_state,
            quantity: Regex::new(QUANTITY)?,
            quantity_grams: Regex::new(QUANTITY_GRAMS)?,
            quantity_seconds: Regex::new(QUANTITY_SECONDS)?,
            percent: Regex::new(r"(-?[0-9]+(?:\.[0-9]+)?|[0-9]*\.[0-9]+)%($|[^A-Za-z0-9_])")?,
            ph: Regex::new(r"(?i)(ph)(-?[0-9]+(?:\.[0-9]+)?)($|[^A-Za-z0-9_])")?,
            temperature: Regex::new(r"(?i)([0-9])\s*([°º])\s*([cf]?)($|[^A-Za-z0-9_])")?,
        })
    }

    /// Whether whitespace runs are collapsed
    pub fn collapses_whitespace(&self) -> bool {
        self.collapse_whitespace
    }

    /// Normalize `text`
    pub fn normalize(&self, text: &str) -> String {
        let text = self.normalize_characters(text);
        let text = self.normalize_spelling(&text);
        self.normalize_spacing(&text)
    }

    /// Unicode, control, hyphen, quote and whitespace unification
    fn normalize_characters(&self, text: &str) -> String {
        let text: String = text
            .nfkc()
            .filter(|c| !CONTROLS.contains(c) && *c != SOFT_HYPHEN)
            .map(|c| if is_hyphen(c) { '-' } else { c })
            .collect();

        let text = text
            .replace("\"\u{2018}", "\u{201c}")
            .replace("\u{2019}'", "\u{201d}")
            .replace("''", "\u{201d}")
            .replace("``", "\u{201c}");

        let text = text
            .replace(['\u{000b}', '\u{000c}', '\u{0085}'], " ")
            .replace(['\u{2028}', '\u{2029}'], "\n")
            .replace("\r\n", "\n")
            .replace('\r', "\n");

        if self.collapse_whitespace {
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            text
        }
    }

    /// Spelling variants and element oxidation-state spacing
    fn normalize_spelling(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (re, replacement) in &self.spellings {
            text = re
                .replace_all(&text, |caps: &Captures<'_>| match_case(replacement, &caps[0]))
                .into_owned();
        }
        self.oxidation_state
            .replace_all(&text, "${1}(${2})")
            .into_owned()
    }

    /// Spaces between numbers and their units, percent, pH and temperature
    fn normalize_spacing(&self, text: &str) -> String {
        let text = replace_all_before_tail(&self.quantity, text, QUANTITY_REPLACEMENT, |_, _| true);
        let text = replace_all_before_tail(
            &self.quantity_grams,
            &text,
            QUANTITY_REPLACEMENT,
            |_, _| true,
        );
        // `1s` and `2s` are orbitals far more often than seconds
        let text = replace_all_before_tail(
            &self.quantity_seconds,
            &text,
            QUANTITY_REPLACEMENT,
            |_, caps| !is_orbital(&caps[3], &caps[4]),
        );
        let text = replace_all_where(&self.percent, &text, "${1} %${2}", starts_on_boundary);
        let text = replace_all_where(&self.ph, &text, "${1} ${2}${3}", starts_on_boundary);
        let text = self
            .temperature
            .replace_all(&text, "${1} ${2}${3}${4}")
            .into_owned();
        text.replace(" \u{0307}", "\u{02d9}")
    }
}

/// `1s` / `2s` orbital notation
pub(crate) fn is_orbital(number: &str, unit: &str) -> bool {
    matches!(number, "1" | "2") && unit.starts_with('s')
}
