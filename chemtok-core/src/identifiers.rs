//! Chemical identifier extraction
//!
//! Each extractor checks whitespace-separated words against the full
//! identifier grammar, so identifiers glued to punctuation are not found.

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::tables::elements::ELEMENT_SYMBOLS;
use crate::text::bracket_level;

const CAS: &str = r"^[0-9]{1,7}-[0-9]{2}-[0-9]$";

const INCHIKEY: &str = r"^[A-Z]{14}-[A-Z]{10}-[A-Z0-9]$";

const INCHI: &str = concat!(
    r"^(?:InChI=)?1S?/",
    r"(?:p\+1|[0-9]*[a-ik-z][a-ik-z0-9.]*(?:/c[0-9\-*(),;]+)?(?:/h[0-9\-*h(),;]+)?)",
    r"(?:/[bmpqst][0-9\-.+*,;?]*",
    r"|/i[hdt0-9\-+*,;]*(?:/h[hdt0-9]+)?",
    r"|/r[a-ik-z0-9]+(?:/c[0-9\-*(),;]+)?(?:/h[0-9\-*h(),;]+)?",
    r"|/f[a-ik-z0-9]*(?:/h[0-9\-*h(),;]+)?)*$",
);

/// Compiled identifier grammars
#[derive(Debug, Clone)]
pub struct IdentifierExtractor {
    cas: Regex,
    inchikey: Regex,
    inchi: Regex,
    smiles: Regex,
}

impl IdentifierExtractor {
    pub fn new() -> Result<Self> {
        // Organic-subset atoms or a bracket atom with isotope, chirality,
        // hydrogen count, charge and class
        let atom = format!(
            r"(?:[BCNOPSFIbcnosp*]|Cl|Br|\[[0-9]*(?:{}|se|as|\*)(?:@+(?:[THALSPBO][0-9]+)?)?(?:H[0-9]?)?(?:[\-+]+[0-9]*)?(?::[0-9]+)?\])",
            ELEMENT_SYMBOLS.join("|")
        );
        let smiles = format!(r"^{atom}(?:{atom}|[\-=#$:\\/()%.+0-9])*$");

        Ok(Self {
            cas: Regex::new(CAS)?,
            inchikey: Regex::new(INCHIKEY)?,
            inchi: RegexBuilder::new(INCHI).case_insensitive(true).build()?,
            smiles: Regex::new(&smiles)?,
        })
    }

    /// CAS registry numbers (`7732-18-5`)
    pub fn extract_cas<'t>(&self, text: &'t str) -> Vec<&'t str> {
        words_matching(text, &self.cas)
    }

    pub fn extract_inchikeys<'t>(&self, text: &'t str) -> Vec<&'t str> {
        words_matching(text, &self.inchikey)
    }

    pub fn extract_inchis<'t>(&self, text: &'t str) -> Vec<&'t str> {
        words_matching(text, &self.inchi)
    }

    /// SMILES strings of three or more characters
    ///
    /// Words ending in `.` or with unbalanced brackets are skipped, which
    /// rules out most sentence-final words and formula fragments.
    pub fn extract_smiles<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_whitespace()
            .filter(|word| {
                word.chars().count() > 2
                    && !word.ends_with('.')
                    && bracket_level(word) == 0
                    && self.smiles.is_match(word)
            })
            .collect()
    }

    pub fn is_smiles(&self, word: &str) -> bool {
        self.smiles.is_match(word)
    }

    pub fn is_inchi(&self, word: &str) -> bool {
        self.inchi.is_match(word)
    }
}

fn words_matching<'t>(text: &'t str, re: &Regex) -> Vec<&'t str> {
    text.split_whitespace()
        .filter(|word| re.is_match(word))
        .collect()
}
