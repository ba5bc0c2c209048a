//! Compiled patterns used by the rule cascade

use regex::Regex;

use crate::error::Result;
use crate::pattern::literal_alternation;
use crate::tables::RuleTables;
use crate::text::HYPHENS;

/// Capitalized name of four or more letters, with optional `O'`/`Mc`/`Mac`
/// prefix and possessive
const PROPER_NOUN: &str = r"(?:O'|Ma?c)?[A-Z][a-z]{3,}(?:s'|'s)?";

/// Regular expressions compiled once per engine
#[derive(Debug, Clone)]
pub struct RulePatterns {
    /// Element name or symbol followed by a parenthesized oxidation state
    pub oxidation_state: Regex,
    /// `(a)-(b)` ranges
    pub bracket_range: Regex,
    /// Ring-fusion and locant colons (`η1:η1`, `2,2':6`, `4:7,10`)
    pub chem_name_colon: Regex,
    /// Double and triple bond formulae (`CH2=CH2`)
    pub chem_name_equals: Regex,
    pub quantity: Regex,
    pub percentage: Regex,
    pub ph: Regex,
    pub temperature: Regex,
    /// One or more personal initials (`A.`, `J.-P.`)
    pub initial: Regex,
    /// Runs of dashes, dots, bullets and plot markers
    pub line_symbol: Regex,
    /// Genus-like words that follow a single capital initial (`E. coli`)
    pub chem_after_initial: Regex,
    /// Hyphenated proper nouns (`Diels-Alder`)
    pub proper_noun_hyphen: Regex,
    /// Stems that keep a hyphenated token whole
    pub no_split_prefix: Regex,
}

impl RulePatterns {
    pub fn new(tables: &RuleTables) -> Result<Self> {
        let species = literal_alternation(
            tables
                .elements
                .iter()
                .chain(tables.element_symbols.iter())
                .copied(),
        );
        let hyphens: String = HYPHENS
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let no_split = tables.no_split_prefixes.join("|");

        Ok(Self {
            oxidation_state: Regex::new(&format!(
                r"(?i)(?:{species})\((?:o|i{{1,4}}|i{{0,3}}[xv]|[xv]i{{0,4}})\)$"
            ))?,
            bracket_range: Regex::new(r"^\(([A-Za-z0-9_]+)\)-\(([A-Za-z0-9_]+)\)$")?,
            chem_name_colon: Regex::new(concat!(
                r"η[0-9]:η[0-9]",
                r"|[0-9]+[a-g]?[′']*(?:alpha|beta)?,[0-9][a-g]?[′']*(?:alpha|beta)?(?:-(?:[a-zA-Z][′']*)+)?:[0-9]",
                r"|[0-9][a-g]?[′']*(?:alpha|beta)?(?:-(?:[a-zA-Z][′']*)+)?:[0-9][a-g]?[′']*(?:alpha|beta)?,[0-9]",
            ))?,
            chem_name_equals: Regex::new(r"[^=]*[CNHOP]+[0-9]*[()]?=\(?[CNOP].*")?,
            quantity: Regex::new(concat!(
                r"^([∼~≈]?-?[0-9]+(?:\.[0-9]+)?|[0-9]*\.[0-9]+)",
                r"([cdGkmMnpTuμµ]?(?:[gJlLMmNsVW]|[Gg]ramm?e?s?|Hz|[Mm][Oo][Ll](?:e|ar)?s?|h?Pa|ppm)(?:-?[0-9])?)$",
            ))?,
            percentage: Regex::new(r"^(-?[0-9]+(?:\.[0-9]+)?|[0-9]*\.[0-9]+)(%)$")?,
            ph: Regex::new(r"(?i)^(ph)(-?[0-9]+(?:\.[0-9]+)?|[0-9]*\.[0-9]+)$")?,
            temperature: Regex::new(
                r"(?i)^([∼~≈]?-?[0-9]+(?:\.[0-9]+)?|[0-9]*\.[0-9]+)?([°º])([cf])?$",
            )?,
            initial: Regex::new(r"^(?:-?[A-Zv]\.)+$")?,
            line_symbol: Regex::new(r"^[\-–—−*+.=_~×…·■●▲○◆▼△◇▽⬚]+$")?,
            chem_after_initial: Regex::new(
                r"^[a-z]+?(?:o[blnrs]a|i[cdlnv]a|o[lr]i|a[nt]a|[ae]ns|u[ms]|i[ais]|ae|e(?:ll)?a|et?i|u[cls]?a)$",
            )?,
            proper_noun_hyphen: Regex::new(&format!(
                r"^(?:{PROPER_NOUN}[{hyphens}])+{PROPER_NOUN}"
            ))?,
            no_split_prefix: Regex::new(&format!(
                r"(?i)(?:^|[^A-Za-z0-9_]|[0-9])(?:{no_split})(?:-n)?$"
            ))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> RulePatterns {
        RulePatterns::new(&RuleTables::new()).unwrap()
    }

    #[test]
    fn test_oxidation_state() {
        let p = patterns();
        assert!(p.oxidation_state.is_match("Fe(III)"));
        assert!(p.oxidation_state.is_match("iron(iii)"));
        assert!(p.oxidation_state.is_match("(iron(IV)"));
        assert!(!p.oxidation_state.is_match("Fe(3+)"));
        assert!(!p.oxidation_state.is_match("NaOH(aq)"));
        assert!(!p.oxidation_state.is_match("Fe(III)]"));
    }

    #[test]
    fn test_chem_name_colon() {
        let p = patterns();
        assert!(p.chem_name_colon.is_match("μ-η1:η1-(C8H5N)"));
        assert!(p.chem_name_colon.is_match("2,2':6',2''-Terphenyl"));
        assert!(p.chem_name_colon.is_match("4:7,10:13-diepoxy"));
        assert!(!p.chem_name_colon.is_match("1:2"));
        assert!(!p.chem_name_colon.is_match("ethanol:water"));
    }

    #[test]
    fn test_chem_name_equals() {
        let p = patterns();
        assert!(p.chem_name_equals.is_match("CH2=CH2"));
        assert!(p.chem_name_equals.is_match("C(-O)=O"));
        assert!(!p.chem_name_equals.is_match("J=8.8"));
    }

    #[test]
    fn test_initials_and_line_symbols() {
        let p = patterns();
        assert!(p.initial.is_match("A."));
        assert!(p.initial.is_match("J.-P."));
        assert!(!p.initial.is_match("Ab."));
        assert!(p.line_symbol.is_match("---"));
        assert!(p.line_symbol.is_match(".-.-."));
        assert!(p.line_symbol.is_match("·····"));
        assert!(!p.line_symbol.is_match("(--)"));
    }

    #[test]
    fn test_chem_after_initial() {
        let p = patterns();
        assert!(p.chem_after_initial.is_match("coli"));
        assert!(!p.chem_after_initial.is_match("niger"));
        assert!(p.chem_after_initial.is_match("cerevisiae"));
    }

    #[test]
    fn test_proper_noun_hyphen() {
        let p = patterns();
        assert!(p.proper_noun_hyphen.is_match("Diels-Alder"));
        assert!(p.proper_noun_hyphen.is_match("Michaelis\u{2013}Menten"));
        assert!(!p.proper_noun_hyphen.is_match("SDS-PAGE"));
        assert!(!p.proper_noun_hyphen.is_match("Uv-vis"));
    }

    #[test]
    fn test_no_split_prefix() {
        let p = patterns();
        assert!(p.no_split_prefix.is_match("non"));
        assert!(p.no_split_prefix.is_match("Tetra"));
        assert!(p.no_split_prefix.is_match("tetra-n"));
        assert!(p.no_split_prefix.is_match("α-Phenyl"));
        assert!(p.no_split_prefix.is_match("1,2"));
        assert!(p.no_split_prefix.is_match("2,9-di-p-tolyl-1,10"));
        assert!(!p.no_split_prefix.is_match("N2"));
        assert!(!p.no_split_prefix.is_match("BA"));
    }
}
