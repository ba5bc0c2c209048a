//! Hyphen splitting
//!
//! Candidate hyphens are tried from the right, always leaving at least one
//! character before and two after. Chemical names (`2-methyl`,
//! `tetra-n-butyl`, `N-oxide`) must stay whole while ordinary compounds
//! (`ligand-based`, `Diels-Alder`) are split.

use super::{collect, RuleEngine};
use crate::text::{bracket_level, bracket_level_chars, is_alpha, is_hyphen};

/// Short connecting words in `one-to-one` style compounds
const CONNECTORS: &[&str] = &["to", "in", "by", "of"];
const LONG_CONNECTORS: &[&str] = &["and", "per"];

pub fn hyphen_split(engine: &RuleEngine, token: &str, _next: Option<&str>) -> Option<Vec<String>> {
    let chars: Vec<char> = token.chars().collect();
    let n = chars.len();
    if n < 4 {
        return None;
    }
    let token_level = bracket_level(token);
    let patterns = engine.patterns();
    let tables = engine.tables();

    for p in (1..n - 2).rev() {
        let c = chars[p];
        if !is_hyphen(c) {
            continue;
        }
        let before = &chars[..p];
        let after = &chars[p + 1..];

        // Hyphens inside brackets
        if token_level == 0 && bracket_level_chars(after.iter().copied()) != 0 {
            continue;
        }

        let b = before.len();
        if is_hyphen(before[b - 1]) {
            return Some(vec![
                collect(&before[..b - 1]),
                format!("{}{}", before[b - 1], c),
                collect(after),
            ]);
        }
        if let Some(pieces) = connector_split(before, c, after, CONNECTORS) {
            return Some(pieces);
        }
        if let Some(pieces) = connector_split(before, c, after, LONG_CONNECTORS) {
            return Some(pieces);
        }

        let before = collect(before);
        let after = collect(after);
        let mut after_chars = after.chars();
        let deuterated = after_chars.next() == Some('d')
            && after_chars.next().is_some_and(|c| c.is_numeric());
        if patterns.no_split_prefix.is_match(&before)
            || tables.is_hyphen_exception(token)
            || deuterated
        {
            continue;
        }

        let split = tables.is_split_suffix(&after)
            || tables.is_split_word(&before)
            || tables.is_hyphen_exception(&format!("{before} {after}"))
            || patterns.proper_noun_hyphen.is_match(token)
            || (is_alpha(&after) && (after.ends_with("ing") || after.ends_with("ed")));
        if split {
            return Some(vec![before, c.to_string(), after]);
        }
    }

    None
}

/// `one-to-one`, `mass-per-volume`: split out the connector and both hyphens
fn connector_split(
    before: &[char],
    c: char,
    after: &[char],
    connectors: &[&str],
) -> Option<Vec<String>> {
    let width = connectors.first()?.chars().count();
    let b = before.len();
    if b <= width || !is_hyphen(before[b - width - 1]) {
        return None;
    }
    let word = collect(&before[b - width..]);
    if !connectors.contains(&word.as_str()) {
        return None;
    }
    Some(vec![
        collect(&before[..b - width - 1]),
        before[b - width - 1].to_string(),
        word,
        c.to_string(),
        collect(after),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::RuleTables;

    fn split(token: &str) -> Option<Vec<String>> {
        let engine = RuleEngine::new(RuleTables::new()).unwrap();
        hyphen_split(&engine, token, None)
    }

    #[test]
    fn test_split_suffix() {
        assert_eq!(
            split("ligand-based").unwrap(),
            vec!["ligand", "-", "based"]
        );
        assert_eq!(
            split("PEG-modified").unwrap(),
            vec!["PEG", "-", "modified"]
        );
        assert_eq!(
            split("metal-free").unwrap(),
            vec!["metal", "-", "free"]
        );
    }

    #[test]
    fn test_split_prefix() {
        assert_eq!(split("self-CO2").unwrap(), vec!["self", "-", "CO2"]);
    }

    #[test]
    fn test_chemical_names_kept() {
        assert_eq!(split("2-methylpropane"), None);
        assert_eq!(split("tetra-n-butyl"), None);
        assert_eq!(split("N-oxide"), None);
        assert_eq!(split("bromo-phenyl"), None);
        assert_eq!(split("1,2-diol"), None);
    }

    #[test]
    fn test_deuterated_kept() {
        assert_eq!(split("DMSO-d6"), None);
        assert_eq!(split("CDCl3-d1"), None);
    }

    #[test]
    fn test_double_dash() {
        assert_eq!(split("word--other").unwrap(), vec!["word", "--", "other"]);
    }

    #[test]
    fn test_connectors() {
        assert_eq!(
            split("one-to-one").unwrap(),
            vec!["one", "-", "to", "-", "one"]
        );
        assert_eq!(
            split("mass-per-volume").unwrap(),
            vec!["mass", "-", "per", "-", "volume"]
        );
        assert_eq!(
            split("acid-and-base").unwrap(),
            vec!["acid", "-", "and", "-", "base"]
        );
    }

    #[test]
    fn test_proper_nouns_and_participles() {
        assert_eq!(split("Diels-Alder").unwrap(), vec!["Diels", "-", "Alder"]);
        assert_eq!(
            split("ethanol-washed").unwrap(),
            vec!["ethanol", "-", "washed"]
        );
        assert_eq!(
            split("sample-stirring").unwrap(),
            vec!["sample", "-", "stirring"]
        );
        assert_eq!(
            split("rhodium-bridged").unwrap(),
            vec!["rhodium", "-", "bridged"]
        );
    }

    #[test]
    fn test_hyphen_exceptions() {
        assert_eq!(split("well-known"), None);
        assert_eq!(split("Well-Known"), None);
        assert_eq!(split("water-bath").unwrap(), vec!["water", "-", "bath"]);
    }

    #[test]
    fn test_bracketed_hyphen_kept() {
        assert_eq!(split("(ligand-based)"), None);
        assert_eq!(split("(2-based"), None);
    }

    #[test]
    fn test_short_tokens() {
        assert_eq!(split("a-b"), None);
        assert_eq!(split("a-bc"), None);
        assert_eq!(split("x-ray"), None);
    }
}
