//! Punctuation at token edges, trailing conjunction hyphens and full stops

use super::{split_at, RuleEngine};
use crate::text::{is_alpha, is_digit, is_lower, is_quote, unapostrophe};

/// Symbols split off the start of a token, besides quotes
const LEADING: &[char] = &[
    '≡', '≠', '≣', '≢', '≥', '≤', '≧', '≦', '≩', '≨', '≫', '≪', '=', '>',
];

/// Symbols split off the end of a token, besides quotes
const TRAILING: &[char] = &[',', ';', ':', '!', '?', '=', '™', '÷', '®', '×', '…'];

/// Words after which `mono-` style prefixes lose their hyphen
const CONJUNCTIONS: &[&str] = &["and", "or", "/", ","];

/// Stripped from the end of a token before judging its full stop
const STOP_TRIM: &[char] = &['\'', '"', '-', '=', '<', '>', '/', ',', '.', ':', ';', '!', '?'];

/// Stripped from the end of the following token
const NEXT_TRIM: &[char] = &[
    '\'', '"', '-', '=', '<', '>', '/', ',', '.', ':', ';', '!', '?', ')', ']', '}',
];

/// Abbreviations that keep their full stop before a number
const NUMBERED: &[&str] = &["no.", "p.", "pp."];

pub fn edge_punctuation(
    _engine: &RuleEngine,
    token: &str,
    _next: Option<&str>,
) -> Option<Vec<String>> {
    let chars: Vec<char> = token.chars().collect();
    let (first, last) = (*chars.first()?, *chars.last()?);

    if is_quote(first) || LEADING.contains(&first) {
        return Some(split_at(&chars, 1));
    }
    if is_quote(last) || TRAILING.contains(&last) {
        return Some(split_at(&chars, chars.len() - 1));
    }
    None
}

/// `mono- and di-substituted`: detach the hyphen from `mono-`
pub fn trailing_hyphen_conjunction(
    _engine: &RuleEngine,
    token: &str,
    next: Option<&str>,
) -> Option<Vec<String>> {
    let stem = token.strip_suffix('-')?;
    if !next.is_some_and(|next| CONJUNCTIONS.contains(&next)) || !is_alpha(stem) {
        return None;
    }

    let mut chars = stem.chars();
    let capitalized = chars.next().is_some_and(char::is_uppercase)
        && token.chars().count() > 3
        && is_lower(chars.as_str());
    if is_lower(stem) || capitalized {
        return Some(vec![stem.to_string(), "-".to_string()]);
    }
    None
}

/// Detach a full stop unless it belongs to an abbreviation, initial or
/// citation
pub fn terminal_period(
    engine: &RuleEngine,
    token: &str,
    next: Option<&str>,
) -> Option<Vec<String>> {
    let stem = token.strip_suffix('.')?;
    let detach = Some(vec![stem.to_string(), ".".to_string()]);
    let Some(next) = next else {
        return detach;
    };

    let before = token.trim_end_matches(STOP_TRIM);
    let after = unapostrophe(next.trim_end_matches(NEXT_TRIM));
    let patterns = engine.patterns();
    let tables = engine.tables();

    let keep = is_dotted(before)
        || tables.is_collocation(before, after)
        || (NUMBERED.contains(&token.to_lowercase().as_str()) && is_digit(after))
        || (is_single_capital(before) && patterns.chem_after_initial.is_match(after))
        || (patterns.initial.is_match(token)
            && (patterns.initial.is_match(next)
                || tables.is_name_particle(after)
                || tables.last_names.contains(after)));

    if keep {
        None
    } else {
        detach
    }
}

/// Starts like `e.g` or `i.e`
fn is_dotted(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some('.'), Some(b)) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic()
    )
}

fn is_single_capital(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::RuleTables;

    fn engine() -> RuleEngine {
        RuleEngine::new(RuleTables::new()).unwrap()
    }

    #[test]
    fn test_edge_punctuation() {
        let engine = engine();
        assert_eq!(
            edge_punctuation(&engine, "\"word", None).unwrap(),
            vec!["\"", "word"]
        );
        assert_eq!(
            edge_punctuation(&engine, "word,", None).unwrap(),
            vec!["word", ","]
        );
        assert_eq!(edge_punctuation(&engine, "≥5", None).unwrap(), vec!["≥", "5"]);
        assert_eq!(
            edge_punctuation(&engine, "Teflon®", None).unwrap(),
            vec!["Teflon", "®"]
        );
        assert_eq!(edge_punctuation(&engine, "word", None), None);
    }

    #[test]
    fn test_trailing_hyphen_conjunction() {
        let engine = engine();
        assert_eq!(
            trailing_hyphen_conjunction(&engine, "mono-", Some("and")).unwrap(),
            vec!["mono", "-"]
        );
        assert_eq!(
            trailing_hyphen_conjunction(&engine, "Mono-", Some("or")).unwrap(),
            vec!["Mono", "-"]
        );
        assert_eq!(trailing_hyphen_conjunction(&engine, "mono-", Some("x")), None);
        assert_eq!(trailing_hyphen_conjunction(&engine, "mono-", None), None);
        assert_eq!(trailing_hyphen_conjunction(&engine, "A-", Some("and")), None);
        assert_eq!(trailing_hyphen_conjunction(&engine, "NMR-", Some("and")), None);
        assert_eq!(trailing_hyphen_conjunction(&engine, "di2-", Some("and")), None);
    }

    #[test]
    fn test_period_at_end_of_text() {
        let engine = engine();
        assert_eq!(
            terminal_period(&engine, "end.", None).unwrap(),
            vec!["end", "."]
        );
    }

    #[test]
    fn test_period_before_sentence() {
        let engine = engine();
        assert_eq!(
            terminal_period(&engine, "water.", Some("The")).unwrap(),
            vec!["water", "."]
        );
    }

    #[test]
    fn test_period_kept_in_dotted_abbreviation() {
        let engine = engine();
        assert_eq!(terminal_period(&engine, "e.g.", Some("the")), None);
        assert_eq!(terminal_period(&engine, "i.e.", Some("water")), None);
    }

    #[test]
    fn test_period_kept_in_collocation() {
        let engine = engine();
        assert_eq!(terminal_period(&engine, "J.", Some("Chem.")), None);
        assert_eq!(terminal_period(&engine, "E.", Some("coli")), None);
    }

    #[test]
    fn test_period_kept_before_page_number() {
        let engine = engine();
        assert_eq!(terminal_period(&engine, "pp.", Some("12")), None);
        assert_eq!(terminal_period(&engine, "No.", Some("3,")), None);
        assert_eq!(
            terminal_period(&engine, "pp.", Some("The")).unwrap(),
            vec!["pp", "."]
        );
    }

    #[test]
    fn test_period_kept_after_genus_initial() {
        let engine = engine();
        assert_eq!(terminal_period(&engine, "S.", Some("cerevisiae")), None);
    }

    #[test]
    fn test_period_kept_in_personal_initials() {
        let engine = engine();
        assert_eq!(terminal_period(&engine, "J.", Some("Smith")), None);
        assert_eq!(terminal_period(&engine, "J.", Some("R.")), None);
        assert_eq!(terminal_period(&engine, "L.", Some("van")), None);
        assert_eq!(terminal_period(&engine, "J.-P.", Some("Smith's")), None);
        assert_eq!(
            terminal_period(&engine, "J.", Some("Something")).unwrap(),
            vec!["J", "."]
        );
    }

    #[test]
    fn test_helpers() {
        assert!(is_dotted("e.g"));
        assert!(!is_dotted("e."));
        assert!(!is_dotted("1.5"));
        assert!(is_single_capital("A"));
        assert!(!is_single_capital("Ab"));
        assert!(!is_single_capital("a"));
    }
}
