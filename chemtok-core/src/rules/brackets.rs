//! Bracket rules: ranges, edge brackets and parenthesized suffixes

use super::{collect, split_at, split_suffix, RuleEngine};
use crate::text::{is_digit, is_lower, is_upper};

/// Bracket pairs in the order they are tried
const BRACKET_PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// Tokens after which an enclosing `[...]` is a concentration and is peeled
const CONCENTRATION_FOLLOWING: &[&str] = &["=", "/", "≈", "≥", "≤", ">", "<"];

/// Trademark marks and ellipsis, tried in order
const MARK_SUFFIXES: &[&str] = &["(TM)", "(R)", "((TM))", "((R))", "..."];

/// Physical state annotations
const STATE_SUFFIXES: &[&str] = &["(aq)", "(aq.)", "(s)", "(l)", "(g)"];

/// Plot marker legends
const LINE_SYMBOL_SUFFIXES: &[&str] = &[
    "(■)", "(●)", "(▲)", "(○)", "(◆)", "(▼)", "(△)", "(◇)", "(▽)", "(⬚)", "(×)", "(□)", "(•)",
];

/// `(a)-(b)` becomes `( a ) - ( b )`
pub fn bracket_range(engine: &RuleEngine, token: &str, _next: Option<&str>) -> Option<Vec<String>> {
    let caps = engine.patterns().bracket_range.captures(token)?;
    Some(vec![
        "(".to_string(),
        caps[1].to_string(),
        ")".to_string(),
        "-".to_string(),
        "(".to_string(),
        caps[2].to_string(),
        ")".to_string(),
    ])
}

/// Peel an opening bracket off the start or a closing bracket off the end
///
/// Unbalanced edge brackets always come off. A bracket that encloses the
/// whole token comes off unless it is a square bracket around mixed-case
/// content, which is usually a complex or a concentration such as
/// `[Cu(NH3)4]`. Element oxidation states like `Fe(III)` keep their closer.
pub fn bracket_peel(engine: &RuleEngine, token: &str, next: Option<&str>) -> Option<Vec<String>> {
    let chars: Vec<char> = token.chars().collect();
    let n = chars.len();
    let (first, last) = (*chars.first()?, *chars.last()?);

    for (open, close) in BRACKET_PAIRS {
        if first == open {
            let ci = closing_offset(chars[1..].iter().copied(), open, close);
            if ci == 0 || (ci == n - 1 && peels_enclosing(&chars, next)) {
                return Some(split_at(&chars, 1));
            }
        }

        if last == close && !engine.patterns().oxidation_state.is_match(token) {
            let ci = closing_offset(chars[..n - 1].iter().rev().copied(), close, open);
            if ci == 0 || (ci == n - 1 && peels_enclosing(&chars, next)) {
                return Some(split_at(&chars, n - 1));
            }
        }
    }

    None
}

/// Offset, counted from the edge bracket, of the character that balances
/// it; zero when it is never balanced
fn closing_offset(scan: impl Iterator<Item = char>, same: char, other: char) -> usize {
    let mut depth = 1;
    for (i, c) in scan.enumerate() {
        if c == same {
            depth += 1;
        }
        if c == other {
            depth -= 1;
        }
        if depth == 0 {
            return i + 1;
        }
    }
    0
}

fn peels_enclosing(chars: &[char], next: Option<&str>) -> bool {
    let n = chars.len();
    if chars[n - 1] != ']' || n < 4 {
        return true;
    }
    if next.is_some_and(|next| CONCENTRATION_FOLLOWING.contains(&next)) {
        return true;
    }
    let inner = collect(&chars[1..n - 1]);
    is_upper(&inner) || is_lower(&inner)
}

/// `Teflon(R)`, `word...`
pub fn mark_suffix(_engine: &RuleEngine, token: &str, _next: Option<&str>) -> Option<Vec<String>> {
    MARK_SUFFIXES
        .iter()
        .find_map(|suffix| split_suffix(token, suffix))
}

/// `NaCl(aq)`, but not `1(s)` where the bracket is a label
pub fn state_suffix(_engine: &RuleEngine, token: &str, _next: Option<&str>) -> Option<Vec<String>> {
    STATE_SUFFIXES.iter().find_map(|suffix| {
        split_suffix(token, suffix).filter(|pieces| !is_digit(&pieces[0]))
    })
}

pub fn line_symbol_suffix(
    _engine: &RuleEngine,
    token: &str,
    _next: Option<&str>,
) -> Option<Vec<String>> {
    LINE_SYMBOL_SUFFIXES
        .iter()
        .find_map(|suffix| split_suffix(token, suffix))
}
