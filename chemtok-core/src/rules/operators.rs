//! Splits on operators and separators inside a token

use super::{collect, split_around, RuleEngine};
use crate::text::{bracket_level, bracket_level_chars, is_hyphen};

const OPERATORS: &[char] = &['<', '>', '/', '×', '÷', '⋯'];

/// Split on the first comparison, slash or multiplication sign that is not
/// part of an inline HTML tag, an arrow or a URL
pub fn operator(engine: &RuleEngine, token: &str, _next: Option<&str>) -> Option<Vec<String>> {
    let chars: Vec<char> = token.chars().collect();
    let tags = engine.tables().inline_html_tags;

    for (i, &c) in chars.iter().enumerate() {
        if !OPERATORS.contains(&c) {
            continue;
        }
        let exempt = match c {
            '<' => starts_with_tag(&collect(&chars[i..]), tags, true),
            '>' => {
                ends_with_tag(&collect(&chars[..=i]), tags)
                    || (i > 2 && chars[i - 1] == '-' && chars[i - 2] != '>')
            }
            '/' => {
                (i > 0 && starts_with_tag(&collect(&chars[i - 1..]), tags, false))
                    || token.starts_with("http")
            }
            _ => false,
        };
        if !exempt {
            return Some(split_around(&chars, i));
        }
    }

    None
}

/// `text` begins with `</tag>`, or with `<tag>` too when `opening` is set
fn starts_with_tag(text: &str, tags: &[&str], opening: bool) -> bool {
    let Some(rest) = text.strip_prefix('<') else {
        return false;
    };
    let rest = match rest.strip_prefix('/') {
        Some(rest) => rest,
        None if opening => rest,
        None => return false,
    };
    tags.iter().any(|tag| {
        rest.strip_prefix(tag)
            .is_some_and(|after| after.starts_with('>'))
    })
}

/// `text` ends with `<tag>` or `</tag>`
fn ends_with_tag(text: &str, tags: &[&str]) -> bool {
    let Some(rest) = text.strip_suffix('>') else {
        return false;
    };
    tags.iter().any(|tag| {
        rest.strip_suffix(tag)
            .and_then(|head| head.strip_suffix('/').or(Some(head)))
            .is_some_and(|head| head.ends_with('<'))
    })
}

/// Split on `+` between components, keeping charges such as `Fe3+`,
/// `(+)-` rotation signs and `+` inside unbalanced brackets
pub fn plus(_engine: &RuleEngine, token: &str, _next: Option<&str>) -> Option<Vec<String>> {
    let chars: Vec<char> = token.chars().collect();
    let n = chars.len();
    let ends_with_hyphen = chars.last().is_some_and(|&c| is_hyphen(c));
    let level = bracket_level(token);

    for (i, &c) in chars.iter().enumerate() {
        if c != '+' {
            continue;
        }

        if i + 2 < n && is_hyphen(chars[i + 1]) {
            // `(+-)` is a racemate label
            if !(i > 0 && chars[i - 1] == '(' && chars[i + 2] == ')') {
                return Some(vec![
                    collect(&chars[..=i]),
                    chars[i + 1].to_string(),
                    collect(&chars[i + 2..]),
                ]);
            }
        }

        if i > 0 && i + 1 < n {
            let after_level = bracket_level_chars(chars[i + 1..].iter().copied());
            if ends_with_hyphen || !(level == after_level && after_level == 0) {
                continue;
            }
        }
        if i + 1 == n {
            continue;
        }
        return Some(split_around(&chars, i));
    }

    None
}

/// Split at the first `:` unless it is a ring-fusion or locant colon or
/// part of a URL
pub fn colon(engine: &RuleEngine, token: &str, _next: Option<&str>) -> Option<Vec<String>> {
    if token.starts_with("http") || engine.patterns().chem_name_colon.is_match(token) {
        return None;
    }
    partition(token, ':')
}

/// Split at the first `=` unless the token is a bond formula
pub fn equals(engine: &RuleEngine, token: &str, _next: Option<&str>) -> Option<Vec<String>> {
    if engine.patterns().chem_name_equals.is_match(token) {
        return None;
    }
    partition(token, '=')
}

fn partition(token: &str, sep: char) -> Option<Vec<String>> {
    let (before, after) = token.split_once(sep)?;
    Some(vec![before.to_string(), sep.to_string(), after.to_string()])
}
