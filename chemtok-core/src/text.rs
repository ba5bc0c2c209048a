//! Character classes and string predicates shared by the normalizer and the
//! rule engine
//!
//! The predicates mirror the usual "every character is X" tests: an empty
//! string never satisfies them, and casing tests only look at cased
//! characters.

/// Dash, hyphen and minus look-alikes
pub const HYPHENS: &[char] = &[
    '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '-', '\u{2212}',
];

/// Single and double quote variants, including the straight forms
pub const QUOTES: &[char] = &[
    '\u{201a}', '\u{201b}', '\u{201c}', '\u{201d}', '\u{201e}', '\u{201f}', '"', '\u{2018}',
    '\u{2019}', '`', '\u{00b4}', '\'',
];

/// Apostrophe variants stripped from possessives
pub const APOSTROPHES: &[char] = &['\'', '`', '\u{00b4}', '\u{2019}'];

/// Control characters removed during normalization
pub const CONTROLS: &[char] = &[
    '\u{0001}', '\u{0002}', '\u{0003}', '\u{0004}', '\u{0005}', '\u{0006}', '\u{0007}',
    '\u{0008}',
];

/// Lower-case particles that appear inside personal names ("van", "de", ...)
pub const NAME_SMALL: &[&str] = &[
    "abu", "bon", "bin", "da", "dal", "de", "del", "der", "di", "dí", "ibn", "la", "le", "san",
    "st", "ste", "van", "vel", "von", "y",
];

pub fn is_hyphen(c: char) -> bool {
    HYPHENS.contains(&c)
}

pub fn is_quote(c: char) -> bool {
    QUOTES.contains(&c)
}

/// Net bracket depth of `text`; zero when balanced or bracket-free
pub fn bracket_level(text: &str) -> i32 {
    bracket_level_chars(text.chars())
}

pub(crate) fn bracket_level_chars(chars: impl IntoIterator<Item = char>) -> i32 {
    chars.into_iter().fold(0, |level, c| match c {
        '(' | '[' | '{' => level + 1,
        ')' | ']' | '}' => level - 1,
        _ => level,
    })
}

/// Strip a trailing apostrophe, or apostrophe + `s`, from a word
pub fn unapostrophe(text: &str) -> &str {
    let mut chars = text.char_indices().rev();
    match (chars.next(), chars.next()) {
        (Some((_, 's')), Some((i, c))) if APOSTROPHES.contains(&c) => &text[..i],
        (Some((i, c)), _) if APOSTROPHES.contains(&c) => &text[..i],
        _ => text,
    }
}

/// True when `c` is an ASCII word character (`[A-Za-z0-9_]`)
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// ASCII word boundary test at byte offset `pos`
pub fn is_word_boundary(text: &str, pos: usize) -> bool {
    let before = text[..pos].chars().next_back().is_some_and(is_word_char);
    let after = text[pos..].chars().next().is_some_and(is_word_char);
    before != after
}

pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

pub fn is_digit(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

/// At least one cased character and no lower-case ones
pub fn is_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// At least one cased character and no upper-case ones
pub fn is_lower(text: &str) -> bool {
    text.chars().any(char::is_lowercase) && !text.chars().any(char::is_uppercase)
}

/// Re-case `replacement` to follow the casing of `source`
///
/// All-caps sources give an all-caps replacement, a leading capital is
/// carried over, anything else stays as written.
pub fn match_case(replacement: &str, source: &str) -> String {
    if source.chars().count() > 1 && is_upper(source) {
        return replacement.to_uppercase();
    }
    match (source.chars().next(), replacement.chars().next()) {
        (Some(s), Some(r)) if s.is_uppercase() => {
            r.to_uppercase().chain(replacement.chars().skip(1)).collect()
        }
        _ => replacement.to_string(),
    }
}
