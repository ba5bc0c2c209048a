//! Regex helpers with match-site predicates
//!
//! Rule patterns need ASCII word boundaries and a few negative look-aheads
//! that the `regex` crate does not offer. Those conditions are checked on
//! each candidate match instead; a rejected candidate is retried one
//! character further on, so every start position is still considered.

use regex::{Captures, Regex};

use crate::text::is_word_boundary;

/// Replace every accepted match of `re` in `text`
///
/// `replacement` uses the usual `$n` / `${n}` expansion syntax.
pub(crate) fn replace_all_where<F>(re: &Regex, text: &str, replacement: &str, accept: F) -> String
where
    F: Fn(&str, &Captures<'_>) -> bool,
{
    replace_matches(re, text, replacement, accept, false)
}

/// Like [`replace_all_where`], but the last capture group is trailing
/// context: it has to match, yet stays in place where the next match may
/// use it as leading context. `replacement` must not expand that group.
pub(crate) fn replace_all_before_tail<F>(
    re: &Regex,
    text: &str,
    replacement: &str,
    accept: F,
) -> String
where
    F: Fn(&str, &Captures<'_>) -> bool,
{
    replace_matches(re, text, replacement, accept, true)
}

fn replace_matches<F>(re: &Regex, text: &str, replacement: &str, accept: F, keep_tail: bool) -> String
where
    F: Fn(&str, &Captures<'_>) -> bool,
{
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if !accept(text, &caps) {
            pos = step_past(text, whole.start());
            continue;
        }

        let end = if keep_tail {
            caps.get(caps.len() - 1).map_or(whole.end(), |tail| tail.start())
        } else {
            whole.end()
        };

        out.push_str(&text[last..whole.start()]);
        caps.expand(replacement, &mut out);
        last = end;
        pos = if end == whole.start() {
            step_past(text, end)
        } else {
            end
        };
    }

    out.push_str(&text[last..]);
    out
}

/// Accept matches that begin on an ASCII word boundary
pub(crate) fn starts_on_boundary(text: &str, caps: &Captures<'_>) -> bool {
    caps.get(0)
        .is_some_and(|m| is_word_boundary(text, m.start()))
}

/// Byte offset of the character after the one starting at `pos`
pub(crate) fn step_past(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Alternation of literal strings, longest first so that no entry is shadowed
/// by one of its own prefixes
pub(crate) fn literal_alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut words: Vec<&str> = words.into_iter().collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.dedup();
    words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}
