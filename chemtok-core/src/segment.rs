//! Sentence segmentation over a token sequence

/// Tokens that end a sentence
const TERMINATORS: &[&str] = &[".", "?", "!"];

/// Closing quotes and brackets that stay with the sentence they close
const CLOSERS: &[&str] = &["\"", "'", ")", "]", "}"];

/// Group tokens into sentences
///
/// A sentence ends after each `.`, `?` or `!` token, or after the closing
/// quote or bracket that immediately follows one. Empty sentences are
/// never produced.
pub fn segment(tokens: Vec<String>) -> Vec<Vec<String>> {
    let mut stops = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if TERMINATORS.contains(&token.as_str()) {
            let closed = tokens
                .get(i + 1)
                .is_some_and(|next| CLOSERS.contains(&next.as_str()));
            stops.push(if closed { i + 2 } else { i + 1 });
        }
    }

    let mut sentences = Vec::with_capacity(stops.len() + 1);
    let mut rest = tokens.into_iter();
    let mut start = 0;
    for stop in stops.into_iter().chain(std::iter::once(usize::MAX)) {
        if stop <= start {
            continue;
        }
        let sentence: Vec<String> = rest.by_ref().take(stop - start).collect();
        if sentence.is_empty() {
            break;
        }
        start = stop;
        sentences.push(sentence);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    fn sentences(text: &str) -> Vec<Vec<String>> {
        segment(tokens(text))
    }

    #[test]
    fn test_two_sentences() {
        assert_eq!(
            sentences("Hello there . Second Sentence ."),
            vec![tokens("Hello there ."), tokens("Second Sentence .")]
        );
    }

    #[test]
    fn test_trailing_tokens_without_terminator() {
        assert_eq!(
            sentences("One . two three"),
            vec![tokens("One ."), tokens("two three")]
        );
    }

    #[test]
    fn test_closer_stays_with_sentence() {
        assert_eq!(
            sentences("( see above . ) Next"),
            vec![tokens("( see above . )"), tokens("Next")]
        );
        assert_eq!(
            sentences("He said \" stop ! \" and left"),
            vec![tokens("He said \" stop ! \""), tokens("and left")]
        );
    }

    #[test]
    fn test_consecutive_terminators() {
        assert_eq!(
            sentences("What ? ! Yes"),
            vec![tokens("What ?"), tokens("!"), tokens("Yes")]
        );
    }

    #[test]
    fn test_terminator_followed_by_closer_then_terminator() {
        assert_eq!(
            sentences("a . ) . b"),
            vec![tokens("a . )"), tokens("."), tokens("b")]
        );
    }

    #[test]
    fn test_empty() {
        assert!(segment(Vec::new()).is_empty());
    }

    #[test]
    fn test_only_terminator() {
        assert_eq!(sentences("."), vec![tokens(".")]);
    }
}
