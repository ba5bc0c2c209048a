//! Tokenizer driver
//!
//! Splits text on whitespace, fuses inline HTML spans back into single
//! tokens, then feeds every token through the rule cascade until no rule
//! fires. Pieces produced by a rule are re-examined before anything to
//! their right.

use std::borrow::Cow;

use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::rules::RuleEngine;
use crate::segment::segment;
use crate::tables::RuleTables;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Chemistry-aware word tokenizer and sentence splitter
#[derive(Debug, Clone)]
pub struct ChemTokenizer {
    engine: RuleEngine,
    normalizer: Normalizer,
    normalize_input: bool,
}

impl ChemTokenizer {
    /// Tokenizer with the bundled tables, normalizing its input
    pub fn new() -> Result<Self> {
        Self::from_config(&TokenizerConfig::default())
    }

    /// Tokenizer built from `config`
    ///
    /// Fails if a configured word list cannot be read.
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;
        let engine = RuleEngine::new(RuleTables::from_config(config)?)?;
        let normalizer = Normalizer::from_config(&config.normalization)?;
        tracing::debug!(
            normalize = config.normalization.enabled,
            collapse_whitespace = config.normalization.collapse_whitespace,
            "created tokenizer"
        );
        Ok(Self {
            engine,
            normalizer,
            normalize_input: config.normalization.enabled,
        })
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Whether `tokenize` normalizes its input first
    pub fn normalizes_input(&self) -> bool {
        self.normalize_input
    }

    /// Normalize `text` with this tokenizer's settings
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Tokenize `text` into sentences
    pub fn tokenize(&self, text: &str) -> Vec<Vec<String>> {
        segment(self.tokenize_words(text))
    }

    /// Tokenize `text` into a flat token sequence
    pub fn tokenize_words(&self, text: &str) -> Vec<String> {
        let text = if self.normalize_input {
            Cow::Owned(self.normalizer.normalize(text))
        } else {
            Cow::Borrowed(text)
        };

        let words: Vec<String> = text.split_whitespace().map(String::from).collect();
        let words = fuse_html_spans(words, self.engine.tables().inline_html_tags);
        self.split_tokens(words, iteration_cap(&text))
    }

    /// Tokenize several texts, in parallel when the `parallel` feature is on
    #[cfg(feature = "parallel")]
    pub fn tokenize_batch<S>(&self, texts: &[S]) -> Vec<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }

    /// Tokenize several texts, in parallel when the `parallel` feature is on
    #[cfg(not(feature = "parallel"))]
    pub fn tokenize_batch<S>(&self, texts: &[S]) -> Vec<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }

    /// Run the cascade over `words` until every token is final
    fn split_tokens(&self, words: Vec<String>, cap: usize) -> Vec<String> {
        let mut pending: Vec<String> = words.into_iter().rev().collect();
        let mut tokens = Vec::with_capacity(pending.len() * 2);
        let mut steps = 0;

        while let Some(token) = pending.pop() {
            if steps == cap {
                tracing::warn!(
                    cap,
                    remaining = pending.len() + 1,
                    "token splitting did not settle, keeping remaining tokens as they are"
                );
                tokens.push(token);
                tokens.extend(pending.drain(..).rev());
                break;
            }
            steps += 1;

            let next = pending.last().map(String::as_str);
            match self.engine.subtokenize(&token, next) {
                Some(pieces) => pending.extend(pieces.into_iter().rev()),
                None => tokens.push(token),
            }
        }

        tokens.retain(|token| !token.is_empty());
        tokens
    }
}

/// Upper bound on cascade steps for `text`
fn iteration_cap(text: &str) -> usize {
    4 * text.chars().count() + 16
}

/// Join whitespace-separated pieces of `<tag>...</tag>` spans
///
/// Tags are handled in table order; for each closing tag the nearest
/// opening tag at or before it closes the span.
fn fuse_html_spans(mut words: Vec<String>, tags: &[&str]) -> Vec<String> {
    for tag in tags {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");

        let mut i = words.len();
        while i > 0 {
            i -= 1;
            if !words[i].contains(&close) {
                continue;
            }
            if let Some(j) = (0..=i).rev().find(|&j| words[j].contains(&open)) {
                if j < i {
                    let fused = words[j..=i].join(" ");
                    words.splice(j..=i, std::iter::once(fused));
                }
                i = j;
            }
        }
    }
    words
}
