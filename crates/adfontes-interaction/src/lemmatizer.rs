//! Lemmatizer adapter.
//!
//! Wraps the Snowball stemmer behind a defensive interface: reduction to a
//! root form is best-effort and must never block the main lookup flow, so
//! every failure path falls back to earlier forms of the input (computed
//! root, then normalized form, then the original word unchanged).

use std::panic::{catch_unwind, AssertUnwindSafe};

use rust_stemmers::{Algorithm, Stemmer};

/// Best-effort word-to-root reduction.
pub struct Lemmatizer {
    stemmer: Stemmer,
}

impl Lemmatizer {
    /// Creates an English lemmatizer.
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Reduces `word` to its root form. Never fails outward.
    ///
    /// The first whitespace-separated token is trimmed and lowercased, then
    /// stemmed. An empty computed root falls back to the normalized form;
    /// any panic inside the analysis falls back to the original input.
    pub fn lemmatize(&self, word: &str) -> String {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return word.to_string();
        }

        let normalized = match trimmed.split_whitespace().next() {
            Some(token) => token.to_lowercase(),
            None => return word.to_string(),
        };

        let root = catch_unwind(AssertUnwindSafe(|| {
            self.stemmer.stem(&normalized).to_string()
        }));

        match root {
            Ok(root) if !root.is_empty() => root,
            Ok(_) => normalized,
            Err(_) => {
                tracing::warn!(word, "lemmatization failed, using original input");
                word.to_string()
            }
        }
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduces_inflected_form() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("running"), "run");
    }

    #[test]
    fn test_base_form_passes_through() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("run"), "run");
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("  Running  "), "run");
    }

    #[test]
    fn test_empty_input_unchanged() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize(""), "");
        assert_eq!(lemmatizer.lemmatize("   "), "   ");
    }

    #[test]
    fn test_non_alphabetic_input_never_panics() {
        let lemmatizer = Lemmatizer::new();
        for input in ["1234", "!!!", "héllo", "🦀", "a-b-c"] {
            let lemma = lemmatizer.lemmatize(input);
            assert!(!lemma.is_empty());
        }
    }

    #[test]
    fn test_multi_word_input_takes_first_token() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("running fast"), "run");
    }
}
