//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Rules**: Removes links, mentions, hashtags and AV markers
//! - **Normalizer**: Strips emoji, punctuation and digits; lower-cases
//! - **Tokenizer**: Extracts, filters and lemmatizes words

use regex::Regex;

pub mod normalizer;
pub mod rules;
pub mod tokenizer;

pub use normalizer::{NormalizerConfig, TextNormalizer};
pub use tokenizer::{TokenSequence, Tokenizer, TokenizerConfig};

/// Compiles one of the built-in patterns.
///
/// The patterns are constants, so a failure here is a programming error
/// caught by the `patterns_compile` tests rather than a runtime condition.
pub(crate) fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("built-in pattern {pattern:?} is invalid: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_accepts_valid_pattern() {
        assert!(compile("[a-z]+").is_match("abc"));
    }

    #[test]
    #[should_panic(expected = "built-in pattern")]
    fn compile_panics_on_invalid_pattern() {
        compile("(unclosed");
    }
}
