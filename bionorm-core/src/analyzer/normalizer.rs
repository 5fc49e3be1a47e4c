use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::compile;
use super::rules::delete_literal;

/// Characters replaced by a space. `#` is not one of them.
pub const PUNCTUATION: &str = "!\"$%&'()*+,-./:;<=>?[\\]^_`{|}~•@";

/// Literal trailer left by some export tools: memo emoji, space, ellipsis.
pub const MEMO_MARKER: &str = "\u{1F4DD} \u{2026}";

static EMOJI: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        "[",
        "\u{1F600}-\u{1F64F}", // emoticons
        "\u{1F300}-\u{1F5FF}", // symbols & pictographs
        "\u{1F680}-\u{1F6FF}", // transport & map symbols
        "\u{1F1E0}-\u{1F1FF}", // regional indicators (flags)
        "]+"
    ))
});
static PUNCT_RUN: Lazy<Regex> =
    Lazy::new(|| compile(&format!("[{}]+", regex::escape(PUNCTUATION))));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| compile(r"\s+"));
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| compile("[0-9]+"));

/// Deletes runs of emoji from the four supported blocks.
pub fn strip_emoji(text: &str) -> String {
    EMOJI.replace_all(text, "").into_owned()
}

/// Unicode-aware lower-casing of the whole string.
#[inline]
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Replaces each run of [`PUNCTUATION`] characters with one space.
pub fn strip_punctuation(text: &str) -> String {
    PUNCT_RUN.replace_all(text, " ").into_owned()
}

/// Replaces each whitespace run with one space. Edges are kept.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Deletes ASCII digit runs without inserting a separator, so `"ab12cd"`
/// becomes `"abcd"`.
pub fn strip_digits(text: &str) -> String {
    DIGIT_RUN.replace_all(text, "").into_owned()
}

/// Deletes every [`MEMO_MARKER`] occurrence.
pub fn strip_memo_marker(text: &str) -> String {
    delete_literal(text, MEMO_MARKER)
}

/// Configuration options for character-class normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Delete emoji runs before lower-casing.
    pub strip_emoji: bool,
    /// Delete the literal [`MEMO_MARKER`] after digit removal.
    pub strip_memo_marker: bool,
    /// Re-collapse whitespace and trim the edges as the last step.
    ///
    /// Digit deletion can leave `"a  b"` or a trailing space behind; this
    /// step removes them.
    pub trim: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self::tokenizing()
    }
}

impl NormalizerConfig {
    /// Chain used ahead of tokenization: emoji are stripped.
    pub const fn tokenizing() -> Self {
        Self {
            strip_emoji: true,
            strip_memo_marker: false,
            trim: true,
        }
    }

    /// Chain used by basic cleaning: emoji are kept, except the memo trailer.
    pub const fn basic() -> Self {
        Self {
            strip_emoji: false,
            strip_memo_marker: true,
            trim: true,
        }
    }
}

/// Character-class normalizer.
///
/// Runs, in this fixed order:
/// 1. emoji strip (if enabled)
/// 2. lower-casing
/// 3. punctuation runs → one space
/// 4. whitespace runs → one space
/// 5. digit runs deleted
/// 6. memo marker deleted (if enabled)
/// 7. whitespace re-collapsed and edges trimmed (if enabled)
///
/// # Examples
///
/// ```
/// use bionorm_core::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
///
/// let normalizer = TextNormalizer::new(NormalizerConfig::basic());
/// assert_eq!(normalizer.normalize("Hello World!!  123"), "hello world");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        let mut text: Cow<'_, str> = Cow::Borrowed(input);

        if self.config.strip_emoji {
            text = Cow::Owned(strip_emoji(&text));
        }
        text = Cow::Owned(lowercase(&text));
        text = Cow::Owned(strip_punctuation(&text));
        text = Cow::Owned(collapse_whitespace(&text));
        text = Cow::Owned(strip_digits(&text));
        if self.config.strip_memo_marker {
            text = Cow::Owned(strip_memo_marker(&text));
        }

        out.clear();
        if self.config.trim {
            out.push_str(collapse_whitespace(&text).trim_matches(' '));
        } else {
            out.push_str(&text);
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Strips diacritics: decomposes to NFD and drops every combining mark.
///
/// Letters without a decomposition (`ß`, `ø`, `ł`, `æ`) and other scripts
/// pass through unchanged. The result stays decomposed.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
