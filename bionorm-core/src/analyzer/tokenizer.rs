//! Word Tokenizer Module
//!
//! Second stage of the bio pipeline: takes cleaned text and turns it into a
//! [`TokenSequence`] of lemmatized, stopword-free words.
//!
//! ## What It Does
//!
//! 1. Lower-cases and (optionally) strips diacritics
//! 2. Extracts words: maximal runs of letters (Unicode word characters that
//!    are not digits). Words starting with `_` and words outside
//!    `min_len..=max_len` characters are discarded
//! 3. Keeps words of at least `min_kept_len` characters that are not stopwords
//! 4. Lemmatizes each kept word with a fixed part-of-speech hint
//!
//! Order follows the input; duplicates are kept.
//!
//! ## Usage
//!
//! ```rust
//! use bionorm_core::analyzer::tokenizer::Tokenizer;
//! use bionorm_core::lexicon::{StopwordSet, VerbLemmatizer};
//!
//! let tokenizer = Tokenizer::default();
//! let tokens = tokenizer.tokenize(
//!     "running dogs are nice",
//!     &StopwordSet::english(),
//!     &VerbLemmatizer::new(),
//! );
//! assert_eq!(tokens.as_slice(), ["run", "dog", "nice"]);
//! ```

use bionorm_types::{Lemmatizer, PartOfSpeech, StopwordFilter};
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use super::compile;
use super::normalizer::fold_diacritics;

/// Kept tokens in input order. Bios are short, so eight fit inline.
pub type TokenSequence = SmallVec<[String; 8]>;

static WORD: Lazy<Regex> = Lazy::new(|| compile(r"[^\W\d]+"));

/// Tokenizer settings. Lengths are counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Strip diacritics during word extraction.
    pub deaccent: bool,
    /// Shortest word extracted.
    pub min_len: usize,
    /// Longest word extracted.
    pub max_len: usize,
    /// Shortest word kept after extraction.
    pub min_kept_len: usize,
    /// Part-of-speech hint handed to the lemmatizer.
    pub pos: PartOfSpeech,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            deaccent: true,
            min_len: 2,
            max_len: 15,
            min_kept_len: 3,
            pos: PartOfSpeech::Verb,
        }
    }
}

/// Word extractor and token filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Creates a tokenizer with the given settings.
    #[inline]
    pub const fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active settings.
    #[inline]
    pub const fn config(&self) -> TokenizerConfig {
        self.config
    }

    /// Extracts candidate words and emits each one in input order.
    pub fn words<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        let lowered = text.to_lowercase();
        let prepared = if self.config.deaccent {
            fold_diacritics(&lowered)
        } else {
            lowered
        };

        for m in WORD.find_iter(&prepared) {
            let word = m.as_str();
            if word.starts_with('_') {
                continue;
            }
            let len = word.chars().count();
            if len < self.config.min_len || len > self.config.max_len {
                continue;
            }
            emit(word);
        }
    }

    /// Extracts, filters and lemmatizes words.
    pub fn tokenize<S, L>(&self, text: &str, stopwords: &S, lemmatizer: &L) -> TokenSequence
    where
        S: StopwordFilter + ?Sized,
        L: Lemmatizer + ?Sized,
    {
        let mut tokens = TokenSequence::new();
        self.words(text, |word| {
            if word.chars().count() >= self.config.min_kept_len && !stopwords.is_stopword(word) {
                tokens.push(lemmatizer.lemmatize(word, self.config.pos));
            }
        });
        log::trace!("tokenized {:?} into {} tokens", text, tokens.len());
        tokens
    }
}
