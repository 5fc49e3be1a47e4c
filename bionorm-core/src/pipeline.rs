//! Bio cleaning orchestrators.
//!
//! Two entry points share the noise-removal rules:
//!
//! - [`BioNormalizer::preprocess_bio`]: rules, emoji strip, character-class
//!   normalization, then tokenization; returns space-joined tokens
//! - [`BioNormalizer::basic_clean`]: rules and character-class normalization
//!   only; emoji survive except the memo trailer
//!
//! The free functions use a process-wide normalizer built from the English
//! stopword list and [`VerbLemmatizer`].

use std::path::PathBuf;

use bionorm_types::{Lemmatizer, PipelineError, StopwordFilter};
use once_cell::sync::Lazy;

use crate::analyzer::rules::{remove_av, remove_hashtags, remove_links, remove_users};
use crate::analyzer::{
    NormalizerConfig, TextNormalizer, TokenSequence, Tokenizer, TokenizerConfig,
};
use crate::lexicon::{StopwordSet, VerbLemmatizer};

static DEFAULT: Lazy<BioNormalizer<StopwordSet, VerbLemmatizer>> =
    Lazy::new(BioNormalizer::english);

/// Applies the noise-removal rules in their fixed order:
/// users → links → hashtags → AV markers.
pub fn remove_noise(bio: &str) -> String {
    let bio = remove_users(bio);
    let bio = remove_links(&bio);
    let bio = remove_hashtags(&bio);
    remove_av(&bio)
}

/// Bio cleaner parameterized by its stopword and lemmatizer providers.
///
/// # Examples
///
/// ```
/// use bionorm_core::pipeline::BioNormalizer;
///
/// let normalizer = BioNormalizer::english();
/// assert_eq!(normalizer.basic_clean("Hello World!!  123"), "hello world");
/// assert_eq!(normalizer.preprocess_bio("Running dogs are NICE 🐶"), "run dog nice");
/// ```
#[derive(Debug, Clone)]
pub struct BioNormalizer<S, L> {
    stopwords: S,
    lemmatizer: L,
    tokenizer: Tokenizer,
}

/// Resource files for [`BioNormalizer::from_lexicon`]. Unset entries fall
/// back to the built-in English resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconPaths {
    /// Stopword list, one word per line. Replaces the built-in list.
    pub stopwords: Option<PathBuf>,
    /// WordNet `.exc` file. Extends the irregular-verb table.
    pub verb_exceptions: Option<PathBuf>,
    /// Verb list, one verb per line. Extends the known verbs.
    pub verbs: Option<PathBuf>,
}

impl LexiconPaths {
    /// Returns `true` if no file is configured.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_none() && self.verb_exceptions.is_none() && self.verbs.is_none()
    }
}

impl BioNormalizer<StopwordSet, VerbLemmatizer> {
    /// Normalizer backed by the built-in English resources.
    pub fn english() -> Self {
        Self::new(StopwordSet::english(), VerbLemmatizer::new())
    }

    /// Normalizer whose resources are loaded from `paths`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Resource`] if a file cannot be read or parsed.
    pub fn from_lexicon(paths: &LexiconPaths) -> Result<Self, PipelineError> {
        let stopwords = match &paths.stopwords {
            Some(path) => StopwordSet::from_path(path)?,
            None => StopwordSet::english(),
        };
        let mut lemmatizer = VerbLemmatizer::new();
        if let Some(path) = &paths.verb_exceptions {
            lemmatizer = lemmatizer.with_exceptions_path(path)?;
        }
        if let Some(path) = &paths.verbs {
            lemmatizer = lemmatizer.with_verbs_path(path)?;
        }
        Ok(Self::new(stopwords, lemmatizer))
    }
}

impl<S, L> BioNormalizer<S, L>
where
    S: StopwordFilter,
    L: Lemmatizer,
{
    /// Creates a normalizer with default tokenizer settings.
    pub fn new(stopwords: S, lemmatizer: L) -> Self {
        Self::with_config(stopwords, lemmatizer, TokenizerConfig::default())
    }

    /// Creates a normalizer with explicit tokenizer settings.
    pub fn with_config(stopwords: S, lemmatizer: L, config: TokenizerConfig) -> Self {
        Self {
            stopwords,
            lemmatizer,
            tokenizer: Tokenizer::new(config),
        }
    }

    /// The stopword provider.
    pub fn stopwords(&self) -> &S {
        &self.stopwords
    }

    /// The lemmatizer provider.
    pub fn lemmatizer(&self) -> &L {
        &self.lemmatizer
    }

    /// Cleans a bio and returns its tokens joined by single spaces.
    ///
    /// Returns an empty string when nothing survives.
    pub fn preprocess_bio(&self, bio: &str) -> String {
        let normalizer = TextNormalizer::new(NormalizerConfig::tokenizing());
        let cleaned = normalizer.normalize(&remove_noise(bio));
        log::trace!("cleaned {:?} -> {:?}", bio, cleaned);
        self.tokenize(&cleaned).join(" ")
    }

    /// Cleans a bio without tokenizing, stopword filtering or lemmatizing.
    pub fn basic_clean(&self, bio: &str) -> String {
        TextNormalizer::new(NormalizerConfig::basic()).normalize(&remove_noise(bio))
    }

    /// Tokenizes already-cleaned text.
    pub fn tokenize(&self, cleaned: &str) -> TokenSequence {
        self.tokenizer.tokenize(cleaned, &self.stopwords, &self.lemmatizer)
    }
}

/// [`BioNormalizer::preprocess_bio`] with the built-in English resources.
pub fn preprocess_bio(bio: &str) -> String {
    DEFAULT.preprocess_bio(bio)
}

/// [`BioNormalizer::basic_clean`] with the built-in English resources.
pub fn basic_clean(bio: &str) -> String {
    DEFAULT.basic_clean(bio)
}

/// [`BioNormalizer::tokenize`] with the built-in English resources.
pub fn tokenize(cleaned: &str) -> TokenSequence {
    DEFAULT.tokenize(cleaned)
}

/// The shared English normalizer behind the free functions.
pub fn default_normalizer() -> &'static BioNormalizer<StopwordSet, VerbLemmatizer> {
    &DEFAULT
}
