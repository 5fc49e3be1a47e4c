//! Core types and traits for the bionorm text pipeline.
//!
//! This crate holds the vocabulary shared between the pipeline and whatever
//! supplies its language resources:
//!
//! - **Capabilities**: [`StopwordFilter`] and [`Lemmatizer`] are the two seams
//!   where a stopword list or a lemmatization model plugs in
//! - **Part of speech**: [`PartOfSpeech`] is the hint passed to a lemmatizer
//! - **Errors**: [`PipelineError`] and [`ResourceError`]

#![warn(missing_docs)]

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Part-of-speech hint handed to a [`Lemmatizer`].
///
/// `#[repr(u8)]` keeps the hint a single byte so it can sit inside
/// `Copy` configuration structs at no cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PartOfSpeech {
    /// Nouns: plural forms reduce to the singular.
    Noun = 0,
    /// Verbs: inflected forms reduce to the infinitive.
    #[default]
    Verb = 1,
    /// Adjectives.
    Adjective = 2,
    /// Adverbs.
    Adverb = 3,
}

impl PartOfSpeech {
    /// Single-letter tag in the WordNet convention (`n`, `v`, `a`, `r`).
    #[must_use]
    #[inline(always)]
    pub const fn tag(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        };
        f.write_str(name)
    }
}

/// Reports whether a word carries too little signal to keep.
///
/// Implementations receive words that are already lower-cased.
pub trait StopwordFilter {
    /// Returns `true` when `word` must be dropped from token output.
    fn is_stopword(&self, word: &str) -> bool;
}

/// Reduces a word to its base form.
///
/// A lemmatizer never fails: a word it cannot reduce comes back unchanged.
pub trait Lemmatizer {
    /// Returns the base form of `word` read as `pos`.
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String;
}

impl<T: StopwordFilter + ?Sized> StopwordFilter for &T {
    #[inline]
    fn is_stopword(&self, word: &str) -> bool {
        (**self).is_stopword(word)
    }
}

impl<T: Lemmatizer + ?Sized> Lemmatizer for &T {
    #[inline]
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        (**self).lemmatize(word, pos)
    }
}

/// Failure to load an external language resource.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The resource could not be read.
    #[error("failed to read {what} from {path}: {source}")]
    Io {
        /// Kind of resource, e.g. "stopword list".
        what: &'static str,
        /// Where it was read from.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The resource parsed but held no entries.
    #[error("{what} is empty")]
    Empty {
        /// Kind of resource.
        what: &'static str,
    },
    /// A line could not be parsed.
    #[error("{what}: malformed entry on line {line}: {content:?}")]
    Malformed {
        /// Kind of resource.
        what: &'static str,
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
}

/// Errors raised while applying the pipeline to tabular input.
///
/// The text rules themselves never fail; only the surrounding record access
/// and resource loading can.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The table has no column with this name.
    #[error("column `{0}` not found")]
    MissingColumn(String),
    /// A cell that must hold text holds something else.
    #[error("row {row} of column `{column}` is not text (found {found})")]
    NotText {
        /// 0-based row index.
        row: usize,
        /// Column name.
        column: String,
        /// Kind of value found instead.
        found: &'static str,
    },
    /// A column does not have one value per row.
    #[error("column `{column}` has {actual} rows, table has {expected}")]
    LengthMismatch {
        /// Column name.
        column: String,
        /// Rows in the table.
        expected: usize,
        /// Rows in the column.
        actual: usize,
    },
    /// A language resource failed to load.
    #[error(transparent)]
    Resource(#[from] ResourceError),
    /// The progress report could not be written.
    #[error("failed to write progress report: {0}")]
    Report(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl StopwordFilter for Fixed {
        fn is_stopword(&self, word: &str) -> bool {
            word == "the"
        }
    }

    impl Lemmatizer for Fixed {
        fn lemmatize(&self, word: &str, _pos: PartOfSpeech) -> String {
            word.trim_end_matches('s').to_owned()
        }
    }

    #[test]
    fn pos_size_is_1_byte() {
        assert_eq!(size_of::<PartOfSpeech>(), 1);
    }

    #[test]
    fn pos_defaults_to_verb() {
        assert_eq!(PartOfSpeech::default(), PartOfSpeech::Verb);
        assert_eq!(PartOfSpeech::Verb.tag(), 'v');
        assert_eq!(PartOfSpeech::Adverb.tag(), 'r');
        assert_eq!(PartOfSpeech::Noun.to_string(), "noun");
    }

    #[test]
    fn references_forward_capabilities() {
        let fixed = Fixed;
        let by_ref = &fixed;
        assert!(by_ref.is_stopword("the"));
        assert!(!by_ref.is_stopword("cat"));
        assert_eq!(by_ref.lemmatize("cats", PartOfSpeech::Noun), "cat");
    }

    #[test]
    fn error_messages() {
        let err = PipelineError::NotText {
            row: 3,
            column: "user_bio".into(),
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "row 3 of column `user_bio` is not text (found number)"
        );

        let err = PipelineError::from(ResourceError::Empty {
            what: "stopword list",
        });
        assert_eq!(err.to_string(), "stopword list is empty");
        assert!(matches!(err, PipelineError::Resource(_)));

        let err = PipelineError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "failed to write progress report: closed");
    }

    #[test]
    fn malformed_message_includes_line() {
        let err = ResourceError::Malformed {
            what: "verb exceptions",
            line: 7,
            content: "lonely".into(),
        };
        assert!(err.to_string().contains("line 7"));
    }
}
