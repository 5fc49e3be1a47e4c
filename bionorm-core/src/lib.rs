//! Noise removal and tokenization for short social-media bios.
//!
//! - [`analyzer`]: noise-removal rules, character-class normalization and
//!   the word tokenizer
//! - [`lexicon`]: built-in English stopwords, known verbs and the verb
//!   lemmatizer
//! - [`pipeline`]: the two orchestrators, [`preprocess_bio`] and
//!   [`basic_clean`]
//! - [`frame`]: applies the pipeline to a column of bios
//!
//! ```
//! let bio = "RT @john_doe check out http://example.com/cool #AI 🚀 VIDEO: amazing stuff!!! 123";
//!
//! assert_eq!(bionorm_core::preprocess_bio(bio), "check amaze stuff");
//! assert_eq!(bionorm_core::basic_clean(bio), "check out 🚀 amazing stuff");
//! ```

pub mod analyzer;
pub mod frame;
pub mod lexicon;
pub mod pipeline;

pub use frame::{tokenize_bios, BioTable, Cell, Column};
pub use pipeline::{basic_clean, preprocess_bio, tokenize, BioNormalizer, LexiconPaths};

pub use bionorm_types::{Lemmatizer, PartOfSpeech, PipelineError, ResourceError, StopwordFilter};
