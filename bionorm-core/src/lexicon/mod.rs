//! Built-in language resources.
//!
//! - **StopwordSet**: English stopwords, or any list loaded from disk
//! - **VerbLemmatizer**: rule-based lemmatizer with an irregular-verb table,
//!   checked against the known verbs in [`verbs`]
//!
//! Both implement the capability traits from `bionorm_types`, so any other
//! provider can take their place in [`crate::pipeline::BioNormalizer`].

pub mod lemmatizer;
pub mod stopwords;
pub mod verbs;

pub use lemmatizer::VerbLemmatizer;
pub use stopwords::StopwordSet;
pub use verbs::ENGLISH_VERBS;
