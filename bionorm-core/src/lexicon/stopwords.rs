//! Stopword sets.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bionorm_types::{ResourceError, StopwordFilter};
use rustc_hash::FxHashSet;

const WHAT: &str = "stopword list";

/// English stopwords, matching the list shipped with gensim.
#[rustfmt::skip]
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amoungst",
    "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere",
    "are", "around", "as", "at", "back", "be", "became", "because", "become", "becomes",
    "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "bill", "both", "bottom", "but", "by", "call", "can", "cannot", "cant",
    "co", "computer", "con", "could", "couldnt", "cry", "de", "describe", "detail", "did",
    "didn", "do", "does", "doesn", "doing", "don", "done", "down", "due", "during",
    "each", "eg", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc",
    "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen", "fifty",
    "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty", "found",
    "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
    "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon",
    "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "ie",
    "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
    "just", "keep", "kg", "km", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "make", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one",
    "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
    "over", "own", "part", "per", "perhaps", "please", "put", "quite", "rather", "re",
    "really", "regarding", "same", "say", "see", "seem", "seemed", "seeming", "seems", "serious",
    "several", "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so",
    "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "system",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus", "to",
    "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under",
    "unless", "until", "up", "upon", "us", "used", "using", "various", "very", "via",
    "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
    "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// A set of lower-case stopwords.
///
/// # Example
///
/// ```
/// use bionorm_core::lexicon::StopwordSet;
/// use bionorm_types::StopwordFilter;
///
/// let stopwords = StopwordSet::english();
/// assert!(stopwords.is_stopword("are"));
/// assert!(!stopwords.is_stopword("rust"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Builds a set from any list of words. Words are lower-cased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The built-in English list.
    pub fn english() -> Self {
        Self::new(ENGLISH_STOPWORDS.iter().copied())
    }

    /// Reads one word per line. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Io`] when reading fails and
    /// [`ResourceError::Empty`] when no word was found.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ResourceError> {
        Self::read(reader, Path::new("<reader>"))
    }

    /// Loads a stopword file. See [`StopwordSet::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ResourceError::Io {
            what: WHAT,
            path: path.to_path_buf(),
            source,
        })?;
        Self::read(BufReader::new(file), path)
    }

    fn read<R: BufRead>(reader: R, path: &Path) -> Result<Self, ResourceError> {
        let mut words = FxHashSet::default();
        for line in reader.lines() {
            let line = line.map_err(|source| ResourceError::Io {
                what: WHAT,
                path: path.to_path_buf(),
                source,
            })?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_lowercase());
        }

        if words.is_empty() {
            return Err(ResourceError::Empty { what: WHAT });
        }
        log::debug!("loaded {} stopwords from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Adds a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Removes a word. Returns `true` if it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(&word.to_lowercase())
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordFilter for StopwordSet {
    #[inline]
    fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
