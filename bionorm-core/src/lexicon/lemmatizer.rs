//! Rule-based lemmatizer.
//!
//! Irregular forms come from an exception table. Everything else goes
//! through suffix rules with Porter-style stem repair, and a candidate is
//! only accepted when it is a known verb base:
//!
//! ```text
//! running -> runn -> run      (undouble)
//! coding  -> cod  -> code     (short cvc stem gets its e back)
//! created -> creat -> create  (-at, -bl, -iz get their e back)
//! watches -> watch            (-es after a sibilant)
//! movies  -> movy, movie      (no known verb: kept as movies)
//! ```
//!
//! Known verbs come from [`ENGLISH_VERBS`] and can be extended from a
//! one-verb-per-line file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bionorm_types::{Lemmatizer, PartOfSpeech, ResourceError};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::verbs::ENGLISH_VERBS;

const EXCEPTIONS: &str = "verb exception list";
const VERBS: &str = "verb list";

#[rustfmt::skip]
const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
    ("goes", "go"), ("went", "go"), ("gone", "go"), ("going", "go"),
    ("made", "make"), ("said", "say"), ("says", "say"),
    ("got", "get"), ("gotten", "get"), ("took", "take"), ("taken", "take"),
    ("came", "come"), ("saw", "see"), ("seen", "see"), ("seeing", "see"),
    ("knew", "know"), ("known", "know"), ("thought", "think"), ("told", "tell"),
    ("found", "find"), ("gave", "give"), ("given", "give"), ("ran", "run"),
    ("wrote", "write"), ("written", "write"), ("began", "begin"), ("begun", "begin"),
    ("felt", "feel"), ("left", "leave"), ("kept", "keep"), ("brought", "bring"),
    ("bought", "buy"), ("built", "build"), ("taught", "teach"), ("caught", "catch"),
    ("sold", "sell"), ("held", "hold"), ("stood", "stand"), ("understood", "understand"),
    ("lost", "lose"), ("paid", "pay"), ("met", "meet"), ("sent", "send"),
    ("spent", "spend"), ("won", "win"), ("led", "lead"), ("fell", "fall"),
    ("fallen", "fall"), ("grew", "grow"), ("grown", "grow"), ("drew", "draw"),
    ("drawn", "draw"), ("drove", "drive"), ("driven", "drive"), ("ate", "eat"),
    ("eaten", "eat"), ("spoke", "speak"), ("spoken", "speak"), ("chose", "choose"),
    ("chosen", "choose"), ("broke", "break"), ("broken", "break"), ("flew", "fly"),
    ("flown", "fly"), ("sang", "sing"), ("sung", "sing"), ("swam", "swim"),
    ("swum", "swim"), ("threw", "throw"), ("thrown", "throw"), ("wore", "wear"),
    ("worn", "wear"), ("rode", "ride"), ("ridden", "ride"), ("rose", "rise"),
    ("risen", "rise"), ("shook", "shake"), ("woke", "wake"), ("born", "bear"),
    ("became", "become"), ("lying", "lie"), ("dying", "die"), ("tying", "tie"),
    ("lied", "lie"), ("died", "die"), ("tied", "tie"),
];

/// Stems that already are base forms even though a repair rule would touch them.
const BARE_STEMS: &[&str] = &[
    "eat", "beat", "heat", "treat", "cheat", "repeat", "defeat", "seat", "sweat",
];

/// Suffix-rule lemmatizer with an irregular-verb exception table and a
/// known-verb list.
///
/// - [`PartOfSpeech::Verb`]: exceptions, then `-ies`/`-ied`/`-eed`/`-ing`/`-ed`,
///   then plural `-s` forms. The first candidate that is a known verb wins;
///   with none, the word comes back unchanged.
/// - [`PartOfSpeech::Noun`]: plural rules only
/// - adjectives and adverbs come back unchanged
///
/// Words containing non-ASCII characters are returned unchanged.
///
/// ```
/// use bionorm_core::lexicon::VerbLemmatizer;
/// use bionorm_types::{Lemmatizer, PartOfSpeech};
///
/// let lemmatizer = VerbLemmatizer::new();
/// assert_eq!(lemmatizer.lemmatize("running", PartOfSpeech::Verb), "run");
/// assert_eq!(lemmatizer.lemmatize("went", PartOfSpeech::Verb), "go");
/// assert_eq!(lemmatizer.lemmatize("movies", PartOfSpeech::Verb), "movies");
/// ```
#[derive(Debug, Clone)]
pub struct VerbLemmatizer {
    exceptions: FxHashMap<String, String>,
    verbs: FxHashSet<String>,
}

impl Default for VerbLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl VerbLemmatizer {
    /// Creates a lemmatizer with the built-in exception table and verb list.
    pub fn new() -> Self {
        let exceptions = VERB_EXCEPTIONS
            .iter()
            .map(|&(inflected, base)| (inflected.to_owned(), base.to_owned()))
            .collect();
        let verbs = ENGLISH_VERBS.iter().map(|&v| v.to_owned()).collect();
        Self { exceptions, verbs }
    }

    /// Adds or replaces one exception.
    pub fn insert_exception(&mut self, inflected: &str, base: &str) {
        self.exceptions
            .insert(inflected.to_lowercase(), base.to_lowercase());
    }

    /// Number of exception entries.
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Adds one verb base form. Returns `false` if it was already known.
    pub fn insert_verb(&mut self, verb: &str) -> bool {
        self.verbs.insert(verb.to_lowercase())
    }

    /// Returns `true` if `word` is a known verb base form.
    pub fn is_known_verb(&self, word: &str) -> bool {
        self.verbs.contains(word)
    }

    /// Number of known verb base forms.
    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    /// Extends the exception table from WordNet `.exc` lines:
    /// `inflected base [other bases...]`. Only the first base is used.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Malformed`] for a line with fewer than two
    /// fields and [`ResourceError::Io`] if reading fails.
    pub fn with_exceptions_reader<R: BufRead>(self, reader: R) -> Result<Self, ResourceError> {
        self.read_exceptions(reader, Path::new("<reader>"))
    }

    /// Extends the exception table from a WordNet `.exc` file.
    pub fn with_exceptions_path(self, path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let file = open(path, EXCEPTIONS)?;
        self.read_exceptions(BufReader::new(file), path)
    }

    /// Extends the known-verb list, one verb per line. Blank lines and `#`
    /// comments are skipped; only the first field of a line is used, so
    /// WordNet `index.verb` files load as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Io`] if reading fails.
    pub fn with_verbs_reader<R: BufRead>(self, reader: R) -> Result<Self, ResourceError> {
        self.read_verbs(reader, Path::new("<reader>"))
    }

    /// Extends the known-verb list from a file. See
    /// [`VerbLemmatizer::with_verbs_reader`].
    pub fn with_verbs_path(self, path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let file = open(path, VERBS)?;
        self.read_verbs(BufReader::new(file), path)
    }

    fn read_exceptions<R: BufRead>(mut self, reader: R, path: &Path) -> Result<Self, ResourceError> {
        let before = self.exceptions.len();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| io_error(EXCEPTIONS, path, source))?;
            let mut fields = line.split_whitespace();
            let Some(inflected) = fields.next() else {
                continue;
            };
            let Some(base) = fields.next() else {
                return Err(ResourceError::Malformed {
                    what: EXCEPTIONS,
                    line: idx + 1,
                    content: line.clone(),
                });
            };
            self.insert_exception(inflected, base);
        }
        log::debug!(
            "loaded {} verb exceptions from {}",
            self.exceptions.len() - before,
            path.display()
        );
        Ok(self)
    }

    fn read_verbs<R: BufRead>(mut self, reader: R, path: &Path) -> Result<Self, ResourceError> {
        let before = self.verbs.len();
        for line in reader.lines() {
            let line = line.map_err(|source| io_error(VERBS, path, source))?;
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            if let Some(verb) = line.split_whitespace().next() {
                self.insert_verb(verb);
            }
        }
        log::debug!(
            "loaded {} verbs from {}",
            self.verbs.len() - before,
            path.display()
        );
        Ok(self)
    }

    fn verb(&self, word: &str) -> String {
        if let Some(base) = self.exceptions.get(word) {
            return base.clone();
        }
        if !word.is_ascii() || self.verbs.contains(word) {
            return word.to_owned();
        }
        verb_candidates(word)
            .into_iter()
            .find(|candidate| self.verbs.contains(candidate.as_str()))
            .unwrap_or_else(|| word.to_owned())
    }
}

fn open(path: &Path, what: &'static str) -> Result<File, ResourceError> {
    File::open(path).map_err(|source| io_error(what, path, source))
}

fn io_error(what: &'static str, path: &Path, source: std::io::Error) -> ResourceError {
    ResourceError::Io {
        what,
        path: path.to_path_buf(),
        source,
    }
}

impl Lemmatizer for VerbLemmatizer {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        match pos {
            PartOfSpeech::Verb => self.verb(word),
            PartOfSpeech::Noun if word.is_ascii() => singular(word),
            _ => word.to_owned(),
        }
    }
}

/// Possible base forms of `word`, most likely first.
fn verb_candidates(word: &str) -> SmallVec<[String; 4]> {
    let n = word.len();
    let mut out = SmallVec::new();

    if n > 4 && (word.ends_with("ies") || word.ends_with("ied")) {
        out.push(format!("{}y", &word[..n - 3]));
        out.push(word[..n - 1].to_owned());
        return out;
    }
    if word.ends_with("eed") {
        if measure(&word[..n - 3]) > 0 {
            out.push(word[..n - 1].to_owned());
        }
        return out;
    }
    if word.ends_with("ing") {
        push_stem_forms(&mut out, &word[..n - 3]);
        return out;
    }
    if word.ends_with("ed") {
        push_stem_forms(&mut out, &word[..n - 2]);
        return out;
    }

    out.push(singular(word));
    if let Some(stem) = word.strip_suffix("es") {
        out.push(stem.to_owned());
    }
    if let Some(stem) = word.strip_suffix('s') {
        out.push(stem.to_owned());
    }
    out
}

/// Repaired stem, bare stem, stem plus `e`.
fn push_stem_forms(out: &mut SmallVec<[String; 4]>, stem: &str) {
    if stem.len() < 3 || !has_vowel(stem) {
        return;
    }
    out.push(repair(stem));
    out.push(stem.to_owned());
    out.push(format!("{stem}e"));
}

/// Plural and third-person `-s` reduction.
fn singular(word: &str) -> String {
    let n = word.len();
    if n > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..n - 3]);
    }
    if word.ends_with("sses") {
        return word[..n - 2].to_owned();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_owned();
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ["sh", "ch", "x", "zz", "ss"].iter().any(|s| stem.ends_with(s)) {
            return stem.to_owned();
        }
    }
    if n >= 4 && word.ends_with('s') {
        return word[..n - 1].to_owned();
    }
    word.to_owned()
}

fn repair(stem: &str) -> String {
    if BARE_STEMS.contains(&stem) {
        return stem.to_owned();
    }
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }

    let b = stem.as_bytes();
    let n = b.len();
    let last = b[n - 1];
    let doubled = b[n - 2] == last && is_consonant(b, n - 1);

    if doubled && !matches!(last, b'l' | b's' | b'z') {
        return stem[..n - 1].to_owned();
    }
    if !doubled && matches!(last, b'v' | b'z' | b'c') {
        return format!("{stem}e");
    }
    if last == b'u' && is_consonant(b, n - 2) {
        return format!("{stem}e");
    }
    if measure(stem) == 1 && ends_cvc(b) {
        return format!("{stem}e");
    }
    stem.to_owned()
}

#[inline]
fn is_consonant(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(b, i - 1),
        _ => true,
    }
}

fn has_vowel(stem: &str) -> bool {
    let b = stem.as_bytes();
    (0..b.len()).any(|i| !is_consonant(b, i))
}

/// Porter measure: the `m` in `[C](VC){m}[V]`.
fn measure(stem: &str) -> usize {
    let b = stem.as_bytes();
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..b.len() {
        let vowel = !is_consonant(b, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

/// consonant-vowel-consonant ending, last consonant not `w`, `x` or `y`.
fn ends_cvc(b: &[u8]) -> bool {
    let n = b.len();
    n >= 3
        && is_consonant(b, n - 3)
        && !is_consonant(b, n - 2)
        && is_consonant(b, n - 1)
        && !matches!(b[n - 1], b'w' | b'x' | b'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(word: &str) -> String {
        VerbLemmatizer::new().lemmatize(word, PartOfSpeech::Verb)
    }

    #[test]
    fn measure_values() {
        assert_eq!(measure("tr"), 0);
        assert_eq!(measure("tree"), 0);
        assert_eq!(measure("trouble"), 1);
        assert_eq!(measure("oats"), 1);
        assert_eq!(measure("troubles"), 2);
        assert_eq!(measure("private"), 2);
    }

    #[test]
    fn cvc_detection() {
        assert!(ends_cvc(b"hop"));
        assert!(!ends_cvc(b"fix"));
        assert!(!ends_cvc(b"play"));
        assert!(!ends_cvc(b"walk"));
    }

    #[test]
    fn irregular_verbs() {
        assert_eq!(verb("went"), "go");
        assert_eq!(verb("are"), "be");
        assert_eq!(verb("written"), "write");
        assert_eq!(verb("left"), "leave");
    }

    #[test]
    fn ing_forms() {
        assert_eq!(verb("running"), "run");
        assert_eq!(verb("coding"), "code");
        assert_eq!(verb("amazing"), "amaze");
        assert_eq!(verb("dancing"), "dance");
        assert_eq!(verb("learning"), "learn");
        assert_eq!(verb("traveling"), "travel");
        assert_eq!(verb("arguing"), "argue");
        assert_eq!(verb("eating"), "eat");
        assert_eq!(verb("buzzing"), "buzz");
    }

    #[test]
    fn ing_needs_a_real_stem() {
        assert_eq!(verb("sing"), "sing");
        assert_eq!(verb("thing"), "thing");
        assert_eq!(verb("string"), "string");
        assert_eq!(verb("king"), "king");
    }

    #[test]
    fn ed_forms() {
        assert_eq!(verb("walked"), "walk");
        assert_eq!(verb("played"), "play");
        assert_eq!(verb("hoped"), "hope");
        assert_eq!(verb("stopped"), "stop");
        assert_eq!(verb("created"), "create");
        assert_eq!(verb("loved"), "love");
        assert_eq!(verb("filled"), "fill");
        assert_eq!(verb("fixed"), "fix");
        assert_eq!(verb("opened"), "open");
    }

    #[test]
    fn short_ed_words_untouched() {
        assert_eq!(verb("need"), "need");
        assert_eq!(verb("red"), "red");
        assert_eq!(verb("used"), "used");
    }

    #[test]
    fn eed_forms() {
        assert_eq!(verb("agreed"), "agree");
        assert_eq!(verb("speed"), "speed");
        assert_eq!(verb("feed"), "feed");
    }

    #[test]
    fn y_forms() {
        assert_eq!(verb("studies"), "study");
        assert_eq!(verb("studied"), "study");
        assert_eq!(verb("tried"), "try");
        assert_eq!(verb("ties"), "tie");
        assert_eq!(verb("tied"), "tie");
    }

    #[test]
    fn s_forms() {
        assert_eq!(verb("dogs"), "dog");
        assert_eq!(verb("watches"), "watch");
        assert_eq!(verb("fixes"), "fix");
        assert_eq!(verb("kisses"), "kiss");
        assert_eq!(verb("lives"), "live");
        assert_eq!(verb("business"), "business");
        assert_eq!(verb("focus"), "focus");
        assert_eq!(verb("gas"), "gas");
    }

    #[test]
    fn candidates_must_be_known_verbs() {
        let cases = [
            ("movies", "movies"),
            ("news", "news"),
            ("series", "series"),
            ("bias", "bias"),
            ("morning", "morning"),
            ("cookies", "cookies"),
            ("species", "species"),
            ("evening", "evening"),
            ("analytics", "analytics"),
            ("things", "things"),
        ];
        for (word, expected) in cases {
            assert_eq!(verb(word), expected, "{word}");
        }
    }

    #[test]
    fn later_candidate_can_win() {
        // "unty" is rejected, "untie" is accepted.
        let mut l = VerbLemmatizer::new();
        assert!(l.insert_verb("untie"));
        assert_eq!(l.lemmatize("untied", PartOfSpeech::Verb), "untie");
    }

    #[test]
    fn known_verb_is_returned_as_is() {
        let l = VerbLemmatizer::new();
        assert!(l.is_known_verb("need"));
        assert_eq!(verb("need"), "need");
        assert_eq!(verb("sing"), "sing");
    }

    #[test]
    fn verbs_from_reader() {
        let input = "# extra\n\nbinge\nmovie 1 x\n";
        let l = VerbLemmatizer::new().with_verbs_reader(input.as_bytes()).unwrap();
        assert_eq!(l.verb_count(), ENGLISH_VERBS.len() + 2);
        assert_eq!(l.lemmatize("binges", PartOfSpeech::Verb), "binge");
        assert_eq!(l.lemmatize("movies", PartOfSpeech::Verb), "movie");
    }

    #[test]
    fn verbs_path_missing() {
        let err = VerbLemmatizer::new()
            .with_verbs_path("/no/such/index.verb")
            .unwrap_err();
        assert!(matches!(err, ResourceError::Io { what: "verb list", .. }));
    }

    #[test]
    fn built_in_verbs_are_unique_and_lower_case() {
        let l = VerbLemmatizer::new();
        assert_eq!(l.verb_count(), ENGLISH_VERBS.len());
        assert!(ENGLISH_VERBS.iter().all(|v| *v == v.to_lowercase()));
    }

    #[test]
    fn exception_bases_are_known_verbs() {
        let l = VerbLemmatizer::new();
        for (_, base) in VERB_EXCEPTIONS {
            assert!(l.is_known_verb(base), "{base}");
        }
    }

    #[test]
    fn words_without_suffix_unchanged() {
        for word in ["nice", "check", "stuff", "rust", "coffee"] {
            assert_eq!(verb(word), word);
        }
    }

    #[test]
    fn noun_mode_only_singularizes() {
        let l = VerbLemmatizer::new();
        assert_eq!(l.lemmatize("dogs", PartOfSpeech::Noun), "dog");
        assert_eq!(l.lemmatize("running", PartOfSpeech::Noun), "running");
        assert_eq!(l.lemmatize("went", PartOfSpeech::Noun), "went");
    }

    #[test]
    fn adjective_and_adverb_unchanged() {
        let l = VerbLemmatizer::new();
        assert_eq!(l.lemmatize("running", PartOfSpeech::Adjective), "running");
        assert_eq!(l.lemmatize("dogs", PartOfSpeech::Adverb), "dogs");
    }

    #[test]
    fn non_ascii_unchanged() {
        assert_eq!(verb("señores"), "señores");
        assert_eq!(verb("привет"), "привет");
    }

    #[test]
    fn exceptions_from_reader() {
        let input = "\nswore swear\nslain slay slew\n";
        let l = VerbLemmatizer::new().with_exceptions_reader(input.as_bytes()).unwrap();
        assert_eq!(l.exception_count(), VERB_EXCEPTIONS.len() + 2);
        assert_eq!(l.lemmatize("swore", PartOfSpeech::Verb), "swear");
        assert_eq!(l.lemmatize("slain", PartOfSpeech::Verb), "slay");
    }

    #[test]
    fn exceptions_reject_single_field_lines() {
        let err = VerbLemmatizer::new()
            .with_exceptions_reader("swore swear\nlonely\n".as_bytes())
            .unwrap_err();
        match err {
            ResourceError::Malformed { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "lonely");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn exceptions_path_missing() {
        let err = VerbLemmatizer::new()
            .with_exceptions_path("/no/such/verb.exc")
            .unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
    }

    #[test]
    fn built_in_table_has_unique_keys() {
        assert_eq!(VerbLemmatizer::new().exception_count(), VERB_EXCEPTIONS.len());
    }
}
