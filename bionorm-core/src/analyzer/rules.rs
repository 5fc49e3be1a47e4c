//! Noise-removal rules.
//!
//! Each rule is a pure `&str -> String` substitution. The rules are
//! independent of one another; the orchestrators in [`crate::pipeline`]
//! apply them in the fixed order users → links → hashtags → AV tags.
//!
//! Patterns are compiled once per process and shared read-only.

use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

use super::compile;

/// Handle body shared by mentions, retweet markers and hashtags.
const HANDLE: &str = r"[A-Za-z]+[A-Za-z0-9_-]*";

static HTTP_LINK: Lazy<Regex> = Lazy::new(|| compile(r"http\S+"));
// Unescaped dot: `bitxly/...` matches too.
static BITLY_LINK: Lazy<Regex> = Lazy::new(|| compile(r"bit.ly/\S+"));
static PIC_TWITTER: Lazy<Regex> = Lazy::new(|| compile(r"pic.twitter\S+"));
static RETWEET: Lazy<Regex> = Lazy::new(|| compile(&format!(r"RT\s@{HANDLE}")));
static MENTION: Lazy<Regex> = Lazy::new(|| compile(&format!("@{HANDLE}")));
static HASHTAG: Lazy<Regex> = Lazy::new(|| compile(&format!("#{HANDLE}")));

const AV_MARKERS: [&str; 2] = ["VIDEO:", "AUDIO:"];

#[inline(always)]
const fn is_link_tag_char(c: char) -> bool {
    matches!(c, '[' | 'l' | 'i' | 'n' | 'k' | ']')
}

/// Removes web links.
///
/// Deletes `http…` and `bit.ly/…` runs, trims any leading or trailing mix of
/// the characters `[`, `l`, `i`, `n`, `k`, `]`, then deletes `pic.twitter…`
/// runs. The trim is character-set based, so `"link in bio"` loses its
/// leading `lin`.
///
/// ```
/// use bionorm_core::analyzer::rules::remove_links;
///
/// assert_eq!(remove_links("read http://x.io/a now"), "read  now");
/// assert_eq!(remove_links("[link] pics"), " pics");
/// ```
pub fn remove_links(bio: &str) -> String {
    let bio = HTTP_LINK.replace_all(bio, "");
    let bio = BITLY_LINK.replace_all(&bio, "");
    let bio = bio.trim_matches(is_link_tag_char);
    PIC_TWITTER.replace_all(bio, "").into_owned()
}

/// Removes retweet markers (`RT @handle`) and plain `@handle` mentions.
pub fn remove_users(bio: &str) -> String {
    let bio = RETWEET.replace_all(bio, "");
    MENTION.replace_all(&bio, "").into_owned()
}

/// Removes `#hashtag` runs. A `#` not followed by a letter stays.
pub fn remove_hashtags(bio: &str) -> String {
    HASHTAG.replace_all(bio, "").into_owned()
}

/// Removes every `VIDEO:` and `AUDIO:` marker, wherever it occurs.
pub fn remove_av(bio: &str) -> String {
    let mut out = delete_literal(bio, AV_MARKERS[0]);
    for marker in &AV_MARKERS[1..] {
        out = delete_literal(&out, marker);
    }
    out
}

/// Deletes every non-overlapping occurrence of `needle`, left to right.
pub(crate) fn delete_literal(haystack: &str, needle: &str) -> String {
    let finder = memmem::Finder::new(needle.as_bytes());
    let mut out = String::with_capacity(haystack.len());
    let mut start = 0usize;

    for hit in finder.find_iter(haystack.as_bytes()) {
        out.push_str(&haystack[start..hit]);
        start = hit + needle.len();
    }

    out.push_str(&haystack[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile() {
        Lazy::force(&HTTP_LINK);
        Lazy::force(&BITLY_LINK);
        Lazy::force(&PIC_TWITTER);
        Lazy::force(&RETWEET);
        Lazy::force(&MENTION);
        Lazy::force(&HASHTAG);
    }

    #[test]
    fn http_links_removed() {
        assert_eq!(remove_links("see http://a.com/x now"), "see  now");
        assert_eq!(remove_links("see https://a.com now"), "see  now");
    }

    #[test]
    fn bare_http_word_stays() {
        assert_eq!(remove_links("http"), "http");
    }

    #[test]
    fn bitly_and_pic_twitter_removed() {
        assert_eq!(remove_links("a bit.ly/3xYz b"), "a  b");
        assert_eq!(remove_links("a pic.twitter.com/abc b"), "a  b");
    }

    #[test]
    fn bitly_dot_is_a_wildcard() {
        assert_eq!(remove_links("a bitXly/abc b"), "a  b");
    }

    #[test]
    fn link_tag_trim_is_character_set() {
        assert_eq!(remove_links("[link]"), "");
        assert_eq!(remove_links("link in bio"), " in bio");
        assert_eq!(remove_links("drink"), "dr");
        assert_eq!(remove_links("ok [link]"), "ok ");
        // Only the edges are trimmed.
        assert_eq!(remove_links("a [link] b"), "a [link] b");
    }

    #[test]
    fn pic_twitter_removed_after_trim() {
        assert_eq!(remove_links("pic.twitter.com/x"), "");
    }

    #[test]
    fn mentions_removed() {
        assert_eq!(remove_users("hi @john_doe!"), "hi !");
        assert_eq!(remove_users("@a-b-c and @x9"), " and ");
        assert_eq!(remove_users("single @a"), "single ");
    }

    #[test]
    fn retweet_marker_removed() {
        assert_eq!(remove_users("RT @news: big"), ": big");
        assert_eq!(remove_users("RT\t@news big"), " big");
    }

    #[test]
    fn mention_needs_leading_letter() {
        assert_eq!(remove_users("@123 @_x"), "@123 @_x");
    }

    #[test]
    fn mention_inside_email_is_removed() {
        assert_eq!(remove_users("me@gmail.com"), "me.com");
    }

    #[test]
    fn no_handle_survives() {
        let input = "ping @dev_team-2 or RT @dev_team-2 now";
        assert!(!remove_users(input).contains("@dev_team-2"));
    }

    #[test]
    fn hashtags_removed() {
        assert_eq!(remove_hashtags("love #RustLang and #AI"), "love  and ");
        assert_eq!(remove_hashtags("#1 fan"), "#1 fan");
        assert_eq!(remove_hashtags("# alone"), "# alone");
    }

    #[test]
    fn av_markers_removed_anywhere() {
        assert_eq!(remove_av("VIDEO: clip"), " clip");
        assert_eq!(remove_av("new AUDIO: and VIDEO: here"), "new  and  here");
        assert_eq!(remove_av("video: lower"), "video: lower");
    }

    #[test]
    fn av_removal_is_single_pass() {
        // Deleting the inner marker forms a new one, which stays.
        assert_eq!(remove_av("VIDVIDEO:EO:"), "VIDEO:");
    }

    #[test]
    fn delete_literal_handles_edges() {
        assert_eq!(delete_literal("", "x"), "");
        assert_eq!(delete_literal("xxx", "x"), "");
        assert_eq!(delete_literal("axbxc", "x"), "abc");
        assert_eq!(delete_literal("aaaa", "aa"), "");
    }

    #[test]
    fn rules_accept_non_latin_input() {
        for input in ["", "😀", "привет @мир", "日本語 #タグ"] {
            let _ = remove_av(&remove_hashtags(&remove_links(&remove_users(input))));
        }
    }
}
