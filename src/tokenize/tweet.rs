// Twitter-aware tokenizer.
//
// A single alternation regex is applied left to right over the decoded text.
// The alternatives are tried in priority order, so phone numbers win over
// plain digit runs, URLs over punctuation, emoticons over single characters.
// The final `\S` alternative is the catch-all: every non-whitespace character
// ends up in some token.
//
// Classes are Unicode-aware: `\w` covers accented letters and `\s` covers
// no-break and ideographic spaces, so neither leaks into the token stream.

use std::sync::LazyLock;

use regex::Regex;

use super::entities::decode_entities;
use super::traits::Tokenizer;

const PHONE: &str = r"(?:(?:\+?[01][\-\s.]*)?(?:[(]?\d{3}[\-\s.)]*)?\d{3}[\-\s.]*\d{4})";

const URL: &str = r"(?:https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*(),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+)";

// eyes, optional nose, mouth; or the mirrored form
const EMOTICON: &str = r"(?:[<>]?[:;=8][\-o*']?[)\](\[dDpP/:}{@|\\]|[)\](\[dDpP/:}{@|\\][\-o*']?[:;=8][<>]?)";

const HTML_TAG: &str = r"(?:<[^>]+>)";

const MENTION: &str = r"(?:@\w+)";

const HASHTAG: &str = r"(?:#+\w+[\w'\-]*\w+)";

// letters with inner apostrophes, dashes or underscores
const WORD_WITH_INNER_PUNCT: &str = r"(?:\p{L}[\p{L}'\-_]+\p{L})";

const NUMBER: &str = r"(?:[+\-]?\d+[,/.:-]\d+[+\-]?)";

const WORD: &str = r"(?:\w+)";

const ELLIPSIS: &str = r"(?:\.(?:\s*\.)+)";

const OTHER: &str = r"(?:\S)";

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = [
        PHONE,
        URL,
        EMOTICON,
        HTML_TAG,
        MENTION,
        HASHTAG,
        WORD_WITH_INNER_PUNCT,
        NUMBER,
        WORD,
        ELLIPSIS,
        OTHER,
    ];
    Regex::new(&format!("(?i){}", alternatives.join("|"))).expect("tokenizer pattern")
});

static EMOTICON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{EMOTICON}$")).expect("emoticon pattern"));

/// Tokenizer for tweet text: URLs, mentions, hashtags and emoticons survive
/// as single tokens; everything else is split into words and punctuation.
#[derive(Debug, Clone, Default)]
pub struct TweetTokenizer {
    /// Keep the original case of every token. When false (the default),
    /// everything except emoticons is lower-cased, so `:D` and `:d` stay
    /// distinct while `Trump` and `trump` merge.
    pub preserve_case: bool,
}

impl TweetTokenizer {
    pub fn new(preserve_case: bool) -> Self {
        Self { preserve_case }
    }
}

/// Whether a whole token is an emoticon.
pub fn is_emoticon(token: &str) -> bool {
    EMOTICON_RE.is_match(token)
}

impl Tokenizer for TweetTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let decoded = decode_entities(text);
        TOKEN_RE
            .find_iter(&decoded)
            .map(|m| {
                let token = m.as_str();
                if self.preserve_case || is_emoticon(token) {
                    token.to_string()
                } else {
                    token.to_lowercase()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Vec<String> {
        TweetTokenizer::default().tokenize(text)
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(tok("I like cats"), vec!["i", "like", "cats"]);
    }

    #[test]
    fn test_twitter_entities_kept_whole() {
        let tokens = tok("RT @realDonaldTrump: #DemDebate http://t.co/abc123 wow");
        assert_eq!(
            tokens,
            vec!["rt", "@realdonaldtrump", ":", "#demdebate", "http://t.co/abc123", "wow"]
        );
    }

    #[test]
    fn test_emoticons_keep_case() {
        let tokens = tok("Great night :D see you :P");
        assert!(tokens.contains(&":D".to_string()));
        assert!(tokens.contains(&":P".to_string()));
        assert!(tokens.contains(&"great".to_string()));
    }

    #[test]
    fn test_preserve_case_option() {
        let tokens = TweetTokenizer::new(true).tokenize("Bernie Sanders");
        assert_eq!(tokens, vec!["Bernie", "Sanders"]);
    }

    #[test]
    fn test_entities_decoded_first() {
        // `&amp;` decodes like every other entity. It must not come out as
        // the three tokens `&`, `amp`, `;`.
        let tokens = tok("you &amp; me");
        assert_eq!(tokens, vec!["you", "&", "me"]);
        assert!(!tokens.contains(&"amp".to_string()));
    }

    #[test]
    fn test_apostrophes_numbers_ellipsis() {
        assert_eq!(tok("don't"), vec!["don't"]);
        assert_eq!(tok("3.14 and 1/2"), vec!["3.14", "and", "1/2"]);
        assert_eq!(tok("wait..."), vec!["wait", "..."]);
    }

    #[test]
    fn test_non_ascii_fallback() {
        assert_eq!(tok("so…"), vec!["so", "…"]);
    }

    #[test]
    fn test_unicode_words_and_spaces() {
        assert_eq!(tok("José Niño"), vec!["josé", "niño"]);
        assert_eq!(tok("vote\u{3000}now"), vec!["vote", "now"]);
    }

    #[test]
    fn test_phone_number() {
        assert_eq!(tok("call 555-123-4567 now"), vec!["call", "555-123-4567", "now"]);
    }

    #[test]
    fn test_is_emoticon() {
        assert!(is_emoticon(":)"));
        assert!(is_emoticon(";-D"));
        assert!(is_emoticon("(:"));
        assert!(!is_emoticon("cats"));
        assert!(!is_emoticon(":"));
    }
}
