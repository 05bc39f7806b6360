// Unit tests for the tweet tokenizer and entity decoding.
//
// Focuses on the behaviors the ranking depends on: case folding, whole-token
// preservation of Twitter entities, and per-document deduplication.

use cohortrank::tokenize::entities::{decode_entities, named_entity};
use cohortrank::tokenize::traits::Tokenizer;
use cohortrank::tokenize::tweet::{is_emoticon, TweetTokenizer};

fn tok(text: &str) -> Vec<String> {
    TweetTokenizer::default().tokenize(text)
}

// ============================================================
// Case folding
// ============================================================

#[test]
fn words_are_lower_cased() {
    assert_eq!(tok("Hillary CLINTON"), vec!["hillary", "clinton"]);
}

#[test]
fn emoticons_are_not_lower_cased() {
    let tokens = tok("LOL :D");
    assert_eq!(tokens, vec!["lol", ":D"]);
}

#[test]
fn hashtags_and_mentions_are_lower_cased() {
    assert_eq!(tok("#FeelTheBern @BernieSanders"), vec!["#feelthebern", "@berniesanders"]);
}

// ============================================================
// Twitter entities
// ============================================================

#[test]
fn urls_survive_whole() {
    let tokens = tok("read https://example.com/a?b=1&c=2 now");
    assert_eq!(tokens, vec!["read", "https://example.com/a?b=1&c=2", "now"]);
}

#[test]
fn retweet_prefix_splits_colon() {
    let tokens = tok("RT @CNN: breaking");
    assert_eq!(tokens, vec!["rt", "@cnn", ":", "breaking"]);
}

#[test]
fn hyphenated_words_stay_together() {
    assert_eq!(tok("well-known"), vec!["well-known"]);
}

#[test]
fn punctuation_falls_back_to_single_chars() {
    assert_eq!(tok("what?!"), vec!["what", "?", "!"]);
}

#[test]
fn html_tags_are_one_token() {
    assert_eq!(tok("a <b> c"), vec!["a", "<b>", "c"]);
}

// ============================================================
// Non-ASCII text
// ============================================================

#[test]
fn accented_hashtag_stays_whole() {
    assert_eq!(tok("#FeelTheBern #café"), vec!["#feelthebern", "#café"]);
    assert_eq!(tok("@José_Niño"), vec!["@josé_niño"]);
}

#[test]
fn accented_words_stay_whole() {
    assert_eq!(tok("José Niño"), vec!["josé", "niño"]);
    assert_eq!(tok("Ça va"), vec!["ça", "va"]);
}

#[test]
fn non_breaking_space_separates_tokens() {
    assert_eq!(tok("a&nbsp;b"), vec!["a", "b"]);
    assert_eq!(tok("vote\u{a0}now"), vec!["vote", "now"]);
    assert_eq!(tok("vote\u{3000}now"), vec!["vote", "now"]);
}

// ============================================================
// Entity decoding happens before matching
// ============================================================

#[test]
fn escaped_heart_becomes_emoticon_like() {
    // &lt;3 decodes to <3, which is not an emoticon under these rules,
    // so it splits into two single-character tokens
    assert_eq!(tok("&lt;3"), vec!["<", "3"]);
}

#[test]
fn numeric_entity_decoded() {
    assert_eq!(tok("&#35;tag"), vec!["#tag"]);
}

#[test]
fn named_entity_table() {
    assert_eq!(named_entity("amp"), Some('&'));
    assert_eq!(named_entity("hellip"), Some('…'));
    assert_eq!(named_entity("spades"), Some('♠'));
    assert_eq!(named_entity("alpha"), Some('α'));
    assert_eq!(named_entity("bogus"), None);
    assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
}

// ============================================================
// Token sets
// ============================================================

#[test]
fn token_set_dedups_within_document() {
    let set = TweetTokenizer::default().token_set("Trump trump TRUMP!");
    assert_eq!(set.len(), 2);
    assert!(set.contains("trump"));
    assert!(set.contains("!"));
}

#[test]
fn empty_text_has_no_tokens() {
    assert!(tok("").is_empty());
    assert!(TweetTokenizer::default().token_set("  ").is_empty());
}

#[test]
fn emoticon_detection() {
    assert!(is_emoticon(":-)"));
    assert!(is_emoticon(">:("));
    assert!(!is_emoticon("hello"));
}
