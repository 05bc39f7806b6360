// Tokenizer trait — the seam between raw post text and the ranking pipeline.
//
// The pipeline never looks inside a token. Anything that turns text into a
// sequence of strings can be plugged in here, which keeps the counting and
// scoring stages testable with trivial whitespace tokenizers.

use std::collections::HashSet;

/// Trait for splitting a post's text into tokens.
///
/// Implementations must be shareable across the parallel aggregation workers.
pub trait Tokenizer: Send + Sync {
    /// Split text into an ordered sequence of tokens (duplicates kept).
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// The distinct tokens of a single document.
    ///
    /// A user mentioning a token several times in one post still counts once,
    /// so the pipeline only ever consumes this set form.
    fn token_set(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}

/// Splits on Unicode whitespace and lower-cases. Handy for tests and for
/// corpora that are already tokenized.
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|t| t.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_set_dedups() {
        let set = WhitespaceTokenizer.token_set("Cats cats CATS dogs");
        assert_eq!(set.len(), 2);
        assert!(set.contains("cats"));
        assert!(set.contains("dogs"));
    }

    #[test]
    fn test_token_set_empty_text() {
        assert!(WhitespaceTokenizer.token_set("").is_empty());
        assert!(WhitespaceTokenizer.token_set("   \n\t").is_empty());
    }
}
