// UserTokenAggregator — one token set per user across all of their posts.
//
// A user who writes "trump" in forty tweets is one mention of "trump". The
// per-document sets are unioned per user with a parallel fold/reduce; union
// is commutative and associative, so the result doesn't depend on how rayon
// splits the documents or in which order the partial maps are merged.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::corpus::Document;
use crate::tokenize::traits::Tokenizer;

/// Distinct tokens mentioned by each user.
pub type UserTokens = HashMap<String, HashSet<String>>;

/// Merge two partial aggregations by per-user set union.
pub fn merge_user_tokens(mut a: UserTokens, mut b: UserTokens) -> UserTokens {
    // Fold the smaller map into the larger one
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    for (user, tokens) in b {
        a.entry(user).or_default().extend(tokens);
    }
    a
}

/// Tokenize every document and union the token sets per user.
///
/// A document with empty text still registers its author, with no tokens.
pub fn aggregate_user_tokens<T>(documents: &[Document], tokenizer: &T) -> UserTokens
where
    T: Tokenizer + ?Sized,
{
    documents
        .par_iter()
        .fold(UserTokens::new, |mut acc, doc| {
            let tokens = tokenizer.token_set(&doc.text);
            acc.entry(doc.user_id.clone()).or_default().extend(tokens);
            acc
        })
        .reduce(UserTokens::new, merge_user_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::traits::WhitespaceTokenizer;

    fn set(tokens: &[&str]) -> HashSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_repeated_mentions_count_once() {
        let docs = vec![
            Document::new("a", "cats cats cats"),
            Document::new("a", "cats dogs"),
        ];
        let users = aggregate_user_tokens(&docs, &WhitespaceTokenizer);
        assert_eq!(users.len(), 1);
        assert_eq!(users["a"], set(&["cats", "dogs"]));
    }

    #[test]
    fn test_empty_text_contributes_nothing() {
        let docs = vec![Document::new("a", ""), Document::new("b", "hi")];
        let users = aggregate_user_tokens(&docs, &WhitespaceTokenizer);
        assert!(users["a"].is_empty());
        assert_eq!(users["b"], set(&["hi"]));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let left: UserTokens = [("a".to_string(), set(&["x", "y"]))].into();
        let right: UserTokens = [
            ("a".to_string(), set(&["y", "z"])),
            ("b".to_string(), set(&["x"])),
        ]
        .into();

        let ab = merge_user_tokens(left.clone(), right.clone());
        let ba = merge_user_tokens(right, left);
        assert_eq!(ab, ba);
        assert_eq!(ab["a"], set(&["x", "y", "z"]));
    }
}
