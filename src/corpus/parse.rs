// Tweet record parsing.
//
// The stream is newline-delimited JSON straight from the Twitter streaming
// API. Besides tweets it carries broken lines (truncated writes) and control
// messages such as `{"limit": {"track": 42}}`. Only records with a string
// `text` and a `user.id_str` are kept; everything else is skipped silently
// and tallied by the caller.

use serde::{Deserialize, Serialize};

/// A single post reduced to what the ranking pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub user_id: String,
    pub text: String,
}

impl Document {
    pub fn new(user_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            text: text.into(),
        }
    }
}

/// The subset of a tweet object we read. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawTweet {
    text: Option<String>,
    user: Option<RawUser>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    id_str: Option<String>,
}

/// Parse one raw line into a document, or `None` if it isn't a usable tweet.
pub fn parse_post(line: &str) -> Option<Document> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let raw: RawTweet = serde_json::from_str(line).ok()?;
    let text = raw.text?;
    let user_id = raw.user?.id_str?;

    Some(Document { user_id, text })
}
