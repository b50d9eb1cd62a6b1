use serde::{Deserialize, Serialize};
use std::fmt;

use super::author::AuthorId;

/// Post identifier as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Create a new PostId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PostId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PostId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single feed post. Immutable snapshot once fetched; the UI never
/// writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub caption: String,
    /// ISO-8601 timestamp kept as the raw wire string; parsed by the
    /// presentation core when formatting.
    pub date: String,
    pub likes: u64,
    pub comments: u64,
    pub perma_link: String,
    /// Present on the wire but unwired: author resolution goes through
    /// [`Author::post_id`](super::Author), never this field.
    pub user_id: AuthorId,
}
