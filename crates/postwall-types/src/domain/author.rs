use serde::{Deserialize, Serialize};
use std::fmt;

use super::post::PostId;

/// Author identifier as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    /// Create a new AuthorId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AuthorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AuthorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for AuthorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Author record from `GET /users`. The backend associates authors to
/// posts through `post_id`; zero or one author is expected per post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: AuthorId,
    pub username: String,
    pub post_id: PostId,
}
