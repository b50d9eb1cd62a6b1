use postwall_types::{Author, Post, Settings};

/// The three independently fetched collections the UI renders from.
///
/// A piece that failed to fetch stays empty/`None`; consumers cannot
/// (and need not) distinguish "failed" from "not yet loaded".
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub posts: Vec<Post>,
    pub authors: Vec<Author>,
    pub settings: Option<Settings>,
}

impl FeedSnapshot {
    /// Snapshot before any fetch has completed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the settings snapshot wholesale. Settings updates are
    /// whole-value replacements, never field-level patches.
    pub fn replace_settings(&mut self, settings: Settings) {
        self.settings = Some(settings);
    }
}
