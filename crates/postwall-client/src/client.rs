use postwall_types::{Author, Post, Settings};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::resolve_base_url;
use crate::error::Result;
use crate::snapshot::FeedSnapshot;

/// Read-only client for the feed backend's three JSON endpoints.
///
/// No retries, no timeouts beyond reqwest defaults, no auth - the
/// backend is a plain read-only snapshot source.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Client against the resolved default backend (flag, env var,
    /// or localhost fallback).
    pub fn from_env(explicit: Option<&str>) -> Self {
        Self::new(resolve_base_url(explicit))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.get("/posts").await
    }

    /// Author records live on the backend's `/users` endpoint.
    pub async fn fetch_authors(&self) -> Result<Vec<Author>> {
        self.get("/users").await
    }

    pub async fn fetch_settings(&self) -> Result<Settings> {
        self.get("/settings").await
    }

    /// Fetch all three snapshots concurrently. The requests are
    /// independent and unordered; a failed fetch is logged and leaves
    /// its piece of the snapshot unset rather than failing the whole
    /// call.
    pub async fn fetch_snapshot(&self) -> FeedSnapshot {
        let (posts, authors, settings) = tokio::join!(
            self.fetch_posts(),
            self.fetch_authors(),
            self.fetch_settings(),
        );

        let mut snapshot = FeedSnapshot::empty();
        match posts {
            Ok(posts) => snapshot.posts = posts,
            Err(err) => warn!("Error fetching posts: {}", err),
        }
        match authors {
            Ok(authors) => snapshot.authors = authors,
            Err(err) => warn!("Error fetching users: {}", err),
        }
        match settings {
            Ok(settings) => snapshot.settings = Some(settings),
            Err(err) => warn!("Error fetching settings: {}", err),
        }
        snapshot
    }

    /// Re-fetch settings and replace the snapshot's value wholesale.
    /// On failure the previous settings stay in place (logged, like
    /// the initial fetch).
    pub async fn refresh_settings(&self, snapshot: &mut FeedSnapshot) {
        match self.fetch_settings().await {
            Ok(settings) => snapshot.replace_settings(settings),
            Err(err) => warn!("Error updating settings: {}", err),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
