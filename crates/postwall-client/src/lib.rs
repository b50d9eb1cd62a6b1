mod client;
mod config;
mod error;
mod snapshot;

pub use client::ApiClient;
pub use config::{BASE_URL_ENV, DEFAULT_BASE_URL, resolve_base_url};
pub use error::{Error, Result};
pub use snapshot::FeedSnapshot;
