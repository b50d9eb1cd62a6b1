//! Fixture builders for posts, authors, and settings snapshots.

use chrono::{DateTime, Duration, Utc};
use postwall_types::{
    Author, AuthorId, GridParams, LayoutParams, LayoutSection, NavigationMode, Post, PostId,
    Settings,
};

/// Fixed reference clock for deterministic date-formatting tests.
pub fn reference_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-12T12:00:00Z")
        .expect("valid reference timestamp")
        .with_timezone(&Utc)
}

/// RFC 3339 timestamp `days` whole days before `now`.
pub fn days_before(now: DateTime<Utc>, days: i64) -> String {
    (now - Duration::days(days)).to_rfc3339()
}

/// A post with the given id, caption, and wire date; counters and
/// permalink are filled with plausible defaults.
pub fn post(id: &str, caption: &str, date: &str) -> Post {
    Post {
        id: PostId::from(id),
        caption: caption.to_string(),
        date: date.to_string(),
        likes: 12,
        comments: 3,
        perma_link: format!("https://example.com/p/{}", id),
        user_id: AuthorId::from(format!("u-{}", id).as_str()),
    }
}

/// An author linked to a post through `post_id`.
pub fn author(id: &str, username: &str, post_id: &str) -> Author {
    Author {
        id: AuthorId::from(id),
        username: username.to_string(),
        post_id: PostId::from(post_id),
    }
}

/// Settings with `current` set verbatim (including invalid values,
/// for mode-validation tests) over a 3-column grid / 2-column masonry
/// parameter set.
pub fn settings_with_mode(current: &str) -> Settings {
    Settings {
        layout: LayoutSection {
            current: current.to_string(),
            params: LayoutParams {
                grid: GridParams {
                    columns: 3,
                    rows: 2,
                },
                masonry: GridParams {
                    columns: 2,
                    rows: 3,
                },
            },
        },
        template: "classic".to_string(),
        navigation: NavigationMode::LoadMore,
    }
}

/// Valid grid-mode settings with the given column count.
pub fn grid_settings(columns: u32) -> Settings {
    let mut settings = settings_with_mode("grid");
    settings.layout.params.grid.columns = columns;
    settings
}

/// Valid masonry-mode settings with the given column count.
pub fn masonry_settings(columns: u32) -> Settings {
    let mut settings = settings_with_mode("masonry");
    settings.layout.params.masonry.columns = columns;
    settings
}
