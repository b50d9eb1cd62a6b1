use chrono::{DateTime, Utc};
use postwall_client::FeedSnapshot;
use postwall_engine::{
    LayoutStyle, Locale, active_params, format_post_date, resolve_author, resolve_layout,
};
use serde::Serialize;

/// Display-ready card: every field is a finished string or count,
/// assembled once per post through the presentation core.
#[derive(Debug, Clone, Serialize)]
pub struct PostCardViewModel {
    pub caption: String,
    pub date: String,
    pub author: Option<String>,
    pub likes: u64,
    pub comments: u64,
    pub perma_link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedViewModel {
    pub style: LayoutStyle,
    /// Active column count for the console wall; 1 while settings
    /// have not loaded.
    pub columns: usize,
    pub cards: Vec<PostCardViewModel>,
}

impl FeedViewModel {
    pub fn build(
        snapshot: &FeedSnapshot,
        locale: Locale,
        now: DateTime<Utc>,
    ) -> postwall_engine::Result<Self> {
        let style = resolve_layout(snapshot.settings.as_ref())?;
        let columns = match snapshot.settings.as_ref() {
            Some(settings) => active_params(settings)?.1.columns as usize,
            None => 1,
        };

        let cards = snapshot
            .posts
            .iter()
            .map(|post| {
                Ok(PostCardViewModel {
                    caption: post.caption.clone(),
                    date: format_post_date(&post.date, now, locale)?,
                    author: resolve_author(&snapshot.authors, &post.id).map(str::to_string),
                    likes: post.likes,
                    comments: post.comments,
                    perma_link: post.perma_link.clone(),
                })
            })
            .collect::<postwall_engine::Result<Vec<_>>>()?;

        Ok(Self {
            style,
            columns,
            cards,
        })
    }
}
