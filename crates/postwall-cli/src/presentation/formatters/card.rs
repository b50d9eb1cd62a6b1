use super::number::format_compact;
use crate::presentation::view_models::PostCardViewModel;

/// Fixed line count per rendered card so rows of cards stay aligned.
pub const CARD_LINES: usize = 5;

/// Render a card as exactly [`CARD_LINES`] lines of exactly `width`
/// characters: caption, date, counters, author, permalink.
pub fn card_lines(card: &PostCardViewModel, width: usize) -> Vec<String> {
    let counts = format!(
        "Likes: {}   Comments: {}",
        format_compact(card.likes),
        format_compact(card.comments)
    );
    let author = match &card.author {
        Some(name) => format!("Author: {}", name),
        None => "Author: -".to_string(),
    };

    vec![
        fit(&card.caption, width),
        fit(&card.date, width),
        fit(&counts, width),
        fit(&author, width),
        fit(&card.perma_link, width),
    ]
}

/// Truncate to `width` chars (ellipsis-terminated) or pad to exactly
/// `width` so columns line up.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return format!("{:<width$}", text, width = width);
    }
    let truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", truncated)
}
