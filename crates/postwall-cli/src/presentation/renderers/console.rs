use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::presentation::formatters::card::{CARD_LINES, card_lines};
use crate::presentation::view_models::{FeedViewModel, SettingsViewModel};

const COLUMN_GUTTER: usize = 3;
const MIN_CARD_WIDTH: usize = 24;
const FALLBACK_TERM_WIDTH: usize = 100;

/// Render the card wall row-major into the resolved column count.
///
/// Masonry's `dense` auto-flow is carried in the style but has no
/// terminal equivalent; both modes pack identically here.
pub fn render_feed(feed: &FeedViewModel) {
    if feed.cards.is_empty() {
        println!("No posts to display.");
        println!("\nIs the backend running? Check the connection with:");
        println!("  postwall settings show");
        return;
    }

    if feed.style.is_empty() {
        println!(
            "{}",
            "Settings not loaded; rendering a single column.".dimmed()
        );
        println!();
    }

    let columns = feed.columns.max(1);
    let width = card_width(columns);

    for row in feed.cards.chunks(columns) {
        let blocks: Vec<Vec<String>> = row.iter().map(|card| card_lines(card, width)).collect();
        let gutter = " ".repeat(COLUMN_GUTTER);

        for line_idx in 0..CARD_LINES {
            let line = blocks
                .iter()
                .map(|block| block[line_idx].as_str())
                .collect::<Vec<_>>()
                .join(&gutter);

            match line_idx {
                0 => println!("{}", line.bold()),
                1 => println!("{}", line.dimmed()),
                _ => println!("{}", line),
            }
        }
        println!();
    }
}

pub fn render_settings(view: &SettingsViewModel) {
    println!(
        "Layout:     {} ({} columns, {} rows)",
        view.mode.bold(),
        view.columns,
        view.rows
    );
    println!("Template:   {}", view.template);
    println!("Navigation: {}", view.navigation);
    println!();

    println!("Resolved style:");
    if let Some(display) = &view.style.display {
        println!("  display:        {}", display);
    }
    if let Some(template) = &view.style.column_template {
        println!("  columnTemplate: {}", template);
    }
    if let Some(gap) = &view.style.gap {
        println!("  gap:            {}", gap);
    }
    if let Some(flow) = &view.style.auto_flow {
        println!("  autoFlow:       {}", flow);
    }
}

fn card_width(columns: usize) -> usize {
    let total = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(FALLBACK_TERM_WIDTH);
    let gutters = COLUMN_GUTTER * columns.saturating_sub(1);
    (total.saturating_sub(gutters) / columns).max(MIN_CARD_WIDTH)
}
