//! End-to-end checks of the presentation core over shared fixtures:
//! a post plus its author collection and settings snapshot map to a
//! display-ready (author, date, style) triple.

use postwall_engine::{Locale, format_post_date, resolve_author, resolve_layout};
use postwall_testing as fixtures;
use postwall_types::PostId;

#[test]
fn test_grid_settings_resolve_end_to_end() {
    let settings = fixtures::grid_settings(3);
    let style = resolve_layout(Some(&settings)).unwrap();

    assert_eq!(style.display.as_deref(), Some("grid"));
    assert_eq!(style.column_template.as_deref(), Some("repeat(3, 1fr)"));
    assert_eq!(style.gap.as_deref(), Some("1rem"));
    assert_eq!(style.auto_flow, None);
}

#[test]
fn test_author_resolution_end_to_end() {
    let authors = vec![fixtures::author("a1", "nina", "p1")];

    assert_eq!(resolve_author(&authors, &PostId::from("p1")), Some("nina"));
    assert_eq!(resolve_author(&authors, &PostId::from("p2")), None);
}

#[test]
fn test_recent_post_formats_relative_old_post_absolute() {
    let now = fixtures::reference_now();

    let recent = fixtures::post("p1", "Sunrise", &fixtures::days_before(now, 6));
    let old = fixtures::post("p2", "Archive", &fixtures::days_before(now, 7));

    assert_eq!(
        format_post_date(&recent.date, now, Locale::En).unwrap(),
        "6 days ago"
    );
    assert_eq!(
        format_post_date(&old.date, now, Locale::En).unwrap(),
        "05/03/2024"
    );
}

#[test]
fn test_masonry_snapshot_resolves_with_dense_flow() {
    let settings = fixtures::masonry_settings(2);
    let style = resolve_layout(Some(&settings)).unwrap();

    assert_eq!(style.column_template.as_deref(), Some("repeat(2, 1fr)"));
    assert_eq!(style.auto_flow.as_deref(), Some("dense"));
}
