use anyhow::Result;
use chrono::{DateTime, Utc};
use postwall_client::ApiClient;
use postwall_engine::Locale;

use crate::presentation::renderers::console;
use crate::presentation::view_models::FeedViewModel;
use crate::types::OutputFormat;

pub async fn show(
    client: &ApiClient,
    format: OutputFormat,
    locale: Locale,
    now: DateTime<Utc>,
) -> Result<()> {
    let snapshot = client.fetch_snapshot().await;
    let feed = FeedViewModel::build(&snapshot, locale, now)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&feed)?),
        OutputFormat::Plain => console::render_feed(&feed),
    }
    Ok(())
}
