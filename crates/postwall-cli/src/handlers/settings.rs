use anyhow::{Context, Result};
use postwall_client::ApiClient;

use crate::presentation::renderers::console;
use crate::presentation::view_models::SettingsViewModel;
use crate::types::OutputFormat;

/// Unlike the feed wall, an explicit settings request fails loudly
/// when the backend is unreachable - there is nothing useful to show.
pub async fn show(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let settings = client
        .fetch_settings()
        .await
        .with_context(|| format!("Failed to fetch settings from {}", client.base_url()))?;
    let view = SettingsViewModel::build(&settings)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Plain => console::render_settings(&view),
    }
    Ok(())
}
