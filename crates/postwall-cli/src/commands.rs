use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use postwall_client::ApiClient;
use postwall_engine::Locale;

use crate::args::{Cli, Commands, FeedCommand, SettingsCommand};
use crate::handlers;
use crate::types::LogLevel;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let now = resolve_now(cli.now.as_deref())?;
    let locale = Locale::from(cli.locale);
    let client = ApiClient::from_env(cli.base_url.as_deref());

    let Some(command) = cli.command else {
        handlers::guidance(client.base_url());
        return Ok(());
    };

    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        Commands::Feed {
            command: FeedCommand::Show,
        } => runtime.block_on(handlers::feed::show(&client, cli.format, locale, now)),

        Commands::Settings {
            command: SettingsCommand::Show,
        } => runtime.block_on(handlers::settings::show(&client, cli.format)),
    }
}

/// The clock is an explicit input everywhere below this point; the
/// flag override exists so rendered dates are reproducible.
fn resolve_now(flag: Option<&str>) -> Result<DateTime<Utc>> {
    match flag {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid --now value: {}", raw))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
