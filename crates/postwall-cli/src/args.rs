use clap::{Parser, Subcommand};

use crate::types::{LocaleArg, LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "postwall")]
#[command(about = "Render a feed backend's posts as settings-driven cards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (falls back to POSTWALL_URL, then http://localhost:4000)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Locale for relative post dates
    #[arg(long, default_value = "en", global = true)]
    pub locale: LocaleArg,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Clock override (RFC 3339) for reproducible date formatting
    #[arg(long, global = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Feed {
        #[command(subcommand)]
        command: FeedCommand,
    },

    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand)]
pub enum FeedCommand {
    /// Fetch posts, authors, and settings, and render the card wall
    Show,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Fetch display settings and the layout style they resolve to
    Show,
}
