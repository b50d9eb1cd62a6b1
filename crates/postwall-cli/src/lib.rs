mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, FeedCommand, SettingsCommand};
pub use commands::run;
