mod feed;
mod settings;

pub use feed::{FeedViewModel, PostCardViewModel};
pub use settings::SettingsViewModel;
