use std::fmt;

/// Result type for postwall-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the presentation core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Layout mode string outside the closed {grid, masonry} set
    InvalidLayoutMode(String),

    /// Post date failed to parse as an ISO-8601 timestamp
    InvalidDateFormat(String),

    /// Active layout declares a non-positive column count
    InvalidColumnCount(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLayoutMode(mode) => write!(f, "Unknown layout mode: {}", mode),
            Error::InvalidDateFormat(raw) => write!(f, "Unparseable post date: {}", raw),
            Error::InvalidColumnCount(count) => {
                write!(f, "Layout column count must be positive (got {})", count)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<postwall_types::Error> for Error {
    fn from(err: postwall_types::Error) -> Self {
        match err {
            postwall_types::Error::InvalidLayoutMode(mode) => Error::InvalidLayoutMode(mode),
        }
    }
}
