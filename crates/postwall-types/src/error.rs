use std::fmt;

/// Result type for postwall-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Layout mode string outside the closed {grid, masonry} set
    InvalidLayoutMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLayoutMode(mode) => write!(f, "Unknown layout mode: {}", mode),
        }
    }
}

impl std::error::Error for Error {}
