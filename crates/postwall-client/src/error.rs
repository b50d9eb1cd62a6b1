use std::fmt;

/// Result type for postwall-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the fetch layer
#[derive(Debug)]
pub enum Error {
    /// Request failed, returned a non-success status, or the body
    /// failed to decode
    Http(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
