use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Card arrangement strategy. Closed set: wire values outside it are
/// rejected at resolution time, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Grid,
    Masonry,
}

impl FromStr for LayoutMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grid" => Ok(LayoutMode::Grid),
            "masonry" => Ok(LayoutMode::Masonry),
            other => Err(Error::InvalidLayoutMode(other.to_string())),
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Grid => write!(f, "grid"),
            LayoutMode::Masonry => write!(f, "masonry"),
        }
    }
}

/// Per-mode dimensions. `rows` is carried for forward compatibility
/// but takes no part in style computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridParams {
    pub columns: u32,
    pub rows: u32,
}

/// Parameter sets for both known modes; only the one matching
/// [`LayoutSection::current`] is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub grid: GridParams,
    pub masonry: GridParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSection {
    /// Raw mode string as fetched. Validated through
    /// [`LayoutMode::from_str`] so unrecognized values fail loudly.
    pub current: String,
    pub params: LayoutParams,
}

/// Navigation strategy advertised by the backend. Modeled for wire
/// fidelity; nothing consumes it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    #[serde(rename = "load-more")]
    LoadMore,
    #[serde(rename = "pagination")]
    Pagination,
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationMode::LoadMore => write!(f, "load-more"),
            NavigationMode::Pagination => write!(f, "pagination"),
        }
    }
}

/// Display settings snapshot from `GET /settings`. Updates replace
/// the whole value; fields are never patched individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub layout: LayoutSection,
    pub template: String,
    pub navigation: NavigationMode,
}

impl Settings {
    /// Validate and return the current layout mode.
    pub fn mode(&self) -> Result<LayoutMode> {
        self.layout.current.parse()
    }

    /// Parameter set for the given mode.
    pub fn params_for(&self, mode: LayoutMode) -> &GridParams {
        match mode {
            LayoutMode::Grid => &self.layout.params.grid,
            LayoutMode::Masonry => &self.layout.params.masonry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_round_trip() {
        assert_eq!("grid".parse::<LayoutMode>().unwrap(), LayoutMode::Grid);
        assert_eq!(
            "masonry".parse::<LayoutMode>().unwrap(),
            LayoutMode::Masonry
        );
        assert_eq!(LayoutMode::Grid.to_string(), "grid");
        assert_eq!(LayoutMode::Masonry.to_string(), "masonry");
    }

    #[test]
    fn test_layout_mode_rejects_unknown() {
        let err = "carousel".parse::<LayoutMode>().unwrap_err();
        assert_eq!(err, Error::InvalidLayoutMode("carousel".to_string()));
        assert!(err.to_string().contains("carousel"));
    }
}
