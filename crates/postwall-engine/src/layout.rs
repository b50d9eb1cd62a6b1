use postwall_types::{GridParams, LayoutMode, Settings};
use serde::Serialize;

use crate::error::{Error, Result};

/// Derived container style for the card wall. Serializes to the
/// CSS-shaped keys the backend's web client consumes; unset fields
/// are omitted so the neutral style encodes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_flow: Option<String>,
}

impl LayoutStyle {
    /// Neutral style used while settings have not loaded yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_none()
            && self.column_template.is_none()
            && self.gap.is_none()
            && self.auto_flow.is_none()
    }
}

/// Validate the current mode and return it with its parameter set.
///
/// This is the single place the `columns > 0` invariant is checked;
/// `rows` is accepted but not inspected.
pub fn active_params(settings: &Settings) -> Result<(LayoutMode, &GridParams)> {
    let mode = settings.mode()?;
    let params = settings.params_for(mode);
    if params.columns == 0 {
        return Err(Error::InvalidColumnCount(params.columns));
    }
    Ok((mode, params))
}

/// Derive the container style from the settings snapshot.
///
/// `None` means settings have not loaded yet, an expected transient
/// state during initial fetch; it yields the neutral style rather
/// than an error. Unknown modes fail with `InvalidLayoutMode` - there
/// is deliberately no fallback mode.
pub fn resolve_layout(settings: Option<&Settings>) -> Result<LayoutStyle> {
    let Some(settings) = settings else {
        return Ok(LayoutStyle::empty());
    };

    let (mode, params) = active_params(settings)?;
    let auto_flow = match mode {
        LayoutMode::Grid => None,
        LayoutMode::Masonry => Some("dense".to_string()),
    };

    Ok(LayoutStyle {
        display: Some("grid".to_string()),
        column_template: Some(format!("repeat({}, 1fr)", params.columns)),
        gap: Some("1rem".to_string()),
        auto_flow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use postwall_types::{LayoutParams, LayoutSection, NavigationMode};

    fn settings(current: &str, grid_columns: u32, masonry_columns: u32) -> Settings {
        Settings {
            layout: LayoutSection {
                current: current.to_string(),
                params: LayoutParams {
                    grid: GridParams {
                        columns: grid_columns,
                        rows: 2,
                    },
                    masonry: GridParams {
                        columns: masonry_columns,
                        rows: 3,
                    },
                },
            },
            template: "classic".to_string(),
            navigation: NavigationMode::LoadMore,
        }
    }

    #[test]
    fn test_grid_style() {
        let style = resolve_layout(Some(&settings("grid", 3, 2))).unwrap();

        assert_eq!(style.display.as_deref(), Some("grid"));
        assert_eq!(style.column_template.as_deref(), Some("repeat(3, 1fr)"));
        assert_eq!(style.gap.as_deref(), Some("1rem"));
        assert_eq!(style.auto_flow, None);
    }

    #[test]
    fn test_masonry_style_adds_dense_auto_flow() {
        let style = resolve_layout(Some(&settings("masonry", 3, 2))).unwrap();

        assert_eq!(style.column_template.as_deref(), Some("repeat(2, 1fr)"));
        assert_eq!(style.auto_flow.as_deref(), Some("dense"));
    }

    #[test]
    fn test_unknown_mode_fails_instead_of_falling_back() {
        let err = resolve_layout(Some(&settings("carousel", 3, 2))).unwrap_err();
        assert_eq!(err, Error::InvalidLayoutMode("carousel".to_string()));
    }

    #[test]
    fn test_missing_settings_yields_neutral_style() {
        let style = resolve_layout(None).unwrap();
        assert!(style.is_empty());
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = resolve_layout(Some(&settings("grid", 0, 2))).unwrap_err();
        assert_eq!(err, Error::InvalidColumnCount(0));

        // The inactive parameter set is not validated.
        assert!(resolve_layout(Some(&settings("masonry", 0, 2))).is_ok());
    }

    #[test]
    fn test_single_column_template() {
        let style = resolve_layout(Some(&settings("grid", 1, 2))).unwrap();
        assert_eq!(style.column_template.as_deref(), Some("repeat(1, 1fr)"));
    }

    #[test]
    fn test_neutral_style_serializes_to_empty_object() {
        let style = LayoutStyle::empty();
        assert_eq!(serde_json::to_string(&style).unwrap(), "{}");
    }

    #[test]
    fn test_style_serializes_camel_case_keys() {
        let style = resolve_layout(Some(&settings("masonry", 3, 2))).unwrap();
        let encoded = serde_json::to_value(&style).unwrap();

        assert_eq!(encoded["columnTemplate"], "repeat(2, 1fr)");
        assert_eq!(encoded["autoFlow"], "dense");
    }
}
