use postwall_engine::{LayoutStyle, active_params, resolve_layout};
use postwall_types::Settings;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SettingsViewModel {
    pub mode: String,
    pub columns: u32,
    pub rows: u32,
    pub template: String,
    pub navigation: String,
    pub style: LayoutStyle,
}

impl SettingsViewModel {
    pub fn build(settings: &Settings) -> postwall_engine::Result<Self> {
        let (mode, params) = active_params(settings)?;
        let style = resolve_layout(Some(settings))?;

        Ok(Self {
            mode: mode.to_string(),
            columns: params.columns,
            rows: params.rows,
            template: settings.template.clone(),
            navigation: settings.navigation.to_string(),
            style,
        })
    }
}
