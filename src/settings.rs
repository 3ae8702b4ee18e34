//! Player settings and per-day difficulty modifiers.

use serde::{Deserialize, Serialize};

/// Visual theme; only used to pick the neutral square glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Persisted global settings. Read-only inputs to the core; the core only
/// ever writes the per-day [`DayModifiers`] overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsData {
    /// Days to play ahead, 0..=7.
    pub shift_day_count: u8,
    /// Default for the hide-image modifier on new days.
    pub no_image_mode: bool,
    /// Default for the rotation modifier on new days.
    pub rotation_mode: bool,
    pub theme: Theme,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            shift_day_count: 0,
            no_image_mode: false,
            rotation_mode: false,
            theme: Theme::Light,
        }
    }
}

/// Difficulty modifiers scoped to one day key. They decorate presentation
/// and the share title; scoring never reads them. Each new day key starts
/// from the global settings and can then be overridden independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayModifiers {
    pub hide_image: bool,
    pub rotate: bool,
}

impl DayModifiers {
    #[must_use]
    pub const fn from_settings(settings: &SettingsData) -> Self {
        Self {
            hide_image: settings.no_image_mode,
            rotate: settings.rotation_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_default_from_settings() {
        let settings = SettingsData {
            no_image_mode: true,
            ..SettingsData::default()
        };
        let modifiers = DayModifiers::from_settings(&settings);
        assert!(modifiers.hide_image);
        assert!(!modifiers.rotate);
    }

    #[test]
    fn settings_parse_with_camel_case_fields() {
        let settings: SettingsData =
            serde_json::from_str(r#"{"shiftDayCount": 2, "theme": "dark"}"#).unwrap();
        assert_eq!(settings.shift_day_count, 2);
        assert_eq!(settings.theme, Theme::Dark);
        assert!(!settings.no_image_mode);
    }
}
