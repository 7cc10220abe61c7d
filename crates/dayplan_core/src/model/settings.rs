//! Accessibility settings record.
//!
//! # Responsibility
//! - Define the singleton settings shape and its defaults.
//! - Implement partial-merge semantics for settings updates.
//!
//! # Invariants
//! - `base_font_size` always stays within [`FONT_SIZE_MIN`, `FONT_SIZE_MAX`].
//! - Merging an update never changes fields the update does not name.

use serde::{Deserialize, Serialize};

/// Smallest accepted root font size, in pixels.
pub const FONT_SIZE_MIN: u8 = 18;
/// Largest accepted root font size, in pixels.
pub const FONT_SIZE_MAX: u8 = 28;

/// Color scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Singleton accessibility configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Root font size in pixels, clamped to [18, 28].
    pub base_font_size: u8,
    pub high_contrast: bool,
    pub dyslexia_friendly: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_font_size: FONT_SIZE_MIN,
            high_contrast: false,
            dyslexia_friendly: false,
            theme: Theme::Dark,
        }
    }
}

impl Settings {
    /// Merges every present update field into this record.
    ///
    /// Font size is clamped into the supported range instead of rejected, so
    /// a slightly out-of-range caller value degrades to the nearest bound.
    pub fn merge(&mut self, update: &SettingsUpdate) {
        if let Some(size) = update.base_font_size {
            self.base_font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        }
        if let Some(high_contrast) = update.high_contrast {
            self.high_contrast = high_contrast;
        }
        if let Some(dyslexia_friendly) = update.dyslexia_friendly {
            self.dyslexia_friendly = dyslexia_friendly;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
    }
}

/// Field-wise partial update. `None` means "leave as is".
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsUpdate {
    pub base_font_size: Option<u8>,
    pub high_contrast: Option<bool>,
    pub dyslexia_friendly: Option<bool>,
    pub theme: Option<Theme>,
}

#[cfg(test)]
mod tests {
    use super::{Settings, SettingsUpdate, Theme, FONT_SIZE_MAX, FONT_SIZE_MIN};

    #[test]
    fn defaults_match_first_run_expectations() {
        let settings = Settings::default();
        assert_eq!(settings.base_font_size, 18);
        assert!(!settings.high_contrast);
        assert!(!settings.dyslexia_friendly);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn merge_keeps_unnamed_fields() {
        let mut settings = Settings {
            high_contrast: true,
            theme: Theme::Light,
            ..Settings::default()
        };

        settings.merge(&SettingsUpdate {
            base_font_size: Some(22),
            ..SettingsUpdate::default()
        });

        assert_eq!(settings.base_font_size, 22);
        assert!(settings.high_contrast);
        assert!(!settings.dyslexia_friendly);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn merge_clamps_font_size_to_supported_range() {
        let mut settings = Settings::default();

        settings.merge(&SettingsUpdate {
            base_font_size: Some(40),
            ..SettingsUpdate::default()
        });
        assert_eq!(settings.base_font_size, FONT_SIZE_MAX);

        settings.merge(&SettingsUpdate {
            base_font_size: Some(10),
            ..SettingsUpdate::default()
        });
        assert_eq!(settings.base_font_size, FONT_SIZE_MIN);
    }

    #[test]
    fn snapshot_field_names_stay_camel_case() {
        let blob = serde_json::to_string(&Settings::default()).unwrap();
        assert!(blob.contains("\"baseFontSize\":18"));
        assert!(blob.contains("\"dyslexiaFriendly\":false"));
        assert!(blob.contains("\"theme\":\"dark\""));
    }
}
