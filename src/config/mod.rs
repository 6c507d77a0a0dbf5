//! Configuration file support for bubblehue.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/bubblehue/config.toml`. Settings include the initial color and
//! theme, fonts, per-theme colors, and performance tuning.
//!
//! The file is only ever read. If it doesn't exist, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{PerformanceConfig, PickerConfig, ThemeColors, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [picker]
/// default_color = "#4ecdc4"
/// start_dark = false
///
/// [ui]
/// font_family = "Sans"
/// title_font_size = 32.0
/// body_font_size = 16.0
///
/// [performance]
/// buffer_count = 3
/// enable_vsync = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial selection and theme
    #[serde(default)]
    pub picker: PickerConfig,

    /// Fonts and theme colors
    #[serde(default)]
    pub ui: UiConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `title_font_size`: 12.0 - 96.0
    /// - `body_font_size`: 8.0 - 48.0
    /// - theme color channels: 0.0 - 1.0
    /// - `buffer_count`: 2 - 4
    pub fn validate_and_clamp(&mut self) {
        // Title font size: 12.0 - 96.0
        if !(12.0..=96.0).contains(&self.ui.title_font_size) {
            warn!(
                "Invalid title_font_size {:.1}, clamping to 12.0-96.0 range",
                self.ui.title_font_size
            );
            self.ui.title_font_size = clamp_or(self.ui.title_font_size, 12.0, 96.0, 32.0);
        }

        // Body font size: 8.0 - 48.0
        if !(8.0..=48.0).contains(&self.ui.body_font_size) {
            warn!(
                "Invalid body_font_size {:.1}, clamping to 8.0-48.0 range",
                self.ui.body_font_size
            );
            self.ui.body_font_size = clamp_or(self.ui.body_font_size, 8.0, 48.0, 16.0);
        }

        if self.ui.font_family.trim().is_empty() {
            warn!("Empty font_family, falling back to 'Sans'");
            self.ui.font_family = "Sans".to_string();
        }

        for (theme, colors) in [("light", &mut self.ui.light), ("dark", &mut self.ui.dark)] {
            for (key, rgba) in colors.entries_mut() {
                for (i, channel) in rgba.iter_mut().enumerate() {
                    if !(0.0..=1.0).contains(&*channel) {
                        warn!(
                            "Invalid ui.{}.{}[{}] = {:.3}, clamping to 0.0-1.0",
                            theme, key, i, *channel
                        );
                        *channel = clamp_or(*channel, 0.0, 1.0, 1.0);
                    }
                }
            }
        }

        // Buffer count: 2 - 4
        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/bubblehue/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("bubblehue");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema of the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Clamps `value` into `[min, max]`, replacing NaN with `fallback`.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::Theme;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.picker.default_color.to_hex(), "#ffffff");
        assert!(!config.picker.start_dark);
        assert_eq!(config.performance.buffer_count, 3);
        assert_eq!(config.ui.font_family, "Sans");
    }

    #[test]
    fn parses_partial_file() {
        let config = Config::from_toml_str(
            r##"
            [picker]
            default_color = "#FF6B6B"
            start_dark = true

            [ui]
            title_font_size = 40.0
            "##,
        )
        .unwrap();
        assert_eq!(config.picker.default_color.to_hex(), "#ff6b6b");
        assert_eq!(config.picker.initial_theme(), Theme::Dark);
        assert_eq!(config.ui.title_font_size, 40.0);
        assert_eq!(config.ui.body_font_size, 16.0);
        assert!(config.performance.enable_vsync);
    }

    #[test]
    fn parses_rgb_color() {
        let config = Config::from_toml_str("[picker]\ndefault_color = [16, 172, 132]\n").unwrap();
        assert_eq!(config.picker.default_color, ColorSpec::Rgb([16, 172, 132]));
        assert_eq!(config.picker.default_color.to_hex(), "#10ac84");
    }

    #[test]
    fn clamps_out_of_range_values() {
        let config = Config::from_toml_str(
            r#"
            [ui]
            title_font_size = 500.0
            body_font_size = 1.0

            [performance]
            buffer_count = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.title_font_size, 96.0);
        assert_eq!(config.ui.body_font_size, 8.0);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn clamps_theme_channels() {
        let mut config = Config::default();
        config.ui.dark.background = [1.5, -0.2, 0.5, f64::NAN];
        config.validate_and_clamp();
        assert_eq!(config.ui.dark.background, [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[picker").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("picker"));
        assert!(schema.contains("performance"));
    }
}
