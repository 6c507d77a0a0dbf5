//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{Color, FontDescriptor};
use crate::picker::{DEFAULT_COLOR, Theme};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Initial picker state.
///
/// Nothing is remembered between runs; these values are only the starting point.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PickerConfig {
    /// Color selected when the widget opens - a hex string like `"#ff6b6b"`
    /// or an RGB array like `[255, 107, 107]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Start in dark mode instead of light mode
    #[serde(default)]
    pub start_dark: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            start_dark: false,
        }
    }
}

impl PickerConfig {
    pub fn initial_theme(&self) -> Theme {
        Theme::from_dark_flag(self.start_dark)
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory, potential tearing)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    /// Set to false for lower latency at the cost of potential screen tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// Fonts and theme palettes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Font family name for all widget text (e.g., "Sans", "Noto Sans")
    /// Emoji in the toggle label need a font with color emoji fallback
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Title font size in points (valid range: 12.0 - 96.0)
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,

    /// Body font size in points (valid range: 8.0 - 48.0)
    #[serde(default = "default_body_font_size")]
    pub body_font_size: f64,

    /// Colors used while in light mode
    #[serde(default = "ThemeColors::light")]
    pub light: ThemeColors,

    /// Colors used while in dark mode
    #[serde(default = "ThemeColors::dark")]
    pub dark: ThemeColors,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            title_font_size: default_title_font_size(),
            body_font_size: default_body_font_size(),
            light: ThemeColors::light(),
            dark: ThemeColors::dark(),
        }
    }
}

impl UiConfig {
    /// Colors for the given theme.
    pub fn colors(&self, theme: Theme) -> &ThemeColors {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    pub fn title_font(&self) -> FontDescriptor {
        self.body_font().bold()
    }

    pub fn body_font(&self) -> FontDescriptor {
        FontDescriptor::new(self.font_family.clone(), "normal")
    }
}

/// Widget colors for one theme. Every entry is [R, G, B, A] in 0.0-1.0.
///
/// All six entries are required when a `[ui.light]` or `[ui.dark]` table is present.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ThemeColors {
    /// Page background
    pub background: [f64; 4],

    /// Title and label text
    pub text: [f64; 4],

    /// Toggle button fill
    pub button_background: [f64; 4],

    /// Toggle button label
    pub button_text: [f64; 4],

    /// Border around the swatch and the color input
    pub border: [f64; 4],

    /// Color input fill
    pub input_background: [f64; 4],
}

impl ThemeColors {
    pub fn light() -> Self {
        Self {
            background: [0.96, 0.96, 0.97, 1.0],
            text: [0.13, 0.13, 0.15, 1.0],
            button_background: [0.20, 0.20, 0.24, 1.0],
            button_text: [1.0, 1.0, 1.0, 1.0],
            border: [0.80, 0.80, 0.83, 1.0],
            input_background: [1.0, 1.0, 1.0, 1.0],
        }
    }

    pub fn dark() -> Self {
        Self {
            background: [0.11, 0.11, 0.13, 1.0],
            text: [0.93, 0.93, 0.95, 1.0],
            button_background: [0.93, 0.93, 0.95, 1.0],
            button_text: [0.11, 0.11, 0.13, 1.0],
            border: [0.30, 0.30, 0.34, 1.0],
            input_background: [0.17, 0.17, 0.20, 1.0],
        }
    }

    pub fn background(&self) -> Color {
        Color::from_array(self.background)
    }

    pub fn text(&self) -> Color {
        Color::from_array(self.text)
    }

    pub fn button_background(&self) -> Color {
        Color::from_array(self.button_background)
    }

    pub fn button_text(&self) -> Color {
        Color::from_array(self.button_text)
    }

    pub fn border(&self) -> Color {
        Color::from_array(self.border)
    }

    pub fn input_background(&self) -> Color {
        Color::from_array(self.input_background)
    }

    /// Mutable access to every channel array, paired with its key name.
    pub(super) fn entries_mut(&mut self) -> [(&'static str, &mut [f64; 4]); 6] {
        [
            ("background", &mut self.background),
            ("text", &mut self.text),
            ("button_background", &mut self.button_background),
            ("button_text", &mut self.button_text),
            ("border", &mut self.border),
            ("input_background", &mut self.input_background),
        ]
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Hex(DEFAULT_COLOR.to_string())
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_title_font_size() -> f64 {
    32.0
}

fn default_body_font_size() -> f64 {
    16.0
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}
