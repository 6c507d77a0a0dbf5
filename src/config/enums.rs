//! Configuration enum types.

use crate::draw::normalize_hex;
use crate::picker::DEFAULT_COLOR;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a hex string or RGB values.
///
/// # Examples
/// ```toml
/// # Hex color (#rgb or #rrggbb, the '#' is optional)
/// default_color = "#4ecdc4"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex color such as "#ff6b6b" or "fc0"
    Hex(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a normalized `#rrggbb` string.
    ///
    /// Unparseable hex strings fall back to white with a warning.
    pub fn to_hex(&self) -> String {
        match self {
            ColorSpec::Hex(value) => normalize_hex(value).unwrap_or_else(|err| {
                warn!(
                    "Invalid default_color '{}' ({}), using {}",
                    value, err, DEFAULT_COLOR
                );
                DEFAULT_COLOR.to_string()
            }),
            ColorSpec::Rgb([r, g, b]) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_spec_is_normalized() {
        assert_eq!(ColorSpec::Hex("FC0".into()).to_hex(), "#ffcc00");
        assert_eq!(ColorSpec::Hex("#4ECDC4".into()).to_hex(), "#4ecdc4");
    }

    #[test]
    fn rgb_spec_formats_lowercase() {
        assert_eq!(ColorSpec::Rgb([255, 128, 0]).to_hex(), "#ff8000");
    }

    #[test]
    fn bad_hex_falls_back_to_white() {
        assert_eq!(ColorSpec::Hex("purple".into()).to_hex(), "#ffffff");
    }
}
