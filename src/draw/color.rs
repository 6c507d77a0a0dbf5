//! RGBA color type and hex string conversion.

use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use bubblehue::draw::Color;
/// let teal = Color::from_hex("#4ECDC4").unwrap();
/// assert_eq!(teal.to_hex(), "#4ecdc4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Reasons a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color string is empty")]
    Empty,
    #[error("expected 3 or 6 hex digits, found {0}")]
    BadLength(usize),
    #[error("invalid hex digit '{0}'")]
    BadDigit(char),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Builds a color from a `[r, g, b, a]` config array.
    pub fn from_array(rgba: [f64; 4]) -> Self {
        let [r, g, b, a] = rgba;
        Self { r, g, b, a }
    }

    /// Parses `#rgb` / `#rrggbb` (the `#` is optional).
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let [r, g, b] = parse_hex(value)?;
        Ok(Self::from_rgb8(r, g, b))
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Lowercase `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    /// Sets this color as the Cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

/// Parses a hex color into 8-bit channels.
///
/// Accepts 3-digit shorthand (`#fff`) and the full 6-digit form, with or
/// without the leading `#`. Surrounding whitespace is ignored.
pub fn parse_hex(value: &str) -> Result<[u8; 3], ColorParseError> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let mut nibbles = Vec::with_capacity(6);
    for ch in digits.chars() {
        let nibble = ch.to_digit(16).ok_or(ColorParseError::BadDigit(ch))?;
        nibbles.push(nibble as u8);
    }

    match nibbles.len() {
        3 => Ok([
            nibbles[0] * 17,
            nibbles[1] * 17,
            nibbles[2] * 17,
        ]),
        6 => Ok([
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        ]),
        n => Err(ColorParseError::BadLength(n)),
    }
}

/// Parses and re-emits a hex color as lowercase `#rrggbb`.
pub fn normalize_hex(value: &str) -> Result<String, ColorParseError> {
    let [r, g, b] = parse_hex(value)?;
    Ok(format!("#{r:02x}{g:02x}{b:02x}"))
}

/// Opaque black, the text color for light backgrounds.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Opaque white, the text color for dark backgrounds.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_forms() {
        assert_eq!(parse_hex("#ff8000"), Ok([255, 128, 0]));
        assert_eq!(parse_hex("FF8000"), Ok([255, 128, 0]));
        assert_eq!(parse_hex("#fff"), Ok([255, 255, 255]));
        assert_eq!(parse_hex("  #0a0b0c "), Ok([10, 11, 12]));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(parse_hex(""), Err(ColorParseError::Empty));
        assert_eq!(parse_hex("#"), Err(ColorParseError::Empty));
        assert_eq!(parse_hex("#ffff"), Err(ColorParseError::BadLength(4)));
        assert_eq!(parse_hex("#gg0000"), Err(ColorParseError::BadDigit('g')));
    }

    #[test]
    fn normalize_lowercases_and_expands() {
        assert_eq!(normalize_hex("#ABC").unwrap(), "#aabbcc");
        assert_eq!(normalize_hex("5F27CD").unwrap(), "#5f27cd");
    }

    #[test]
    fn hex_conversion_is_stable() {
        let color = Color::from_hex("#10ac84").unwrap();
        assert_eq!(color.to_hex(), "#10ac84");
        assert_eq!(color.a, 1.0);
        assert_eq!(WHITE.to_hex(), "#ffffff");
        assert_eq!(BLACK.with_alpha(0.5).to_hex(), "#000000");
    }
}
