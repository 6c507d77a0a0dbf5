//! Relative luminance and readable text color selection.
//!
//! Uses the sRGB relative-luminance definition from WCAG 2.x:
//!   L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin
//!
//! A background with `L > 0.5` gets black text, anything else gets white.

use super::color::{BLACK, Color, ColorParseError, WHITE, parse_hex};

/// Text color recommended on light backgrounds.
pub const DARK_TEXT: &str = "#000000";
/// Text color recommended on dark backgrounds.
pub const LIGHT_TEXT: &str = "#ffffff";

/// Luminance above which a background counts as light.
const LIGHT_THRESHOLD: f64 = 0.5;

/// Linearizes one gamma-encoded sRGB channel in [0, 1].
fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a [`Color`], ignoring alpha.
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Relative luminance of a `#rrggbb` color string (the `#` is optional).
///
/// Returns `NaN` unless the string is exactly six hex digits; shorthand
/// `#rgb` and surrounding whitespace are rejected. `NaN` compares false
/// against the light threshold, so malformed input is treated as dark.
pub fn luminance(hex: &str) -> f64 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let parsed = if digits.len() == 6 {
        parse_hex(digits)
    } else {
        Err(ColorParseError::BadLength(digits.chars().count()))
    };
    match parsed {
        Ok([r, g, b]) => relative_luminance(Color::from_rgb8(r, g, b)),
        Err(err) => {
            log::debug!("Luminance undefined for '{}': {}", hex, err);
            f64::NAN
        }
    }
}

/// Whether a background reads as light (`luminance > 0.5`).
pub fn is_light(hex: &str) -> bool {
    luminance(hex) > LIGHT_THRESHOLD
}

/// Readable text color for the given background, as a hex string.
pub fn text_color_for(hex: &str) -> &'static str {
    if is_light(hex) { DARK_TEXT } else { LIGHT_TEXT }
}

/// Same decision as [`text_color_for`], resolved to a [`Color`].
pub fn text_color_rgba(hex: &str) -> Color {
    if is_light(hex) { BLACK } else { WHITE }
}

/// WCAG contrast ratio between two colors, in [1, 21].
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::palette::PALETTE;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn white_and_black_are_the_extremes() {
        assert!((luminance("#ffffff") - 1.0).abs() < EPSILON);
        assert!(luminance("#000000").abs() < EPSILON);
    }

    #[test]
    fn primary_channels_use_their_weights() {
        assert!((luminance("#ff0000") - 0.2126).abs() < EPSILON);
        assert!((luminance("#00ff00") - 0.7152).abs() < EPSILON);
        assert!((luminance("#0000ff") - 0.0722).abs() < EPSILON);
    }

    #[test]
    fn threshold_sits_between_bb_and_bc_greys() {
        assert_eq!(text_color_for("#bbbbbb"), LIGHT_TEXT);
        assert_eq!(text_color_for("#bcbcbc"), DARK_TEXT);
        assert_eq!(text_color_for("#808080"), LIGHT_TEXT);
    }

    #[test]
    fn palette_classification_matches_table() {
        // (hex, luminance > 0.5)
        let expected = [
            ("#FF6B6B", false),
            ("#4ECDC4", false),
            ("#45B7D1", false),
            ("#96CEB4", true),
            ("#FECA57", true),
            ("#FF9FF3", true),
            ("#54A0FF", false),
            ("#5F27CD", false),
            ("#00D2D3", true),
            ("#FF9F43", false),
            ("#10AC84", false),
            ("#EE5A24", false),
            ("#0ABDE3", false),
            ("#FD79A8", false),
            ("#6C5CE7", false),
        ];
        assert_eq!(expected.len(), PALETTE.len());
        for ((hex, light), palette_hex) in expected.iter().zip(PALETTE) {
            assert_eq!(*hex, palette_hex);
            assert_eq!(is_light(hex), *light, "classification of {hex}");
            let text = if *light { DARK_TEXT } else { LIGHT_TEXT };
            assert_eq!(text_color_for(hex), text, "text color for {hex}");
        }
    }

    #[test]
    fn malformed_input_is_treated_as_dark() {
        assert!(luminance("not a color").is_nan());
        assert!(luminance("#12345").is_nan());
        assert_eq!(text_color_rgba("#zzzzzz"), WHITE);
    }

    #[test]
    fn only_six_digit_colors_have_luminance() {
        assert!((luminance("ffffff") - 1.0).abs() < EPSILON);
        assert!(luminance("#fff").is_nan());
        assert!(luminance(" #ffffff").is_nan());
        assert!(luminance("#ffffff ").is_nan());
        assert!(luminance("##ffffff").is_nan());
        assert_eq!(text_color_for("#fff"), LIGHT_TEXT);
        assert_eq!(text_color_for(""), LIGHT_TEXT);
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let ratio = contrast_ratio(BLACK, WHITE);
        assert!((ratio - 21.0).abs() < 1e-6);
        assert!((contrast_ratio(WHITE, BLACK) - ratio).abs() < EPSILON);
        assert!((contrast_ratio(WHITE, WHITE) - 1.0).abs() < EPSILON);
    }
}
