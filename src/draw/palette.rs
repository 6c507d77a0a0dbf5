//! Decorative bubble palette.
//!
//! Fifteen fixed colors used only to tint bubbles. They have nothing to do
//! with the user's selected color.

use super::color::Color;

/// Hex values of the bubble palette, in draw order.
pub static PALETTE: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57", "#FF9FF3", "#54A0FF", "#5F27CD",
    "#00D2D3", "#FF9F43", "#10AC84", "#EE5A24", "#0ABDE3", "#FD79A8", "#6C5CE7",
];

/// Resolves a palette entry to a [`Color`].
///
/// Entries are compile-time constants, so a parse failure falls back to white.
pub fn palette_color(index: usize) -> Color {
    PALETTE
        .get(index)
        .and_then(|hex| Color::from_hex(hex).ok())
        .unwrap_or(super::color::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::parse_hex;

    #[test]
    fn palette_entries_are_valid_and_distinct() {
        for hex in PALETTE {
            assert!(parse_hex(hex).is_ok(), "{hex} should parse");
        }
        let mut sorted: Vec<_> = PALETTE.iter().map(|h| h.to_lowercase()).collect();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), PALETTE.len());
    }

    #[test]
    fn out_of_range_index_falls_back() {
        assert_eq!(palette_color(PALETTE.len()), super::super::color::WHITE);
        assert_eq!(palette_color(0).to_hex(), "#ff6b6b");
    }
}
