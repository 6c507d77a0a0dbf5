//! Rendering primitives and color math (Cairo-based).
//!
//! - [`Color`]: RGBA color with hex parsing
//! - [`contrast`]: relative luminance and readable text color
//! - [`palette`]: the fixed bubble palette
//! - Cairo/Pango helpers used by the picker UI

pub mod color;
pub mod contrast;
pub mod font;
pub mod palette;
pub mod render;

// Re-export commonly used types at module level
pub use color::{BLACK, Color, ColorParseError, WHITE, normalize_hex, parse_hex};
pub use contrast::{contrast_ratio, is_light, luminance, text_color_for, text_color_rgba};
pub use font::FontDescriptor;
pub use palette::{PALETTE, palette_color};
pub use render::{
    REM_PX, fill_background, measure_text, render_bubble, render_panel, render_text,
    render_text_centered,
};
