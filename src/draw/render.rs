//! Cairo/Pango drawing primitives shared by the picker UI.

use std::f64::consts::PI;

use super::color::Color;
use super::font::FontDescriptor;

/// Pixel size of one rem, matching the browser default.
pub const REM_PX: f64 = 16.0;

/// Fills the whole surface with a solid color.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    color.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint just leaves the old pixels
}

/// Adds a rounded rectangle path to the context without filling it.
pub fn rounded_rect_path(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, radius: f64) {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.new_sub_path();
    ctx.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    ctx.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    ctx.arc(x + r, y + h - r, r, PI / 2.0, PI);
    ctx.arc(x + r, y + r, r, PI, 1.5 * PI);
    ctx.close_path();
}

/// Fills a rounded rectangle, optionally stroking a border around it.
#[allow(clippy::too_many_arguments)]
pub fn render_panel(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
    fill: Color,
    border: Option<(Color, f64)>,
) {
    rounded_rect_path(ctx, x, y, w, h, radius);
    fill.apply(ctx);
    if let Some((border_color, width)) = border {
        let _ = ctx.fill_preserve();
        border_color.apply(ctx);
        ctx.set_line_width(width);
        let _ = ctx.stroke();
    } else {
        let _ = ctx.fill();
    }
}

/// Builds a Pango layout for `text` using the given font and size.
fn text_layout(
    ctx: &cairo::Context,
    text: &str,
    font: &FontDescriptor,
    size: f64,
) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);
    layout
}

/// Measures the logical size of `text` in pixels.
pub fn measure_text(
    ctx: &cairo::Context,
    text: &str,
    font: &FontDescriptor,
    size: f64,
) -> (f64, f64) {
    let layout = text_layout(ctx, text, font, size);
    let (_ink, logical) = layout.extents();
    (
        logical.width() as f64 / pango::SCALE as f64,
        logical.height() as f64 / pango::SCALE as f64,
    )
}

/// Draws `text` with its logical box centered on (`cx`, `cy`).
pub fn render_text_centered(
    ctx: &cairo::Context,
    cx: f64,
    cy: f64,
    text: &str,
    font: &FontDescriptor,
    size: f64,
    color: Color,
) {
    let layout = text_layout(ctx, text, font, size);
    let (_ink, logical) = layout.extents();
    let width = logical.width() as f64 / pango::SCALE as f64;
    let height = logical.height() as f64 / pango::SCALE as f64;

    ctx.save().ok();
    color.apply(ctx);
    ctx.move_to(cx - width / 2.0, cy - height / 2.0);
    pangocairo::functions::show_layout(ctx, &layout);
    ctx.restore().ok();
}

/// Draws `text` with the top-left corner of its logical box at (`x`, `y`).
pub fn render_text(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    text: &str,
    font: &FontDescriptor,
    size: f64,
    color: Color,
) {
    let layout = text_layout(ctx, text, font, size);

    ctx.save().ok();
    color.apply(ctx);
    ctx.move_to(x, y);
    pangocairo::functions::show_layout(ctx, &layout);
    ctx.restore().ok();
}

/// Text every bubble shows.
pub const BUBBLE_GLYPH: &str = "EJ";

/// Pango sizes are in points; 1 px = 0.75 pt at 96 dpi.
const PX_TO_PT: f64 = 0.75;

/// Draws one bubble: [`BUBBLE_GLYPH`] centered on (`cx`, `cy`) with an em
/// size of `size_px` pixels.
///
/// `fade` scales the glyph's opacity (1.0 = fully visible).
pub fn render_bubble(
    ctx: &cairo::Context,
    cx: f64,
    cy: f64,
    size_px: f64,
    font: &FontDescriptor,
    color: Color,
    fade: f64,
) {
    if size_px <= 0.0 || fade <= 0.0 {
        return;
    }
    let alpha = color.a * fade.clamp(0.0, 1.0);
    render_text_centered(
        ctx,
        cx,
        cy,
        BUBBLE_GLYPH,
        font,
        size_px * PX_TO_PT,
        color.with_alpha(alpha),
    );
}
