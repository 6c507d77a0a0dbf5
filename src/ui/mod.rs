//! UI rendering: background, bubbles, toggle button, swatch and color input.

pub mod layout;

pub use layout::{Hit, Layout};

use std::time::Instant;

use crate::config::UiConfig;
use crate::draw::{self, Color, FontDescriptor};
use crate::picker::{Bubble, PickerState};
use crate::util::Rect;

// ============================================================================
// UI Style Constants (not configurable)
// ============================================================================

/// Corner radius of the toggle button (fully rounded pill)
const BUTTON_RADIUS: f64 = 22.0;
/// Corner radius of the swatch and the input field
const PANEL_RADIUS: f64 = 12.0;
/// Border width of the swatch and unfocused input
const BORDER_WIDTH: f64 = 1.5;
/// Border width of the focused input
const FOCUS_BORDER_WIDTH: f64 = 2.5;
/// Border color of an input whose last commit was rejected
const INVALID_BORDER: Color = Color {
    r: 0.90,
    g: 0.22,
    b: 0.21,
    a: 1.0,
};
/// Inner padding of the input field
const INPUT_PADDING: f64 = 8.0;
/// Fraction of a bubble's lifetime spent fading out
const BUBBLE_FADE_TAIL: f64 = 0.2;

/// Text shown on the swatch for the selected color.
pub fn swatch_caption(selected: &str) -> String {
    format!("Selected Color: {}", selected)
}

/// Renders one complete frame of the picker.
///
/// Draws, back to front: theme background, rising bubbles, toggle button,
/// title, swatch and the labelled color input. The layout is computed from
/// `width`/`height` the same way [`PickerState`] computes it for hit-testing.
pub fn render_picker(
    ctx: &cairo::Context,
    state: &PickerState,
    config: &UiConfig,
    width: u32,
    height: u32,
    now: Instant,
) {
    let layout = Layout::compute(width, height);
    let colors = config.colors(state.theme());
    let body_font = config.body_font();
    let title_font = config.title_font();

    draw::fill_background(ctx, colors.background());

    let bubble_font = body_font.bold();
    for bubble in state.bubbles() {
        render_bubble(ctx, bubble, &bubble_font, width as f64, height as f64, now);
    }

    // Toggle button
    let (bx, by, bw, bh) = layout.toggle_button.to_f64();
    draw::render_panel(
        ctx,
        bx,
        by,
        bw,
        bh,
        BUTTON_RADIUS,
        colors.button_background(),
        None,
    );
    let (bcx, bcy) = layout.toggle_button.center();
    draw::render_text_centered(
        ctx,
        bcx,
        bcy,
        state.theme().toggle_label(),
        &body_font,
        config.body_font_size,
        colors.button_text(),
    );

    // Title
    let (tcx, tcy) = layout.title.center();
    draw::render_text_centered(
        ctx,
        tcx,
        tcy,
        "Color Picker",
        &title_font,
        config.title_font_size,
        colors.text(),
    );

    // Swatch: the selected color with contrast-aware caption
    let swatch_fill = Color::from_hex(state.selected_color()).unwrap_or(colors.background());
    let (sx, sy, sw, sh) = layout.swatch.to_f64();
    draw::render_panel(
        ctx,
        sx,
        sy,
        sw,
        sh,
        PANEL_RADIUS,
        swatch_fill,
        Some((colors.border(), BORDER_WIDTH)),
    );
    let (scx, scy) = layout.swatch.center();
    draw::render_text_centered(
        ctx,
        scx,
        scy,
        &swatch_caption(state.selected_color()),
        &body_font.bold(),
        config.body_font_size * 1.25,
        state.text_color_rgba(),
    );

    // "Select a Color:" label, right-aligned against the input
    let label = "Select a Color:";
    let (label_w, label_h) = draw::measure_text(ctx, label, &body_font, config.body_font_size);
    let (lx, ly, lw, lh) = layout.label.to_f64();
    draw::render_text(
        ctx,
        lx + lw - label_w,
        ly + (lh - label_h) / 2.0,
        label,
        &body_font,
        config.body_font_size,
        colors.text(),
    );

    render_color_input(ctx, state, config, layout.color_input, swatch_fill);
}

/// Draws the hex entry field: a small preview chip followed by the value.
fn render_color_input(
    ctx: &cairo::Context,
    state: &PickerState,
    config: &UiConfig,
    rect: Rect,
    preview: Color,
) {
    let colors = config.colors(state.theme());
    let input = &state.hex_input;

    let border = if input.is_invalid() {
        (INVALID_BORDER, FOCUS_BORDER_WIDTH)
    } else if input.is_focused() {
        (colors.text(), FOCUS_BORDER_WIDTH)
    } else {
        (colors.border(), BORDER_WIDTH)
    };

    let (x, y, w, h) = rect.to_f64();
    draw::render_panel(
        ctx,
        x,
        y,
        w,
        h,
        PANEL_RADIUS / 2.0,
        colors.input_background(),
        Some(border),
    );

    let chip = h - 2.0 * INPUT_PADDING;
    draw::render_panel(
        ctx,
        x + INPUT_PADDING,
        y + INPUT_PADDING,
        chip,
        chip,
        4.0,
        preview,
        Some((colors.border(), 1.0)),
    );

    let text = if input.is_focused() {
        format!("{}|", input.buffer())
    } else {
        state.selected_color().to_string()
    };
    let font = config.body_font();
    let (_, text_h) = draw::measure_text(ctx, &text, &font, config.body_font_size);
    draw::render_text(
        ctx,
        x + 2.0 * INPUT_PADDING + chip,
        y + (h - text_h) / 2.0,
        &text,
        &font,
        config.body_font_size,
        colors.text(),
    );
}

/// Position and opacity of a bubble at `now`.
///
/// Returns `(cx, cy, size, fade)`, where `size` is the glyph's em size in
/// pixels. The bubble starts just below the bottom edge and leaves through
/// the top edge when its lifetime ends.
pub fn bubble_geometry(bubble: &Bubble, width: f64, height: f64, now: Instant) -> (f64, f64, f64, f64) {
    let progress = bubble.progress(now);
    let diameter = bubble.size_rem * draw::REM_PX;
    let cx = bubble.left_percent / 100.0 * width + diameter / 2.0;
    let travel = height + diameter;
    let cy = height + diameter / 2.0 - progress * travel;
    let fade = if progress > 1.0 - BUBBLE_FADE_TAIL {
        ((1.0 - progress) / BUBBLE_FADE_TAIL).clamp(0.0, 1.0)
    } else {
        1.0
    };
    (cx, cy, diameter, fade)
}

fn render_bubble(
    ctx: &cairo::Context,
    bubble: &Bubble,
    font: &FontDescriptor,
    width: f64,
    height: f64,
    now: Instant,
) {
    let (cx, cy, size, fade) = bubble_geometry(bubble, width, height, now);
    draw::render_bubble(ctx, cx, cy, size, font, bubble.color(), fade);
}
