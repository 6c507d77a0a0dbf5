use std::time::{Duration, Instant};

use bubblehue::config::UiConfig;
use bubblehue::picker::{DEFAULT_COLOR, PickerState, Theme};
use cairo::{Context, ImageSurface};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn make_picker(color: &str, theme: Theme, width: u32, height: u32) -> PickerState {
    let mut picker = PickerState::new(color, theme, SmallRng::seed_from_u64(11));
    picker.update_screen_dimensions(width, height);
    picker
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// Reads the ARGB32 pixel at (x, y) as (a, r, g, b).
fn pixel_at(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y * stride + x * 4;
    let px = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (px >> 24) as u8,
        (px >> 16) as u8,
        (px >> 8) as u8,
        px as u8,
    )
}

#[test]
fn render_picker_draws_in_both_themes() {
    let config = UiConfig::default();
    for theme in [Theme::Light, Theme::Dark] {
        let picker = make_picker(DEFAULT_COLOR, theme, 640, 480);
        let (mut surface, ctx) = surface_with_context(640, 480);
        bubblehue::ui::render_picker(&ctx, &picker, &config, 640, 480, Instant::now());
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "picker should render pixels for {:?}",
            theme
        );
    }
}

#[test]
fn background_follows_theme() {
    let config = UiConfig::default();

    let picker = make_picker(DEFAULT_COLOR, Theme::Light, 400, 400);
    let (mut light, ctx) = surface_with_context(400, 400);
    bubblehue::ui::render_picker(&ctx, &picker, &config, 400, 400, Instant::now());
    drop(ctx);

    let picker = make_picker(DEFAULT_COLOR, Theme::Dark, 400, 400);
    let (mut dark, ctx) = surface_with_context(400, 400);
    bubblehue::ui::render_picker(&ctx, &picker, &config, 400, 400, Instant::now());
    drop(ctx);

    // Top-left corner is plain background in both themes
    let (_, lr, _, _) = pixel_at(&mut light, 2, 2);
    let (_, dr, _, _) = pixel_at(&mut dark, 2, 2);
    assert!(lr > 200, "light background should be bright, got {lr}");
    assert!(dr < 60, "dark background should be dim, got {dr}");
}

#[test]
fn swatch_is_filled_with_selected_color() {
    let config = UiConfig::default();
    let picker = make_picker("#ff0000", Theme::Light, 800, 600);
    let swatch = picker.layout().swatch;

    let (mut surface, ctx) = surface_with_context(800, 600);
    bubblehue::ui::render_picker(&ctx, &picker, &config, 800, 600, Instant::now());
    drop(ctx);
    surface.flush();

    // Sample near the swatch's left edge, clear of the centered caption
    let x = (swatch.x + 16) as usize;
    let y = (swatch.y + swatch.height / 2) as usize;
    assert_eq!(pixel_at(&mut surface, x, y), (255, 255, 0, 0));
}

/// Counts pixels in the box around (`cx`, `cy`) whose RGB is within 2 of `color`.
fn pixels_near(
    surface: &mut ImageSurface,
    cx: f64,
    cy: f64,
    radius: f64,
    color: bubblehue::draw::Color,
) -> usize {
    let (w, h) = (surface.width() as f64, surface.height() as f64);
    let x0 = (cx - radius).clamp(0.0, w - 1.0) as usize;
    let x1 = (cx + radius).clamp(0.0, w - 1.0) as usize;
    let y0 = (cy - radius).clamp(0.0, h - 1.0) as usize;
    let y1 = (cy + radius).clamp(0.0, h - 1.0) as usize;
    let target = [color.r, color.g, color.b].map(|c| (c * 255.0).round() as i32);

    let mut count = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (_, r, g, b) = pixel_at(surface, x, y);
            let close = [r, g, b]
                .iter()
                .zip(target)
                .all(|(channel, want)| (*channel as i32 - want).abs() <= 2);
            if close {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn render_with_active_bubbles() {
    let config = UiConfig::default();
    let (width, height) = (1600, 1200);
    let mut picker = make_picker(DEFAULT_COLOR, Theme::Dark, width, height);
    let t0 = Instant::now();
    picker.mount(t0);
    let now = t0 + Duration::from_secs(6);
    picker.advance_bubbles(now);
    assert_eq!(picker.bubbles().len(), 3);

    let (mut surface, ctx) = surface_with_context(width as i32, height as i32);
    bubblehue::ui::render_picker(&ctx, &picker, &config, width, height, now);
    drop(ctx);
    surface.flush();

    // Each bubble's glyph is drawn in its palette color around its position;
    // widgets are painted on top, so at least one must be visible.
    let visible = picker
        .bubbles()
        .iter()
        .filter(|bubble| {
            let (cx, cy, size, fade) =
                bubblehue::ui::bubble_geometry(bubble, width as f64, height as f64, now);
            assert_eq!(fade, 1.0);
            pixels_near(&mut surface, cx, cy, size, bubble.color()) > 0
        })
        .count();
    assert!(visible > 0, "no bubble glyph found in its palette color");
    picker.unmount();
}

#[test]
fn render_survives_malformed_color_and_tiny_surface() {
    let config = UiConfig::default();
    let picker = make_picker("oops", Theme::Light, 16, 16);
    let (mut surface, ctx) = surface_with_context(16, 16);
    bubblehue::ui::render_picker(&ctx, &picker, &config, 16, 16, Instant::now());
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}
