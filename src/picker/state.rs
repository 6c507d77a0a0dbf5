//! Picker state store and its action handlers.

use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::SmallRng;

use super::bubble::Bubble;
use super::events::{Key, MouseButton};
use super::hex_input::{HexInput, HexInputOutcome};
use super::scheduler::BubbleScheduler;
use super::theme::Theme;
use crate::draw::{self, Color};
use crate::ui::layout::{Hit, Layout};

/// Color shown before the user picks anything.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// All mutable state of one picker instance.
///
/// Owned by the host (Wayland backend or headless renderer) and mutated
/// only through the handlers below. Every handler that changes what is on
/// screen sets `needs_redraw`.
#[derive(Debug)]
pub struct PickerState {
    selected_color: String,
    theme: Theme,
    scheduler: BubbleScheduler,
    rng: SmallRng,
    /// Hex entry field standing in for a native color input
    pub hex_input: HexInput,
    /// Whether the user asked to close the widget
    pub should_exit: bool,
    /// Whether the surface needs to be repainted
    pub needs_redraw: bool,
    layout: Layout,
}

impl PickerState {
    /// Creates a picker with the given initial selection and theme.
    ///
    /// `rng` feeds bubble generation; seed it for reproducible runs.
    pub fn new(initial_color: impl Into<String>, theme: Theme, rng: SmallRng) -> Self {
        Self {
            selected_color: initial_color.into(),
            theme,
            scheduler: BubbleScheduler::new(),
            rng,
            hex_input: HexInput::new(),
            should_exit: false,
            needs_redraw: true,
            layout: Layout::compute(0, 0),
        }
    }

    // ------------------------------------------------------------------
    // Selection & theme
    // ------------------------------------------------------------------

    pub fn selected_color(&self) -> &str {
        &self.selected_color
    }

    /// Replaces the selected color. No validation is performed.
    ///
    /// Returns `false` (and requests no redraw) when the value is unchanged.
    pub fn select_color(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value == self.selected_color {
            debug!("Color {} re-selected, nothing to do", value);
            return false;
        }
        self.selected_color = value;
        self.needs_redraw = true;

        match Color::from_hex(&self.selected_color) {
            Ok(background) => {
                let text = self.text_color_rgba();
                info!(
                    "Selected {} (luminance {:.3}, {} text, contrast {:.2}:1)",
                    self.selected_color,
                    draw::luminance(&self.selected_color),
                    self.text_color(),
                    draw::contrast_ratio(background, text)
                );
            }
            Err(err) => {
                warn!(
                    "Selected color '{}' is not a hex color ({}); using white text",
                    self.selected_color, err
                );
            }
        }
        true
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flips between light and dark.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.needs_redraw = true;
        info!("Switched to {} mode", self.theme);
    }

    /// Readable text color for the selected background (`#000000` / `#ffffff`).
    pub fn text_color(&self) -> &'static str {
        draw::text_color_for(&self.selected_color)
    }

    pub fn text_color_rgba(&self) -> Color {
        draw::text_color_rgba(&self.selected_color)
    }

    // ------------------------------------------------------------------
    // Bubbles
    // ------------------------------------------------------------------

    /// Starts the bubble timers. Called once when the widget is shown.
    pub fn mount(&mut self, now: Instant) {
        self.scheduler.mount(now);
    }

    /// Stops spawning bubbles. Called when the widget is torn down.
    pub fn unmount(&mut self) {
        self.scheduler.unmount();
    }

    /// Fires due bubble timers. Returns `true` if bubbles were added or removed.
    pub fn advance_bubbles(&mut self, now: Instant) -> bool {
        let changed = self.scheduler.advance(now, &mut self.rng);
        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Next instant at which [`advance_bubbles`](Self::advance_bubbles) has work.
    pub fn next_bubble_deadline(&mut self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        self.scheduler.bubbles()
    }

    /// Whether anything on screen is animating.
    pub fn is_animating(&self) -> bool {
        self.scheduler.has_active()
    }

    // ------------------------------------------------------------------
    // Geometry & input routing
    // ------------------------------------------------------------------

    /// Updates the surface size used for layout and hit-testing.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.layout = Layout::compute(width, height);
        self.needs_redraw = true;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Routes a key press to the hex field or the global shortcuts.
    pub fn on_key_press(&mut self, key: Key) {
        if self.hex_input.is_focused() {
            let outcome = match key {
                Key::Char(c) => self.hex_input.push_char(c),
                Key::Backspace => self.hex_input.backspace(),
                Key::Return => self.hex_input.commit(),
                Key::Escape | Key::Tab => self.hex_input.cancel(),
                Key::Unknown => HexInputOutcome::Ignored,
            };
            self.apply_input_outcome(outcome);
            return;
        }

        match key {
            Key::Escape | Key::Char('q') => {
                info!("Exit requested");
                self.should_exit = true;
            }
            Key::Char('t') | Key::Char('T') => self.toggle_theme(),
            Key::Tab | Key::Char('/') => self.focus_input(),
            _ => {}
        }
    }

    /// Handles a pointer press at surface coordinates.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

        match self.layout.hit_test(x, y) {
            Hit::ToggleButton => self.toggle_theme(),
            Hit::ColorInput => {
                if !self.hex_input.is_focused() {
                    self.focus_input();
                }
            }
            Hit::Background => {
                if self.hex_input.is_focused() {
                    self.hex_input.blur();
                    self.needs_redraw = true;
                }
            }
        }
    }

    fn focus_input(&mut self) {
        self.hex_input.focus(&self.selected_color);
        self.needs_redraw = true;
        debug!("Color input focused");
    }

    fn apply_input_outcome(&mut self, outcome: HexInputOutcome) {
        match outcome {
            HexInputOutcome::Committed(hex) => {
                self.select_color(hex);
                self.needs_redraw = true;
            }
            HexInputOutcome::Rejected(err) => {
                debug!("Color input rejected: {}", err);
                self.needs_redraw = true;
            }
            HexInputOutcome::Edited | HexInputOutcome::Cancelled => {
                self.needs_redraw = true;
            }
            HexInputOutcome::Ignored => {}
        }
    }
}
