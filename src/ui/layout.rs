//! Widget geometry shared by the renderer and pointer hit-testing.

use crate::util::Rect;

// ============================================================================
// Layout Constants (not configurable)
// ============================================================================

/// Margin between the toggle button and the surface edges
const EDGE_MARGIN: i32 = 20;
/// Toggle button size
const TOGGLE_WIDTH: i32 = 170;
const TOGGLE_HEIGHT: i32 = 44;
/// Title block height
const TITLE_HEIGHT: i32 = 64;
/// Selected-color swatch size (width is capped by the surface)
const SWATCH_MAX_WIDTH: i32 = 440;
const SWATCH_HEIGHT: i32 = 120;
/// Input row: label, gap, field
const LABEL_WIDTH: i32 = 170;
const FIELD_WIDTH: i32 = 170;
const ROW_GAP: i32 = 14;
const ROW_HEIGHT: i32 = 48;
/// Vertical gaps between column blocks
const BLOCK_GAP: i32 = 28;
/// Smallest surface the layout is designed for
const MIN_WIDTH: i32 = 240;
const MIN_HEIGHT: i32 = 320;

/// Interactive region under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ToggleButton,
    ColorInput,
    Background,
}

/// Rectangles for every widget element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub toggle_button: Rect,
    pub title: Rect,
    pub swatch: Rect,
    pub label: Rect,
    pub color_input: Rect,
}

impl Layout {
    /// Computes the layout for a surface. Tiny surfaces are treated as
    /// `MIN_WIDTH x MIN_HEIGHT` so every rect stays non-degenerate.
    pub fn compute(width: u32, height: u32) -> Self {
        let width = (width.min(i32::MAX as u32) as i32).max(MIN_WIDTH);
        let height = (height.min(i32::MAX as u32) as i32).max(MIN_HEIGHT);

        let toggle_button = Rect {
            x: width - TOGGLE_WIDTH - EDGE_MARGIN,
            y: EDGE_MARGIN,
            width: TOGGLE_WIDTH,
            height: TOGGLE_HEIGHT,
        };

        let column_height = TITLE_HEIGHT + BLOCK_GAP + SWATCH_HEIGHT + BLOCK_GAP + ROW_HEIGHT;
        let below_toggle = toggle_button.y + toggle_button.height + BLOCK_GAP;
        let top = ((height - column_height) / 2).max(below_toggle);
        let cx = width / 2;

        let swatch_width = SWATCH_MAX_WIDTH.min(width - 2 * EDGE_MARGIN);
        let title = Rect {
            x: cx - swatch_width / 2,
            y: top,
            width: swatch_width,
            height: TITLE_HEIGHT,
        };
        let swatch = Rect {
            x: cx - swatch_width / 2,
            y: title.y + TITLE_HEIGHT + BLOCK_GAP,
            width: swatch_width,
            height: SWATCH_HEIGHT,
        };

        let row_y = swatch.y + SWATCH_HEIGHT + BLOCK_GAP;
        let row_width = LABEL_WIDTH + ROW_GAP + FIELD_WIDTH;
        let row_x = cx - row_width / 2;
        let label = Rect {
            x: row_x,
            y: row_y,
            width: LABEL_WIDTH,
            height: ROW_HEIGHT,
        };
        let color_input = Rect {
            x: row_x + LABEL_WIDTH + ROW_GAP,
            y: row_y,
            width: FIELD_WIDTH,
            height: ROW_HEIGHT,
        };

        Self {
            width,
            height,
            toggle_button,
            title,
            swatch,
            label,
            color_input,
        }
    }

    /// Classifies a pointer position.
    pub fn hit_test(&self, x: i32, y: i32) -> Hit {
        if self.toggle_button.contains(x, y) {
            Hit::ToggleButton
        } else if self.color_input.contains(x, y) {
            Hit::ColorInput
        } else {
            Hit::Background
        }
    }
}
