//! Bubble particle records and their randomized generation.

use std::ops::Range;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::draw::{Color, PALETTE, palette_color};

/// Horizontal position range, percent of surface width.
pub const LEFT_PERCENT_RANGE: Range<f64> = 0.0..100.0;
/// Lifetime range in seconds.
pub const DURATION_SECS_RANGE: Range<f64> = 8.0..12.0;
/// Size range in rem.
pub const SIZE_REM_RANGE: Range<f64> = 1.5..3.0;

/// Identity of a bubble, unique within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BubbleId(pub u64);

/// One decorative particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub id: BubbleId,
    /// Horizontal position in `[0, 100)` percent of the surface width
    pub left_percent: f64,
    /// Index into [`PALETTE`]
    pub palette_index: usize,
    /// Lifetime in seconds, `[8, 12)`
    pub duration_secs: f64,
    /// Diameter in rem, `[1.5, 3)`
    pub size_rem: f64,
    /// When the bubble was spawned
    pub created_at: Instant,
}

impl Bubble {
    /// Draws a new bubble from `rng`, created at `now`.
    pub fn random<R: Rng + ?Sized>(id: BubbleId, now: Instant, rng: &mut R) -> Self {
        Self {
            id,
            left_percent: rng.random_range(LEFT_PERCENT_RANGE),
            palette_index: rng.random_range(0..PALETTE.len()),
            duration_secs: rng.random_range(DURATION_SECS_RANGE),
            size_rem: rng.random_range(SIZE_REM_RANGE),
            created_at: now,
        }
    }

    /// Hex string of this bubble's palette color.
    pub fn color_hex(&self) -> &'static str {
        PALETTE[self.palette_index % PALETTE.len()]
    }

    pub fn color(&self) -> Color {
        palette_color(self.palette_index)
    }

    pub fn lifetime(&self) -> Duration {
        Duration::from_secs_f64(self.duration_secs)
    }

    /// Instant at which the bubble is removed.
    pub fn expires_at(&self) -> Instant {
        self.created_at + self.lifetime()
    }

    /// Fraction of the lifetime elapsed at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f64();
        (elapsed / self.duration_secs).clamp(0.0, 1.0)
    }
}
