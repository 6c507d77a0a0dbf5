//! Headless rendering: draw one frame of the picker into a PNG file.
//!
//! Time is virtual. The picker is mounted at a fixed instant and advanced
//! by `elapsed`, so with a fixed seed the output is reproducible.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use cairo::{Format, ImageSurface};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::UiConfig;
use crate::picker::{PickerState, Theme};
use crate::ui;

/// Longest virtual time a snapshot may simulate. Catching up replays every
/// spawn and expiry in between, one timer at a time.
pub const MAX_ELAPSED: Duration = Duration::from_secs(60 * 60);

/// Parameters of a snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    pub width: u32,
    pub height: u32,
    /// Virtual time since mount
    pub elapsed: Duration,
    /// Seed for bubble generation
    pub seed: u64,
    pub color: String,
    pub theme: Theme,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            elapsed: Duration::from_secs(5),
            seed: 0,
            color: crate::picker::DEFAULT_COLOR.to_string(),
            theme: Theme::Light,
        }
    }
}

/// Virtual instant the snapshot shows.
fn snapshot_instant(options: &SnapshotOptions, t0: Instant) -> Result<Instant> {
    if options.elapsed > MAX_ELAPSED {
        bail!(
            "Snapshot elapsed time {:?} exceeds the {}s limit",
            options.elapsed,
            MAX_ELAPSED.as_secs()
        );
    }
    t0.checked_add(options.elapsed)
        .context("Snapshot elapsed time overflows the clock")
}

/// Builds the picker state the snapshot shows, at virtual time `t0 + elapsed`.
pub fn snapshot_state(options: &SnapshotOptions, t0: Instant) -> Result<PickerState> {
    let now = snapshot_instant(options, t0)?;
    let mut state = PickerState::new(
        options.color.clone(),
        options.theme,
        SmallRng::seed_from_u64(options.seed),
    );
    state.update_screen_dimensions(options.width, options.height);
    state.mount(t0);
    state.advance_bubbles(now);
    Ok(state)
}

/// Renders the snapshot into an in-memory surface.
pub fn render_snapshot(options: &SnapshotOptions, config: &UiConfig) -> Result<ImageSurface> {
    let width = i32::try_from(options.width).context("Snapshot width too large")?;
    let height = i32::try_from(options.height).context("Snapshot height too large")?;

    let t0 = Instant::now();
    let now = snapshot_instant(options, t0)?;
    let mut state = snapshot_state(options, t0)?;
    debug!(
        "Snapshot at {:?}: {} bubbles, theme {}",
        options.elapsed,
        state.bubbles().len(),
        state.theme()
    );

    let surface = ImageSurface::create(Format::ARgb32, width, height)
        .context("Failed to create image surface")?;
    {
        let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;
        ui::render_picker(
            &ctx,
            &state,
            config,
            options.width,
            options.height,
            now,
        );
    }
    state.unmount();
    surface.flush();
    Ok(surface)
}

/// Renders the snapshot and writes it to `path` as PNG.
pub fn write_snapshot(path: &Path, options: &SnapshotOptions, config: &UiConfig) -> Result<()> {
    let surface = render_snapshot(options, config)?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
    info!(
        "Wrote {}x{} snapshot to {}",
        options.width,
        options.height,
        path.display()
    );
    Ok(())
}
