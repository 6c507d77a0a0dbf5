//! Layer-surface bookkeeping and the shared memory pool backing Cairo buffers.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::wlr_layer::LayerSurface,
    shm::{Shm, slot::SlotPool},
};

/// Tracks the overlay's layer surface, its buffer pool and frame pacing.
pub struct SurfaceState {
    layer_surface: Option<LayerSurface>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self {
            layer_surface: None,
            pool: None,
            width: 0,
            height: 0,
            configured: false,
            frame_callback_pending: false,
        }
    }

    pub fn set_layer_surface(&mut self, surface: LayerSurface) {
        self.layer_surface = Some(surface);
    }

    pub fn layer_surface(&self) -> Option<&LayerSurface> {
        self.layer_surface.as_ref()
    }

    /// Records the compositor-assigned size. Returns `true` if it changed.
    ///
    /// A size change invalidates the buffer pool; it is rebuilt on the next render.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.pool = None;
        true
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mark_configured(&mut self) {
        self.configured = true;
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Whether a render may start now.
    ///
    /// With vsync a render waits for the previous frame callback; without it
    /// renders may run back to back.
    pub fn can_render(&self, needs_redraw: bool, vsync: bool) -> bool {
        self.configured
            && self.width > 0
            && self.height > 0
            && needs_redraw
            && (!vsync || !self.frame_callback_pending)
    }

    /// Returns the buffer pool, creating one sized for `buffer_count` frames if needed.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let pool_size = self.width as usize * self.height as usize * 4 * buffer_count;
            info!(
                "Creating SlotPool ({}x{}, {} bytes, {} buffers)",
                self.width, self.height, pool_size, buffer_count
            );
            self.pool = Some(SlotPool::new(pool_size, shm).context("Failed to create slot pool")?);
        }

        self.pool.as_mut().context("Buffer pool missing after creation")
    }
}
