// Coordinates backend startup/shutdown and drives the calloop event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use calloop::{EventLoop, timer::Timer};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    reexports::calloop_wayland_source::WaylandSource,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{Anchor, KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{
    config::Config,
    picker::{PickerState, Theme},
};

/// Consecutive render failures tolerated before the loop gives up.
const MAX_RENDER_FAILURES: u32 = 10;
/// Loop wake-up interval while animating without vsync.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Upper bound on how long the loop sleeps, so the shutdown flag is noticed.
const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Wayland backend state
pub struct WaylandBackend {
    config: Config,
    initial_color: String,
    theme: Theme,
    /// Set from the signal handler on SIGINT/SIGTERM
    shutdown_requested: Arc<AtomicBool>,
}

impl WaylandBackend {
    pub fn new(config: Config, initial_color: String, theme: Theme) -> Result<Self> {
        let shutdown_requested = Arc::new(AtomicBool::new(false));
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&shutdown_requested))
                .context("Failed to register signal handler")?;
        }

        Ok(Self {
            config,
            initial_color,
            theme,
            shutdown_requested,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        debug!("Bound layer shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        debug!("  Initial color: {}", self.initial_color);
        debug!("  Theme: {}", self.theme);
        debug!("  Buffer count: {}", self.config.performance.buffer_count);
        debug!("  VSync: {}", self.config.performance.enable_vsync);

        let picker = PickerState::new(
            self.initial_color.clone(),
            self.theme,
            SmallRng::from_os_rng(),
        );

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            self.config.clone(),
            picker,
        );

        // Create layer shell surface
        info!("Creating layer shell surface");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Overlay,
            Some("bubblehue"),
            None, // Default output
        );

        layer_surface.set_anchor(Anchor::all());
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::Exclusive);
        layer_surface.set_size(0, 0); // Use full screen size
        layer_surface.set_exclusive_zone(-1);
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        info!("Layer shell surface created");

        // Event loop: Wayland events plus one timer driving the bubble scheduler
        let mut event_loop: EventLoop<WaylandState> =
            EventLoop::try_new().context("Failed to create event loop")?;
        let loop_handle = event_loop.handle();

        WaylandSource::new(conn.clone(), event_queue)
            .insert(loop_handle.clone())
            .map_err(|e| anyhow!("Failed to insert Wayland source: {}", e.error))?;

        state.picker.mount(Instant::now());
        let timer = state
            .picker
            .next_bubble_deadline()
            .map(Timer::from_deadline)
            .unwrap_or_else(Timer::immediate);
        let bubble_timer = loop_handle
            .insert_source(timer, |_deadline, _, state: &mut WaylandState| {
                state.on_bubble_timer(Instant::now())
            })
            .map_err(|e| anyhow!("Failed to insert bubble timer: {}", e.error))?;
        debug!("Bubble timer armed");

        let vsync = state.config.performance.enable_vsync;
        let mut consecutive_render_failures = 0u32;
        let mut loop_error: Option<anyhow::Error> = None;

        loop {
            // Use Acquire ordering to observe the flag store from the signal handler
            if self.shutdown_requested.load(Ordering::Acquire) {
                info!("Termination signal received, closing picker");
                state.picker.should_exit = true;
            }

            if state.picker.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            // Without vsync there are no frame callbacks to pace animation
            if !vsync && state.picker.is_animating() {
                state.picker.needs_redraw = true;
            }

            if state
                .surface
                .can_render(state.picker.needs_redraw, vsync)
            {
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.picker.needs_redraw = false;
                        if vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            loop_error = Some(anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                            break;
                        }

                        // Clear redraw flag to avoid infinite error loop
                        state.picker.needs_redraw = false;
                    }
                }
            } else if state.picker.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Skipping render - frame callback already pending");
            }

            let timeout = if !vsync && state.picker.is_animating() {
                FRAME_INTERVAL
            } else {
                SHUTDOWN_POLL_INTERVAL
            };

            if let Err(e) = event_loop.dispatch(Some(timeout), &mut state) {
                warn!("Event loop error: {}", e);
                loop_error = Some(anyhow!("Wayland event loop error: {}", e));
                break;
            }
        }

        // Teardown: stop spawning, then drop the timer source
        state.picker.unmount();
        loop_handle.remove(bubble_timer);
        info!("Wayland backend exiting");

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
