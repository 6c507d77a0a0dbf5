use anyhow::Result;

use crate::config::Config;
use crate::picker::Theme;

pub mod wayland;

/// Run the picker overlay until the user closes it or a signal arrives.
///
/// # Arguments
/// * `config` - Loaded configuration (fonts, theme colors, buffering)
/// * `initial_color` - Normalized hex color selected at startup
/// * `theme` - Theme the overlay opens in
pub fn run_wayland(config: Config, initial_color: String, theme: Theme) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(config, initial_color, theme)?;
    backend.run()
}
