use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{info, warn};

use bubblehue::draw::normalize_hex;
use bubblehue::headless::{self, MAX_ELAPSED, SnapshotOptions};
use bubblehue::picker::Theme;
use bubblehue::{Config, backend};

#[derive(Parser, Debug)]
#[command(name = "bubblehue")]
#[command(version, about = "Color picker overlay with contrast-aware text for Wayland compositors")]
struct Cli {
    /// Show the picker overlay immediately
    #[arg(long, short = 'a', action = ArgAction::SetTrue, conflicts_with = "snapshot")]
    active: bool,

    /// Render one frame to a PNG file instead of opening a window
    #[arg(long, value_name = "PNG")]
    snapshot: Option<PathBuf>,

    /// Snapshot width in pixels
    #[arg(long, default_value_t = 800, requires = "snapshot", value_parser = clap::value_parser!(u32).range(1..=8192))]
    width: u32,

    /// Snapshot height in pixels
    #[arg(long, default_value_t = 600, requires = "snapshot", value_parser = clap::value_parser!(u32).range(1..=8192))]
    height: u32,

    /// Seconds of bubble animation to simulate before the snapshot
    #[arg(long, value_name = "SECS", default_value = "5", requires = "snapshot", value_parser = parse_elapsed)]
    elapsed: Duration,

    /// Seed for bubble placement in snapshots
    #[arg(long, default_value_t = 0, requires = "snapshot")]
    seed: u64,

    /// Initial color (#rgb or #rrggbb); overrides the config file
    #[arg(long, short = 'c', value_name = "HEX", value_parser = parse_color)]
    color: Option<String>,

    /// Start in dark mode
    #[arg(long, action = ArgAction::SetTrue)]
    dark: bool,
}

fn parse_color(value: &str) -> Result<String, String> {
    normalize_hex(value).map_err(|e| e.to_string())
}

fn parse_elapsed(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;
    let elapsed = Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("'{value}' must be a non-negative number of seconds"))?;
    if elapsed > MAX_ELAPSED {
        return Err(format!(
            "'{value}' exceeds the maximum of {} seconds",
            MAX_ELAPSED.as_secs()
        ));
    }
    Ok(elapsed)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Check for Wayland environment
    if cli.active && std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    if !cli.active && cli.snapshot.is_none() {
        // No flags: show usage
        println!("bubblehue: Color picker overlay for Wayland compositors");
        println!();
        println!("Usage:");
        println!("  bubblehue --active                 Show the picker overlay");
        println!("  bubblehue --snapshot out.png       Render one frame to a PNG file");
        println!("  bubblehue --help                   Show all options");
        println!();
        println!("Controls:");
        println!("  Click the toggle button or press T to switch light/dark mode");
        println!("  Click the color field or press Tab, type a hex color, press Enter");
        println!("  Escape or Q closes the picker");
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {:#}. Using defaults.", e);
            Config::default()
        }
    };

    let color = cli
        .color
        .clone()
        .unwrap_or_else(|| config.picker.default_color.to_hex());
    let theme = if cli.dark {
        Theme::Dark
    } else {
        config.picker.initial_theme()
    };

    if let Some(path) = cli.snapshot {
        let options = SnapshotOptions {
            width: cli.width,
            height: cli.height,
            elapsed: cli.elapsed,
            seed: cli.seed,
            color,
            theme,
        };
        headless::write_snapshot(&path, &options, &config.ui)
            .with_context(|| format!("Snapshot to {} failed", path.display()))?;
        return Ok(());
    }

    info!("Starting color picker overlay ({} mode, {})", theme, color);
    info!("Controls:");
    info!("  - Toggle theme: click the button or press T");
    info!("  - Pick a color: click the field or press Tab, type hex, press Enter");
    info!("  - Exit: Escape or Q");

    backend::run_wayland(config, color, theme)?;

    info!("Color picker closed.");
    Ok(())
}
