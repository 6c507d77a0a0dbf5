//! Library exports for the bubblehue color picker.
//!
//! The picker core (state, contrast math, bubble scheduling) is independent of
//! any windowing system. The Wayland overlay and the headless PNG renderer are
//! two hosts for it, and share configuration and drawing code.

pub mod backend;
pub mod config;
pub mod draw;
pub mod headless;
pub mod picker;
pub mod ui;
pub mod util;

pub use config::Config;
