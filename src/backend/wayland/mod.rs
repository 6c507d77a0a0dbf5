// Wayland backend: a wlr-layer-shell overlay hosting the picker, driven by a calloop event loop.
mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
