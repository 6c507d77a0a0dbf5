//! Color picker component: state store, bubble scheduling and input handling.
//!
//! Hosts translate their native keyboard/pointer events into [`Key`] and
//! [`MouseButton`] values, feed wall-clock time into the bubble scheduler,
//! and repaint whenever [`PickerState::needs_redraw`] is set.

pub mod bubble;
pub mod events;
pub mod hex_input;
pub mod scheduler;
pub mod state;
pub mod theme;
pub mod timer;

#[cfg(test)]
mod tests;

// Re-export commonly used types at module level
pub use bubble::{Bubble, BubbleId};
pub use events::{Key, MouseButton};
pub use hex_input::{HexInput, HexInputOutcome};
pub use scheduler::BubbleScheduler;
pub use state::{DEFAULT_COLOR, PickerState};
pub use theme::Theme;
pub use timer::{TimerId, TimerQueue};
