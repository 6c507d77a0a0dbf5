//! Backend-neutral input event types.

/// Key representation shared by all hosts.
///
/// Backends map their native key codes to these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character key
    Char(char),
    Escape,
    Return,
    Backspace,
    Tab,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button; activates controls
    Left,
    Right,
    Middle,
}
