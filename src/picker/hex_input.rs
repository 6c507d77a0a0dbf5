//! Single-line hex color entry.
//!
//! Plays the role of a native color input: it only ever emits a normalized
//! `#rrggbb` string, and only when the user commits a parseable buffer.

use crate::draw::{ColorParseError, normalize_hex};

/// Longest accepted buffer, `#` plus six digits.
pub const MAX_LEN: usize = 7;

/// What a key press did to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexInputOutcome {
    /// Key consumed; the buffer may have changed
    Edited,
    /// Buffer committed; carries the normalized color
    Committed(String),
    /// Return pressed on an unparseable buffer; the field stays focused
    Rejected(ColorParseError),
    /// Edit cancelled, focus released
    Cancelled,
    /// Key not handled by the field
    Ignored,
}

/// Editing state of the hex entry field.
#[derive(Debug, Clone, Default)]
pub struct HexInput {
    buffer: String,
    focused: bool,
    invalid: bool,
}

impl HexInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focuses the field, seeding the buffer with the current selection.
    pub fn focus(&mut self, current: &str) {
        self.buffer = current.chars().take(MAX_LEN).collect();
        self.focused = true;
        self.invalid = false;
    }

    /// Releases focus, discarding any uncommitted edit.
    pub fn blur(&mut self) {
        self.focused = false;
        self.invalid = false;
        self.buffer.clear();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the last commit attempt was rejected.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Appends a typed character. Only hex digits and a leading `#` are accepted.
    pub fn push_char(&mut self, ch: char) -> HexInputOutcome {
        if !self.focused {
            return HexInputOutcome::Ignored;
        }
        let accepted = ch.is_ascii_hexdigit() || (ch == '#' && self.buffer.is_empty());
        if !accepted || self.buffer.len() >= MAX_LEN {
            return HexInputOutcome::Ignored;
        }
        self.buffer.push(ch.to_ascii_lowercase());
        self.invalid = false;
        HexInputOutcome::Edited
    }

    pub fn backspace(&mut self) -> HexInputOutcome {
        if !self.focused {
            return HexInputOutcome::Ignored;
        }
        self.buffer.pop();
        self.invalid = false;
        HexInputOutcome::Edited
    }

    /// Tries to commit the buffer.
    pub fn commit(&mut self) -> HexInputOutcome {
        if !self.focused {
            return HexInputOutcome::Ignored;
        }
        match normalize_hex(&self.buffer) {
            Ok(hex) => {
                self.blur();
                HexInputOutcome::Committed(hex)
            }
            Err(err) => {
                self.invalid = true;
                HexInputOutcome::Rejected(err)
            }
        }
    }

    pub fn cancel(&mut self) -> HexInputOutcome {
        if !self.focused {
            return HexInputOutcome::Ignored;
        }
        self.blur();
        HexInputOutcome::Cancelled
    }
}
