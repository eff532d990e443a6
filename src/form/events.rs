//! Keystroke events delivered to input fields.

use serde::{Deserialize, Serialize};

/// A single keystroke as seen by a field's keydown handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A decimal digit key, 0 through 9.
    Digit(u8),

    /// Any other printable character key.
    Char(char),

    /// Backspace editing key.
    Backspace,

    /// Delete editing key.
    Delete,

    /// Left arrow navigation key.
    ArrowLeft,

    /// Right arrow navigation key.
    ArrowRight,

    /// Tab navigation key.
    Tab,

    /// Enter key.
    Enter,
}

impl Key {
    /// Classify a printable character as a digit or plain character key.
    pub fn from_char(c: char) -> Self {
        match c.to_digit(10) {
            Some(d) => Key::Digit(d as u8),
            None => Key::Char(c),
        }
    }

    /// True for the non-digit editing/navigation keys a masked field
    /// still accepts: Backspace, Delete, ArrowLeft, ArrowRight, Tab,
    /// Enter.
    pub fn is_allowed_control(self) -> bool {
        matches!(
            self,
            Key::Backspace
                | Key::Delete
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Tab
                | Key::Enter
        )
    }

    /// The digit a keystroke carries, as a character.
    ///
    /// Covers both representations of a digit keystroke: a `Digit` key
    /// in range (values above 9 yield `None`) and a `Char` key holding
    /// an ASCII digit, which direct construction or deserialization can
    /// produce without going through `from_char`.
    pub fn digit_char(self) -> Option<char> {
        match self {
            Key::Digit(d) => char::from_digit(u32::from(d), 10),
            Key::Char(c) if c.is_ascii_digit() => Some(c),
            _ => None,
        }
    }
}

/// Disposition of a keystroke after the keydown filter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The keystroke was allowed through and its edit (if any) applied.
    Accepted,

    /// The keystroke was suppressed; the field value is unchanged.
    Rejected,
}

impl KeyOutcome {
    /// True when the keystroke was allowed through.
    pub fn is_accepted(self) -> bool {
        matches!(self, KeyOutcome::Accepted)
    }
}
