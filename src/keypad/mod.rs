//! Toolkit-independent calculator keypad.
//!
//! Models the display buffer of a button calculator: digits and operators
//! are appended, `C` clears, `←` deletes, `=` evaluates.

mod key;
mod state;

pub use key::{BACKSPACE_LABEL, Key};
pub use state::{DEFAULT_ERROR_MARKER, Keypad, Showing};

use crate::error::KeypadError;

/// Parse a scripted key sequence such as `"12+3*4="`.
///
/// Whitespace is ignored. Any other character that is not a key is an error.
pub fn parse_key_sequence(sequence: &str) -> Result<Vec<Key>, KeypadError> {
    sequence
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::from_char(c).ok_or(KeypadError::UnknownKey(c)))
        .collect()
}
