//! Display buffer state for the keypad.

use super::key::Key;
use crate::calculator::{Evaluator, ResultFormat};

/// Default text shown when an evaluation fails.
pub const DEFAULT_ERROR_MARKER: &str = "Error";

/// What the buffer currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showing {
    /// Keys typed by the user.
    Input,
    /// A formatted result.
    Result,
    /// The error marker.
    Error,
}

/// Calculator display buffer driven by key presses.
///
/// Holds no toolkit state: a UI renders `display()` and forwards button
/// presses to `press()`.
#[derive(Debug, Clone)]
pub struct Keypad {
    buffer: String,
    showing: Showing,
    /// The buffer starts with the text of the last result.
    continuing: bool,
    evaluator: Evaluator,
    format: ResultFormat,
    error_marker: String,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(
            Evaluator::default(),
            ResultFormat::default(),
            DEFAULT_ERROR_MARKER,
        )
    }
}

impl Keypad {
    pub fn new(evaluator: Evaluator, format: ResultFormat, error_marker: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            showing: Showing::Input,
            continuing: false,
            evaluator,
            format,
            error_marker: error_marker.into(),
        }
    }

    /// The raw buffer. After `=` this is the ungrouped result.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    /// Text to render, with thousand separators on results if enabled.
    pub fn display(&self) -> String {
        match self.showing {
            Showing::Result if self.format.thousands_separators => {
                crate::calculator::group_thousands(&self.buffer)
            }
            _ => self.buffer.clone(),
        }
    }

    /// Handle one button press and return the new buffer.
    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Clear => {
                self.buffer.clear();
                self.continuing = false;
                self.showing = Showing::Input;
            }
            Key::Backspace => {
                match self.showing {
                    Showing::Error => self.buffer.clear(),
                    Showing::Result => {
                        self.buffer.pop();
                        self.continuing = true;
                    }
                    Showing::Input => {
                        self.buffer.pop();
                    }
                }
                if self.buffer.is_empty() {
                    self.continuing = false;
                }
                self.showing = Showing::Input;
            }
            Key::Equals => self.evaluate(),
            _ => {
                match self.showing {
                    Showing::Error => self.buffer.clear(),
                    Showing::Result => self.continuing = true,
                    Showing::Input => {}
                }
                self.buffer.push_str(&key.label());
                self.showing = Showing::Input;
            }
        }

        &self.buffer
    }

    /// Press several keys in order.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> &str {
        for key in keys {
            self.press(key);
        }
        &self.buffer
    }

    fn evaluate(&mut self) {
        // A result may be negative or non-finite, which plain input may not start with.
        let outcome = if self.continuing || self.showing == Showing::Result {
            self.evaluator.evaluate_continuation(&self.buffer)
        } else {
            self.evaluator.evaluate(&self.buffer)
        };
        self.continuing = false;

        match outcome {
            Ok(value) => {
                tracing::debug!(expression = %self.buffer, value, "Keypad evaluation");
                self.buffer = self.format.plain(value);
                self.showing = Showing::Result;
            }
            Err(e) => {
                tracing::debug!(expression = %self.buffer, error = %e, "Keypad evaluation failed");
                self.buffer = self.error_marker.clone();
                self.showing = Showing::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::EvalOptions;
    use crate::keypad::parse_key_sequence;
    use crate::test_utils::mock_keypad;

    fn run(keypad: &mut Keypad, sequence: &str) -> String {
        let keys = parse_key_sequence(sequence).expect("valid key sequence");
        keypad.press_all(keys).to_string()
    }

    #[test]
    fn test_typing_appends_labels() {
        let mut keypad = Keypad::default();
        assert_eq!(run(&mut keypad, "12+3.5"), "12+3.5");
        assert_eq!(keypad.showing(), Showing::Input);
    }

    #[test]
    fn test_equals_shows_result() {
        let mut keypad = Keypad::default();
        assert_eq!(run(&mut keypad, "2+3*4="), "14");
        assert_eq!(keypad.showing(), Showing::Result);
    }

    #[test]
    fn test_result_is_formatted_to_eight_digits() {
        let mut keypad = Keypad::default();
        assert_eq!(run(&mut keypad, "1/3="), "0.33333333");
    }

    #[test]
    fn test_continue_from_result() {
        let mut keypad = Keypad::default();
        assert_eq!(run(&mut keypad, "7*6=+8="), "50");
    }

    #[test]
    fn test_continue_from_negative_result() {
        let mut keypad = mock_keypad("2-5=");
        assert_eq!(keypad.buffer(), "-3");
        assert_eq!(run(&mut keypad, "+1="), "-2");

        let mut keypad = mock_keypad("2-5=");
        assert_eq!(run(&mut keypad, "5*2="), "-70");

        assert_eq!(mock_keypad("2-5==").buffer(), "-3");
    }

    #[test]
    fn test_continue_from_non_finite_result() {
        let mut keypad = mock_keypad("1/0=");
        assert_eq!(keypad.buffer(), "inf");
        assert_eq!(run(&mut keypad, "+1="), "inf");

        let mut keypad = mock_keypad("0-1/0=");
        assert_eq!(run(&mut keypad, "*2="), "-inf");

        let mut keypad = mock_keypad("0/0=");
        assert_eq!(run(&mut keypad, "-1="), "nan");
    }

    #[test]
    fn test_backspace_into_negative_result() {
        let mut keypad = mock_keypad("2-15=");
        assert_eq!(run(&mut keypad, "<"), "-1");
        assert_eq!(run(&mut keypad, "+4="), "3");
    }

    #[test]
    fn test_fresh_input_may_not_start_with_sign() {
        assert_eq!(mock_keypad("-5=").buffer(), "Error");
        assert_eq!(mock_keypad("2-5=C-5=").buffer(), "Error");
        assert_eq!(mock_keypad("2-5=<<-5=").buffer(), "Error");
    }

    #[test]
    fn test_clear_and_backspace() {
        let mut keypad = Keypad::default();
        assert_eq!(run(&mut keypad, "123<"), "12");
        assert_eq!(run(&mut keypad, "C"), "");
        assert_eq!(run(&mut keypad, "<"), "");
    }

    #[test]
    fn test_error_marker() {
        let mut keypad = Keypad::default();
        assert_eq!(run(&mut keypad, "="), "Error");
        assert_eq!(keypad.showing(), Showing::Error);

        assert_eq!(run(&mut keypad, "C+5="), "Error");
    }

    #[test]
    fn test_typing_after_error_starts_fresh() {
        let mut keypad = Keypad::default();
        run(&mut keypad, "*=");
        assert_eq!(run(&mut keypad, "4"), "4");

        run(&mut keypad, "C*=");
        assert_eq!(run(&mut keypad, "<"), "");
    }

    #[test]
    fn test_custom_error_marker() {
        let mut keypad = Keypad::new(Evaluator::default(), ResultFormat::default(), "E");
        assert_eq!(run(&mut keypad, "5/.="), "E");
    }

    #[test]
    fn test_dangling_operator_on_keypad() {
        let mut keypad = Keypad::default();
        assert_eq!(run(&mut keypad, "3+4+="), "7");

        let mut strict = Keypad::new(
            Evaluator::new(EvalOptions::strict()),
            ResultFormat::default(),
            DEFAULT_ERROR_MARKER,
        );
        assert_eq!(run(&mut strict, "3+4+="), "Error");
        assert_eq!(run(&mut strict, "C1/0="), "Error");
    }

    #[test]
    fn test_display_groups_results_only() {
        let format = ResultFormat {
            thousands_separators: true,
            ..ResultFormat::default()
        };
        let mut keypad = Keypad::new(Evaluator::default(), format, DEFAULT_ERROR_MARKER);
        run(&mut keypad, "1000*1000");
        assert_eq!(keypad.display(), "1000*1000");

        run(&mut keypad, "=");
        assert_eq!(keypad.buffer(), "1000000");
        assert_eq!(keypad.display(), "1,000,000");
    }
}
