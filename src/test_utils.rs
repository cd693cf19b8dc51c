//! Test utilities and mock factories.
//!
//! Only compiled in test builds.

use crate::config::AppConfig;
use crate::keypad::{Keypad, parse_key_sequence};

/// Create a mock AppConfig with default values.
pub fn mock_config() -> AppConfig {
    AppConfig::default()
}

/// Create a mock AppConfig with strict evaluation rules.
pub fn mock_strict_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.make_strict();
    config
}

/// Create a default keypad that has already received `sequence`.
pub fn mock_keypad(sequence: &str) -> Keypad {
    let mut keypad = mock_config().keypad();
    keypad.press_all(parse_key_sequence(sequence).expect("valid key sequence"));
    keypad
}

/// Convert captured output into a string.
pub fn output_string(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("output is UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{DivisionMode, TrailingOperator};
    use crate::keypad::Showing;

    #[test]
    fn test_mock_config() {
        let config = mock_config();
        assert_eq!(config.significant_digits, 8);
        assert_eq!(config.error_marker, "Error");
    }

    #[test]
    fn test_mock_strict_config() {
        let config = mock_strict_config();
        assert_eq!(config.trailing_operator, TrailingOperator::Reject);
        assert_eq!(config.division, DivisionMode::Checked);
    }

    #[test]
    fn test_mock_keypad() {
        let keypad = mock_keypad("9-3=");
        assert_eq!(keypad.buffer(), "6");
        assert_eq!(keypad.showing(), Showing::Result);
    }

    #[test]
    fn test_output_string() {
        assert_eq!(output_string(b"7\n".to_vec()), "7\n");
    }
}
