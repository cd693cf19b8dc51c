//! Keypad buttons.

use crate::calculator::Operator;

/// Label of the backspace button.
pub const BACKSPACE_LABEL: &str = "←";

/// A calculator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit, 0 through 9.
    Digit(u8),
    /// The decimal point.
    Point,
    Operator(Operator),
    /// Empty the display.
    Clear,
    /// Remove the last character.
    Backspace,
    /// Evaluate the display.
    Equals,
}

impl Key {
    /// Every button, in keypad order.
    pub const ALL: [Key; 18] = [
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Operator(Operator::Divide),
        Key::Clear,
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Operator(Operator::Multiply),
        Key::Backspace,
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Operator(Operator::Subtract),
        Key::Digit(0),
        Key::Point,
        Key::Equals,
        Key::Operator(Operator::Add),
    ];

    /// Parse a button label (`"7"`, `"."`, `"+"`, `"C"`, `"←"`, `"="`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "C" => Some(Self::Clear),
            BACKSPACE_LABEL => Some(Self::Backspace),
            "=" => Some(Self::Equals),
            "." => Some(Self::Point),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => {
                        c.to_digit(10).map(|d| Self::Digit(d as u8))
                    }
                    (Some(c), None) => Operator::from_char(c).map(Self::Operator),
                    _ => None,
                }
            }
        }
    }

    /// Parse a single character of a scripted key sequence.
    ///
    /// Besides the button labels this accepts `c` for clear and `<` for backspace.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Point),
            'C' | 'c' => Some(Self::Clear),
            '←' | '<' => Some(Self::Backspace),
            '=' => Some(Self::Equals),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// The text on the button.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10)
                .map(String::from)
                .unwrap_or_default(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => BACKSPACE_LABEL.to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    /// Whether pressing this key appends its label to the display.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Point | Self::Operator(_))
    }
}
