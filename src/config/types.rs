//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::calculator::{
    DEFAULT_SIGNIFICANT_DIGITS, DivisionMode, EvalOptions, Evaluator, ResultFormat,
    TrailingOperator,
};
use crate::keypad::{DEFAULT_ERROR_MARKER, Keypad};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Significant digits shown in results.
    pub significant_digits: usize,
    /// Group result digits with `,` separators.
    pub thousands_separators: bool,
    /// Text shown in place of a result when evaluation fails.
    pub error_marker: String,
    /// Handling of an operator at the end of the input.
    pub trailing_operator: TrailingOperator,
    /// Handling of division by zero.
    pub division: DivisionMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            thousands_separators: false,
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            trailing_operator: TrailingOperator::Ignore,
            division: DivisionMode::Ieee,
        }
    }
}

impl AppConfig {
    /// Switch to the strict evaluation rules.
    pub fn make_strict(&mut self) {
        let strict = EvalOptions::strict();
        self.trailing_operator = strict.trailing_operator;
        self.division = strict.division;
    }

    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            trailing_operator: self.trailing_operator,
            division: self.division,
        }
    }

    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.eval_options())
    }

    pub fn result_format(&self) -> ResultFormat {
        ResultFormat {
            significant_digits: self.significant_digits,
            thousands_separators: self.thousands_separators,
        }
    }

    /// A fresh keypad using these settings.
    pub fn keypad(&self) -> Keypad {
        Keypad::new(
            self.evaluator(),
            self.result_format(),
            self.error_marker.clone(),
        )
    }
}
