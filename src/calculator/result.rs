use serde::Serialize;

use super::evaluation::Evaluator;
use super::format::ResultFormat;
use crate::error::EvalError;

/// A successful calculation, ready to show or copy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationResult {
    /// The expression as entered, trimmed.
    pub expression: String,
    /// The numeric result.
    pub result: f64,
    /// The result formatted for display (separators if enabled).
    pub display: String,
    /// The result formatted for clipboard (no separators).
    /// None if the result is not finite.
    #[serde(skip)]
    pub clipboard: Option<String>,
}

impl CalculationResult {
    pub fn new(expression: &str, result: f64, format: &ResultFormat) -> Self {
        Self {
            expression: expression.trim().to_string(),
            result,
            display: format.display(result),
            clipboard: result.is_finite().then(|| format.plain(result)),
        }
    }

    /// Get the text to copy to clipboard.
    pub fn text_for_clipboard(&self) -> &str {
        self.clipboard.as_deref().unwrap_or(&self.display)
    }

    /// Whether the result is infinite or NaN.
    pub fn is_non_finite(&self) -> bool {
        !self.result.is_finite()
    }
}

/// Evaluate an expression and format the result.
pub fn calculate(
    evaluator: &Evaluator,
    format: &ResultFormat,
    expression: &str,
) -> Result<CalculationResult, EvalError> {
    let result = evaluator.evaluate(expression)?;
    Ok(CalculationResult::new(expression, result, format))
}
