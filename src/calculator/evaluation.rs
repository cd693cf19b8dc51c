//! Two-stack expression evaluation.
//!
//! Numerals go on an operand stack and operators wait on an operator stack
//! until an incoming operator of lower or equal precedence forces them to be
//! applied. There is no parenthesis support and no unary minus on the
//! leading operand, except when it is a previous result being continued.

use serde::{Deserialize, Serialize};

use super::scanner::Scanner;
use super::token::Operator;
use crate::error::EvalError;

/// What to do with an operator that has no operand after it (`"3+4+"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingOperator {
    /// Drop it and evaluate what came before.
    #[default]
    Ignore,
    /// Report a malformed expression.
    Reject,
}

/// How division by zero is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionMode {
    /// IEEE-754: yields an infinity or NaN.
    #[default]
    Ieee,
    /// Report `EvalError::DivisionByZero`.
    Checked,
}

/// Options controlling edge-case behaviour of the evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    pub trailing_operator: TrailingOperator,
    pub division: DivisionMode,
}

impl EvalOptions {
    /// Reject dangling operators and division by zero.
    pub fn strict() -> Self {
        Self {
            trailing_operator: TrailingOperator::Reject,
            division: DivisionMode::Checked,
        }
    }
}

/// Stateless expression evaluator.
///
/// Every call owns its own stacks, so a single instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    options: EvalOptions,
}

impl Evaluator {
    pub fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Evaluate an expression of numerals and `+ - * /`.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        self.evaluate_with(expression, false)
    }

    /// Evaluate an expression that continues from an earlier result.
    ///
    /// The leading operand is the result text as `format_result` wrote it,
    /// so it may carry a sign or read `inf`/`nan` (`"-3+1"` is `-2`). Every
    /// later operand follows the rules of `evaluate`.
    pub fn evaluate_continuation(&self, expression: &str) -> Result<f64, EvalError> {
        self.evaluate_with(expression, true)
    }

    fn evaluate_with(&self, expression: &str, continuing: bool) -> Result<f64, EvalError> {
        if expression.trim().is_empty() {
            return Err(EvalError::MalformedExpression(
                "empty expression".to_string(),
            ));
        }

        let mut scanner = Scanner::new(expression);
        let mut operands: Vec<f64> = Vec::new();
        let mut operators: Vec<Operator> = Vec::new();

        let first = if continuing {
            scanner.next_result_operand()?
        } else {
            scanner.next_number(false)?
        };
        let first = first.ok_or_else(|| EvalError::MalformedExpression("no operands".to_string()))?;
        operands.push(first);

        while let Some(op) = scanner.next_operator()? {
            if scanner.is_exhausted() {
                match self.options.trailing_operator {
                    TrailingOperator::Ignore => {
                        tracing::trace!(operator = %op, "Dropping dangling operator");
                        break;
                    }
                    TrailingOperator::Reject => {
                        return Err(EvalError::MalformedExpression(format!(
                            "dangling operator '{}'",
                            op
                        )));
                    }
                }
            }

            let Some(operand) = scanner.next_number(true)? else {
                break;
            };

            while let Some(&top) = operators.last()
                && drains_before(op, top)
            {
                operators.pop();
                self.reduce(top, &mut operands)?;
            }

            operators.push(op);
            operands.push(operand);
        }

        while let Some(op) = operators.pop() {
            self.reduce(op, &mut operands)?;
        }

        match operands.as_slice() {
            [result] => {
                tracing::trace!(expression, result, "Evaluated expression");
                Ok(*result)
            }
            _ => Err(EvalError::MalformedExpression(
                "unbalanced operands".to_string(),
            )),
        }
    }

    /// Pop two operands, apply `op`, push the result.
    fn reduce(&self, op: Operator, operands: &mut Vec<f64>) -> Result<(), EvalError> {
        let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
            return Err(EvalError::MalformedExpression(format!(
                "operator '{}' is missing an operand",
                op
            )));
        };

        if op == Operator::Divide && rhs == 0.0 && self.options.division == DivisionMode::Checked {
            return Err(EvalError::DivisionByZero);
        }

        operands.push(op.apply(lhs, rhs));
        Ok(())
    }
}

/// Whether the pending operator `top` must be applied before `incoming` is pushed.
///
/// `+` and `-` flush anything pending. `*` and `/` only flush another `*`
/// or `/`, which keeps equal precedence left-associative.
fn drains_before(incoming: Operator, top: Operator) -> bool {
    match incoming {
        Operator::Add | Operator::Subtract => true,
        Operator::Multiply | Operator::Divide => top.is_multiplicative(),
    }
}

/// Evaluate with default options: dangling operators are dropped and
/// division by zero follows IEEE-754.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Evaluator::default().evaluate(expression)
}
