//! Calculator core: a pure expression evaluator and result formatting.
//!
//! This module provides functionality to:
//! - Scan an expression into numerals and `+ - * /` operators
//! - Evaluate it with `*` and `/` binding tighter than `+` and `-`
//! - Format results with a fixed number of significant digits

mod evaluation;
mod format;
mod result;
mod scanner;
mod token;

pub use evaluation::{DivisionMode, EvalOptions, Evaluator, TrailingOperator, evaluate};
pub use format::{
    DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS, ResultFormat, format_result,
    group_thousands,
};
pub use result::{CalculationResult, calculate};
pub use scanner::{Scanner, tokenize};
pub use token::{Operator, Token};
