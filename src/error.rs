//! Domain-specific error types for keycalc.
//!
//! Each domain of the application gets its own error enum so callers can
//! match on what went wrong, while the binary collapses everything into
//! `anyhow` at the top level.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expression evaluation errors.
///
/// This type is serializable so it can be emitted as JSON by the CLI.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalError {
    /// A token was neither a numeral nor an operator where one was expected.
    #[error("Parse error at offset {position}: {found}")]
    Parse { position: usize, found: String },

    /// The expression has no operands, or ends in an operator under strict rules.
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    /// Division by zero under checked division.
    #[error("Division by zero")]
    DivisionByZero,
}

impl EvalError {
    pub(crate) fn parse(position: usize, found: impl Into<String>) -> Self {
        Self::Parse {
            position,
            found: found.into(),
        }
    }
}

/// Keypad input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeypadError {
    /// A character in a key sequence does not map to any keypad button.
    #[error("Unknown key '{0}'")]
    UnknownKey(char),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),

    /// Failed to save the config file.
    #[error("Failed to save config: {0}")]
    SaveFailed(#[source] std::io::Error),

    /// Failed to serialize the config.
    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[source] toml::ser::Error),
}

/// Clipboard errors.
#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    /// Failed to access the clipboard.
    #[error("Failed to access clipboard: {0}")]
    AccessFailed(String),

    /// Failed to copy content to the clipboard.
    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),
}
