//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::AppConfig;
use crate::calculator::MAX_SIGNIFICANT_DIGITS;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// This function checks for:
/// - Precision outside the range an `f64` can represent
/// - An empty error marker
/// - An error marker that looks like a number
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if config.significant_digits == 0 {
        warnings.push(ValidationWarning {
            field: "significant_digits".to_string(),
            message: "Precision 0 is treated as 1 significant digit.".to_string(),
        });
    } else if config.significant_digits > MAX_SIGNIFICANT_DIGITS {
        warnings.push(ValidationWarning {
            field: "significant_digits".to_string(),
            message: format!(
                "Precision {} exceeds maximum and is clamped to {}.",
                config.significant_digits, MAX_SIGNIFICANT_DIGITS
            ),
        });
    }

    if config.error_marker.trim().is_empty() {
        warnings.push(ValidationWarning {
            field: "error_marker".to_string(),
            message: "Error marker is empty. Failed calculations will show a blank display."
                .to_string(),
        });
    } else if crate::calculator::evaluate(&config.error_marker).is_ok() {
        warnings.push(ValidationWarning {
            field: "error_marker".to_string(),
            message: format!(
                "Error marker '{}' looks like a number and can be mistaken for a result.",
                config.error_marker
            ),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = AppConfig::default();
        let warnings = validate_config(&config);
        // Default config should have no warnings
        assert!(warnings.is_empty(), "Warnings: {:?}", warnings);
    }

    #[test]
    fn test_validate_zero_precision() {
        let config = AppConfig {
            significant_digits: 0,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "significant_digits"));
    }

    #[test]
    fn test_validate_precision_too_large() {
        let config = AppConfig {
            significant_digits: 30,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(
            warnings
                .iter()
                .any(|w| w.field == "significant_digits" && w.message.contains("clamped to 17"))
        );
    }

    #[test]
    fn test_validate_empty_error_marker() {
        let config = AppConfig {
            error_marker: "  ".to_string(),
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(
            warnings
                .iter()
                .any(|w| w.field == "error_marker" && w.message.contains("empty"))
        );
    }

    #[test]
    fn test_validate_numeric_error_marker() {
        let config = AppConfig {
            error_marker: "0".to_string(),
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(
            warnings
                .iter()
                .any(|w| w.field == "error_marker" && w.message.contains("number"))
        );
    }
}
