//! Result formatting.
//!
//! Numbers are rendered like C's `%.Ng`: N significant digits, fixed or
//! scientific notation depending on the exponent, trailing zeros removed.

use serde::{Deserialize, Serialize};

/// Default number of significant digits.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 8;

/// Largest precision that still means something for an `f64`.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// How results are rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFormat {
    pub significant_digits: usize,
    pub thousands_separators: bool,
}

impl Default for ResultFormat {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            thousands_separators: false,
        }
    }
}

impl ResultFormat {
    /// Plain text that can be fed back into the evaluator.
    pub fn plain(&self, value: f64) -> String {
        format_result(value, self.significant_digits)
    }

    /// Text for display, with separators if enabled.
    pub fn display(&self, value: f64) -> String {
        let plain = self.plain(value);
        if self.thousands_separators {
            group_thousands(&plain)
        } else {
            plain
        }
    }
}

/// Format a number with `significant_digits` significant digits, `%g` style.
///
/// The precision is clamped to `1..=MAX_SIGNIFICANT_DIGITS`.
pub fn format_result(value: f64, significant_digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS);

    // Scientific form gives the exponent after rounding to `precision` digits.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent >= -4 && exponent < precision as i32 {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    }
}

fn strip_trailing_zeros(number: &str) -> String {
    if number.contains('.') {
        number
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        number.to_string()
    }
}

/// Insert thousand separators into the integer part of a fixed-notation number.
///
/// Scientific notation and non-numeric text are returned unchanged.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let (int_part, rest) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    if int_part.is_empty()
        || !int_part.bytes().all(|b| b.is_ascii_digit())
        || !rest.bytes().skip(1).all(|b| b.is_ascii_digit())
    {
        return number.to_string();
    }

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let grouped: String = grouped.chars().rev().collect();
    format!("{}{}{}", sign, grouped, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_result(14.0, 8), "14");
        assert_eq!(format_result(-7.0, 8), "-7");
        assert_eq!(format_result(0.0, 8), "0");
        assert_eq!(format_result(12345678.0, 8), "12345678");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_result(2.5, 8), "2.5");
        assert_eq!(format_result(1.0 / 3.0, 8), "0.33333333");
        assert_eq!(format_result(2.0 / 3.0, 8), "0.66666667");
        assert_eq!(format_result(0.0001, 8), "0.0001");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(format_result(1e10, 8), "1e+10");
        assert_eq!(format_result(123456789.0, 8), "1.2345679e+08");
        assert_eq!(format_result(0.00001, 8), "1e-05");
        assert_eq!(format_result(-1.5e-7, 8), "-1.5e-07");
        assert_eq!(format_result(1e100, 8), "1e+100");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(format_result(9.9999999999, 8), "10");
        assert_eq!(format_result(99999999.9, 8), "1e+08");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_result(f64::INFINITY, 8), "inf");
        assert_eq!(format_result(f64::NEG_INFINITY, 8), "-inf");
        assert_eq!(format_result(f64::NAN, 8), "nan");
    }

    #[test]
    fn test_zero_precision_means_one_digit() {
        assert_eq!(format_result(123.0, 0), "1e+02");
        assert_eq!(format_result(7.0, 0), "7");
    }

    #[test]
    fn test_huge_precision_is_clamped() {
        assert_eq!(format_result(0.1, 17), "0.10000000000000001");
        for digits in [18, 70_000, usize::MAX] {
            assert_eq!(format_result(0.1, digits), format_result(0.1, 17));
            assert_eq!(format_result(2.0, digits), "2");
            assert_eq!(format_result(1e300, digits), "1.0000000000000001e+300");
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-1234567.25"), "-1,234,567.25");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
    }

    #[test]
    fn test_group_thousands_leaves_other_text() {
        assert_eq!(group_thousands("1e+10"), "1e+10");
        assert_eq!(group_thousands("inf"), "inf");
        assert_eq!(group_thousands("Error"), "Error");
        assert_eq!(group_thousands("12+3456"), "12+3456");
    }

    #[test]
    fn test_result_format_display() {
        let format = ResultFormat {
            significant_digits: 8,
            thousands_separators: true,
        };
        assert_eq!(format.display(1000.0 * 1000.0), "1,000,000");
        assert_eq!(format.plain(1000.0 * 1000.0), "1000000");
    }
}
