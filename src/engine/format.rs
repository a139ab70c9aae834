//! Numeric text formatting and parsing for the display.

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::error::CalcError;

/// Fractional digits kept when rounding a computed result.
const FRACTION_DIGITS: usize = 12;

lazy_static! {
    /// Matches the decimal literals the display is allowed to hold.
    static ref DECIMAL_LITERAL: Regex = Regex::new(r"^-?(?:\d+\.?\d*|\.\d+)$").unwrap();
}

/// Render a computed value as minimal decimal text.
///
/// Rounds to 12 fractional digits first, so float artifacts like
/// `0.30000000000000004` collapse to `0.3`, then strips trailing zeros and a
/// dangling decimal point. Negative zero normalizes to `"0"`.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.prec$}", value, prec = FRACTION_DIGITS);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse display text back into a number.
///
/// Stricter than `f64::from_str`: only plain decimal literals are accepted,
/// never `inf`, `NaN`, or exponent notation. The display only ever holds
/// text this function accepts, so a failure here is a defensive signal.
pub fn parse_display(text: &str) -> Result<f64, CalcError> {
    if !DECIMAL_LITERAL.is_match(text) {
        return Err(CalcError::InvalidNumericParse);
    }
    text.parse::<f64>().map_err(|_| CalcError::InvalidNumericParse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_artifacts_collapse() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(0.1 + 0.7), "0.8");
    }

    #[test]
    fn test_integers_render_minimal() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(2.50), "2.5");
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_negative_zero_normalized() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_parse_accepts_decimal_literals() {
        assert_eq!(parse_display("0"), Ok(0.0));
        assert_eq!(parse_display("0.5"), Ok(0.5));
        assert_eq!(parse_display("-12"), Ok(-12.0));
        assert_eq!(parse_display("3."), Ok(3.0));
        assert_eq!(parse_display(".5"), Ok(0.5));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for text in ["", "-", ".", "1e5", "inf", "NaN", "Error", "1.2.3"] {
            assert_eq!(parse_display(text), Err(CalcError::InvalidNumericParse), "{text:?}");
        }
    }
}
