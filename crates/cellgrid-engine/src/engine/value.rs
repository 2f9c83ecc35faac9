//! Literal value validation.

use regex::Regex;
use std::sync::OnceLock;

use super::error::{EvalError, EvalResult};

/// Parse literal cell text into a number.
///
/// Accepts an optional sign, at least one digit, and an optional fractional
/// part with at least one digit. An integer part of two or more digits that
/// opens with `00` is rejected, as is anything else (empty, alphabetic,
/// surrounding whitespace, exponents).
pub fn parse_value(text: &str) -> EvalResult<f64> {
    let invalid = || EvalError::InvalidValue(text.to_string());

    let caps = literal_re().captures(text).ok_or_else(invalid)?;
    if caps["int"].starts_with("00") {
        return Err(invalid());
    }
    text.parse::<f64>().map_err(|_| invalid())
}

fn literal_re() -> &'static Regex {
    static LITERAL_RE: OnceLock<Regex> = OnceLock::new();
    LITERAL_RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?<int>[0-9]+)(?:\.[0-9]+)?$").expect("literal value regex must compile")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_decimals() {
        assert_eq!(parse_value("1.0"), Ok(1.0));
        assert_eq!(parse_value("2.99"), Ok(2.99));
        assert_eq!(parse_value("100"), Ok(100.0));
        assert_eq!(parse_value("0"), Ok(0.0));
        assert_eq!(parse_value("0.25"), Ok(0.25));
        assert_eq!(parse_value("-7.5"), Ok(-7.5));
        assert_eq!(parse_value("+3"), Ok(3.0));
    }

    #[test]
    fn test_parse_value_single_leading_zero_is_allowed() {
        assert_eq!(parse_value("01"), Ok(1.0));
    }

    #[test]
    fn test_parse_value_rejects_repeated_leading_zeros() {
        for text in ["00000", "00", "00.5", "-001"] {
            assert_eq!(
                parse_value(text),
                Err(EvalError::InvalidValue(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_value_rejects_non_numeric() {
        for text in ["", "A", "abc", "1.", ".5", "1.2.3", "1e5", " 1", "1 ", "--1", "NaN", "inf"] {
            assert_eq!(
                parse_value(text),
                Err(EvalError::InvalidValue(text.to_string())),
                "{text:?}"
            );
        }
    }
}
