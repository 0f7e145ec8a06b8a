//! Parsing amounts from text
//!
//! This is the only place a value can turn out not to be a number: once an
//! amount is an `i64`, every calculator operation accepts it.

use crate::error::{CalculatorError, CalculatorResult};

/// Parse an amount from a string
///
/// Accepts an optional leading `+` or `-` followed by digits. Underscores
/// between digits are ignored, so "1_000" parses as 1000.
pub fn parse_amount(s: &str) -> CalculatorResult<i64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalculatorError::InvalidArgument(
            "amount cannot be empty".into(),
        ));
    }

    let (negative, digits) = if let Some(stripped) = trimmed.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '_')
    {
        return Err(CalculatorError::not_a_number(trimmed));
    }

    // Sign is kept on the string so i64::MIN still parses
    let mut normalized = String::with_capacity(digits.len() + 1);
    if negative {
        normalized.push('-');
    }
    normalized.extend(digits.chars().filter(|c| *c != '_'));

    normalized.parse::<i64>().map_err(|_| {
        CalculatorError::InvalidArgument(format!("'{}' does not fit in a 64-bit integer", trimmed))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_amount("5").unwrap(), 5);
        assert_eq!(parse_amount("0").unwrap(), 0);
        assert_eq!(parse_amount("  42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_amount("-5").unwrap(), -5);
        assert_eq!(parse_amount("+5").unwrap(), 5);
    }

    #[test]
    fn test_parse_separators() {
        assert_eq!(parse_amount("1_000").unwrap(), 1000);
        assert_eq!(parse_amount("-1_000_000").unwrap(), -1_000_000);
    }

    #[test]
    fn test_parse_extremes() {
        assert_eq!(parse_amount("9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(parse_amount("-9223372036854775808").unwrap(), i64::MIN);
    }

    #[test]
    fn test_rejects_non_numbers() {
        for input in ["", "   ", "five", "5a", "-", "+", "1.5", "--5", "_1", "1_", "0x10"] {
            let err = parse_amount(input).unwrap_err();
            assert!(err.is_invalid_argument(), "expected rejection of {:?}", input);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = parse_amount("9223372036854775808").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("64-bit"));
    }
}
