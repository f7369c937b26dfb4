//! Number parsing and extraction from measurement text.
//!
//! Two entry points with different strictness:
//! - [`parse_numeric`] accepts a cell only if the whole cell is a number
//!   (used to type incoming cells).
//! - [`extract_number`] pulls the first decimal token out of arbitrary text
//!   (used by the normalizer for values like `"3.7 mg"`).

use std::sync::LazyLock;

use regex::Regex;

/// Optional sign, then either `digits.digits` / `.digits` or plain `digits`.
/// The fractional alternative is tried first so `12.5` is not cut to `12`.
/// The sign binds to both alternatives: `"-7"` yields `-7.0`, where the
/// unparenthesized `[-+]?\d*\.\d+|\d+` would match only `7`.
static DECIMAL_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?(?:\d*\.\d+|\d+)").expect("Invalid decimal token regex")
});

/// A whole number written with thousands groups: `1,234`, `12 345.6`.
static GROUPED_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?\d{1,3}(?:[, \x{a0}]\d{3})+(?:\.\d+)?$")
        .expect("Invalid grouped number regex")
});

/// Marker that flags a censored ("less than") result.
pub const LESS_THAN_MARKER: char = '<';

/// Parse a whole cell as a number (f64).
///
/// Handles common numeric formats:
/// - Standard numbers: "123", "-45.67"
/// - Thousands separators: "1,234,567", "12 345"
/// - Whitespace: "  123  "
/// - Scientific notation: "1.23e5"
///
/// Separators are only removed when every group after the first has exactly
/// three digits. `"1,5"` or `"12 34"` are not numbers here and stay text.
///
/// Returns None if the value cannot be parsed as a number.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    let cleaned = if GROUPED_NUMBER_REGEX.is_match(trimmed) {
        trimmed.replace([',', ' ', '\u{a0}'], "")
    } else {
        trimmed.to_string()
    };

    if cleaned.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    if cleaned.eq_ignore_ascii_case("inf") || cleaned.eq_ignore_ascii_case("infinity") {
        return Some(f64::INFINITY);
    }
    if cleaned.eq_ignore_ascii_case("-inf") || cleaned.eq_ignore_ascii_case("-infinity") {
        return Some(f64::NEG_INFINITY);
    }

    cleaned.parse().ok()
}

/// Extract the first decimal number embedded in `text`.
///
/// Scans left to right and parses the leftmost match of
/// "optional sign, digits, optional fractional part". Exponents are not part
/// of the token, so `"1e5"` yields `1.0`.
pub fn extract_number(text: &str) -> Option<f64> {
    let token = DECIMAL_TOKEN_REGEX.find(text)?;
    token.as_str().parse().ok()
}

/// Returns true if the text carries the less-than censoring marker anywhere.
pub fn is_censored(text: &str) -> bool {
    text.contains(LESS_THAN_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_integer() {
        assert_eq!(parse_numeric("123"), Some(123.0));
        assert_eq!(parse_numeric("-456"), Some(-456.0));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_numeric("123.45"), Some(123.45));
        assert_eq!(parse_numeric("-0.5"), Some(-0.5));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_numeric("1,234,567"), Some(1234567.0));
        assert_eq!(parse_numeric("1,234.56"), Some(1234.56));
        assert_eq!(parse_numeric("12 345"), Some(12345.0));
        assert_eq!(parse_numeric("-1\u{a0}000"), Some(-1000.0));
    }

    #[test]
    fn test_misplaced_separators_rejected() {
        assert_eq!(parse_numeric("1,5"), None);
        assert_eq!(parse_numeric("12 34"), None);
        assert_eq!(parse_numeric("1,2,3"), None);
        assert_eq!(parse_numeric("1234,567"), None);
        assert_eq!(parse_numeric("1,234,56"), None);
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_numeric("1.23e5"), Some(123000.0));
        assert_eq!(parse_numeric("1.5E-3"), Some(0.0015));
    }

    #[test]
    fn test_parse_rejects_embedded_text() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("3.7 mg"), None);
        assert_eq!(parse_numeric("<5"), None);
        assert_eq!(parse_numeric("12.34.56"), None);
    }

    #[test]
    fn test_special_values() {
        assert!(parse_numeric("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_numeric("inf"), Some(f64::INFINITY));
        assert_eq!(parse_numeric("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_extract_embedded_decimal() {
        assert_eq!(extract_number("value: 12.5 units"), Some(12.5));
        assert_eq!(extract_number("3.7 mg"), Some(3.7));
        assert_eq!(extract_number("<5"), Some(5.0));
    }

    #[test]
    fn test_extract_first_match_wins() {
        assert_eq!(extract_number("between 4 and 9.5"), Some(4.0));
        assert_eq!(extract_number("12.34.56"), Some(12.34));
    }

    #[test]
    fn test_extract_sign_and_leading_dot() {
        assert_eq!(extract_number("delta -2.25"), Some(-2.25));
        assert_eq!(extract_number("-7"), Some(-7.0));
        assert_eq!(extract_number("+3"), Some(3.0));
        assert_eq!(extract_number("approx .5"), Some(0.5));
    }

    #[test]
    fn test_extract_trailing_dot_keeps_integer() {
        assert_eq!(extract_number("12."), Some(12.0));
    }

    #[test]
    fn test_extract_no_exponent() {
        assert_eq!(extract_number("1e5"), Some(1.0));
    }

    #[test]
    fn test_extract_none() {
        assert_eq!(extract_number("n/a"), None);
        assert_eq!(extract_number(""), None);
        assert_eq!(extract_number("-"), None);
        assert_eq!(extract_number("."), None);
    }

    #[test]
    fn test_is_censored() {
        assert!(is_censored("<5"));
        assert!(is_censored("result < 0.1 ng/mL"));
        assert!(!is_censored(">5"));
        assert!(!is_censored("5"));
    }
}
