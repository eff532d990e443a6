//! Phone mask formatting.
//!
//! This module implements the `(00) 00000-0000` display mask applied to
//! phone fields. Formatting is a pure string transformation: strip
//! everything that is not a decimal digit, then regroup the digits by
//! position. It carries no state and signals no errors; malformed input
//! degrades to a partial mask.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of digits the mask groups. Digit strings longer than
/// this are passed through unformatted.
pub const MAX_DIGITS: usize = 11;

/// Length of the fully formatted pattern `(00) 00000-0000`.
pub const FORMATTED_MAX_LEN: usize = 15;

/// Canonical placeholder shown in unbound phone fields.
pub const PLACEHOLDER: &str = "(00) 00000-0000";

static NON_DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\D").expect("Failed to compile non-digit regex"));

/// Remove every character that is not a decimal digit.
pub fn strip_non_digits(raw: &str) -> String {
    NON_DIGIT_REGEX.replace_all(raw, "").into_owned()
}

/// Format a raw input string into the `(00) 00000-0000` mask.
///
/// The input is first stripped to its decimal digits, then grouped by
/// digit count `n`:
///
/// - `n == 0`: empty string
/// - `n <= 2`: `(dd`
/// - `n <= 7`: `(dd) ddddd`
/// - `n <= 11`: `(dd) ddddd-dddd`
/// - `n > 11`: the bare digit string, unformatted
///
/// The function is idempotent: formatting an already-formatted value
/// yields the same string, since stripping recovers the same digits.
///
/// # Example
///
/// ```
/// use phone_mask::mask;
///
/// assert_eq!(mask::format("11987654321"), "(11) 98765-4321");
/// assert_eq!(mask::format("(11) 98765-4321"), "(11) 98765-4321");
/// ```
pub fn format(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    group_digits(&digits)
}

/// Apply positional grouping to a digits-only string.
///
/// Callers must pass a string containing only ASCII digits; `format`
/// strips first and is the usual entry point.
pub(crate) fn group_digits(digits: &str) -> String {
    let n = digits.len();

    if n == 0 {
        return String::new();
    }

    if n > MAX_DIGITS {
        // Overflow is left as the raw digit string rather than truncated,
        // so pasted values stay inspectable.
        return digits.to_string();
    }

    if n <= 2 {
        return format!("({}", digits);
    }

    let (area, rest) = digits.split_at(2);

    if n <= 7 {
        return format!("({}) {}", area, rest);
    }

    let (prefix, suffix) = rest.split_at(5);
    format!("({}) {}-{}", area, prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty() {
        assert_eq!(format(""), "");
    }

    #[test]
    fn test_format_short_prefixes() {
        assert_eq!(format("1"), "(1");
        assert_eq!(format("12"), "(12");
    }

    #[test]
    fn test_format_area_code_boundary() {
        assert_eq!(format("123"), "(12) 3");
        assert_eq!(format("1234567"), "(12) 34567");
    }

    #[test]
    fn test_format_full_number() {
        assert_eq!(format("12345678"), "(12) 34567-8");
        assert_eq!(format("12345678901"), "(12) 34567-8901");
        assert_eq!(format("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_format_strips_non_digits() {
        assert_eq!(format("12a34"), format("1234"));
        assert_eq!(format("(11) 98765-4321"), "(11) 98765-4321");
        assert_eq!(format("+55 11 98765 4321"), "5511987654321");
    }

    #[test]
    fn test_format_overflow_passes_through() {
        assert_eq!(format("123456789012"), "123456789012");
        assert_eq!(format("12345678901234"), "12345678901234");
    }

    #[test]
    fn test_format_non_digits_only() {
        assert_eq!(format("abc-()"), "");
    }

    #[test]
    fn test_format_idempotent() {
        for input in [
            "", "1", "12", "123", "1234567", "12345678", "12345678901", "12a34",
        ] {
            let once = format(input);
            assert_eq!(format(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_formatted_max_len_matches_pattern() {
        assert_eq!(format("12345678901").len(), FORMATTED_MAX_LEN);
        assert_eq!(PLACEHOLDER.len(), FORMATTED_MAX_LEN);
    }

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("(11) 98765-4321"), "11987654321");
        assert_eq!(strip_non_digits("no digits"), "");
        assert_eq!(strip_non_digits(""), "");
    }
}
