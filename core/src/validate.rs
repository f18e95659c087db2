//! # Input Validator
//!
//! Turns the two raw field strings into [`Dimensions`], or classifies
//! exactly why they cannot be.
//!
//! Checks run in a fixed order and the first failure wins, walking the
//! user through the most likely mistake first: nothing typed, malformed
//! text, wrong sign, then magnitude.

use thiserror::Error;

use crate::dimensions::{Dimensions, MAX_DIMENSION};

/// Why a pair of field values was rejected.
///
/// The display text of each variant is the exact message shown to the
/// user (spec'd per category, never a generic "error occurred").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one field is empty after trimming.
    #[error("Please fill in all fields before calculating.")]
    EmptyField,
    /// At least one field has no parseable numeric prefix.
    #[error("Please enter only valid numbers in the fields.")]
    NotANumber,
    /// At least one value is zero or negative.
    #[error("Values must be positive numbers greater than zero.")]
    NonPositive,
    /// At least one value exceeds [`MAX_DIMENSION`].
    #[error("Please enter smaller values for an accurate calculation.")]
    TooLarge,
}

/// Validates both fields and builds the dimensions pair.
///
/// Short-circuits on the first failing check; errors never accumulate.
pub fn validate(base: &str, height: &str) -> Result<Dimensions, ValidationError> {
    let base = base.trim();
    let height = height.trim();

    if base.is_empty() || height.is_empty() {
        return Err(ValidationError::EmptyField);
    }

    let (Some(base), Some(height)) = (parse_prefix(base), parse_prefix(height)) else {
        return Err(ValidationError::NotANumber);
    };

    if base <= 0.0 || height <= 0.0 {
        return Err(ValidationError::NonPositive);
    }

    if base > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ValidationError::TooLarge);
    }

    Ok(Dimensions::new(base, height))
}

/// Parses the longest leading numeric prefix of `s`.
///
/// Accepts `[+-]?` digits, an optional fraction, and an optional
/// exponent; anything after the prefix is ignored, so `"5abc"` parses
/// as 5. Returns `None` only when no prefix exists at all. This keeps
/// the lenient leading-token behavior the sanitization filter was
/// designed around, rather than strict whole-string parsing.
fn parse_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let mut seen_digit = idx > int_start;
    let mut end = if seen_digit { idx } else { 0 };

    if idx < bytes.len() && bytes[idx] == b'.' {
        idx += 1;
        let frac_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        if seen_digit || idx > frac_start {
            seen_digit = true;
            end = idx;
        }
    }

    if !seen_digit {
        return None;
    }

    // Optional exponent, only taken when it is complete.
    let mut exp_idx = end;
    if exp_idx < bytes.len() && matches!(bytes[exp_idx], b'e' | b'E') {
        exp_idx += 1;
        if exp_idx < bytes.len() && matches!(bytes[exp_idx], b'+' | b'-') {
            exp_idx += 1;
        }
        let exp_start = exp_idx;
        while exp_idx < bytes.len() && bytes[exp_idx].is_ascii_digit() {
            exp_idx += 1;
        }
        if exp_idx > exp_start {
            end = exp_idx;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_win_over_everything() {
        assert_eq!(validate("", "5"), Err(ValidationError::EmptyField));
        assert_eq!(validate("5", ""), Err(ValidationError::EmptyField));
        assert_eq!(validate("", ""), Err(ValidationError::EmptyField));
        // Whitespace-only counts as empty.
        assert_eq!(validate("   ", "5"), Err(ValidationError::EmptyField));
    }

    #[test]
    fn non_numeric_text_is_classified() {
        assert_eq!(validate("abc", "5"), Err(ValidationError::NotANumber));
        assert_eq!(validate("5", "xyz"), Err(ValidationError::NotANumber));
        assert_eq!(validate("-", "5"), Err(ValidationError::NotANumber));
        assert_eq!(validate(".", "."), Err(ValidationError::NotANumber));
    }

    #[test]
    fn zero_and_negatives_are_rejected() {
        assert_eq!(validate("-3", "5"), Err(ValidationError::NonPositive));
        assert_eq!(validate("0", "5"), Err(ValidationError::NonPositive));
        assert_eq!(validate("5", "0"), Err(ValidationError::NonPositive));
    }

    #[test]
    fn oversized_values_are_rejected() {
        assert_eq!(validate("2000000", "5"), Err(ValidationError::TooLarge));
        assert_eq!(validate("1000000.01", "1"), Err(ValidationError::TooLarge));
    }

    #[test]
    fn boundary_values_are_accepted() {
        let dims = validate("1000000", "1000000").unwrap();
        assert_eq!(dims.base(), 1_000_000.0);
        assert_eq!(dims.height(), 1_000_000.0);
    }

    #[test]
    fn check_order_is_sign_before_magnitude() {
        // Both violations present: NonPositive is reported first.
        assert_eq!(validate("-2000000", "5"), Err(ValidationError::NonPositive));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let dims = validate("  4 ", " 2.5 ").unwrap();
        assert_eq!(dims.base(), 4.0);
        assert_eq!(dims.height(), 2.5);
    }

    #[test]
    fn leading_prefix_parsing_is_lenient() {
        // Mirrors leading-token parsing: trailing garbage is ignored.
        let dims = validate("5abc", "2").unwrap();
        assert_eq!(dims.base(), 5.0);

        assert_eq!(parse_prefix("3.25"), Some(3.25));
        assert_eq!(parse_prefix(".5"), Some(0.5));
        assert_eq!(parse_prefix("12."), Some(12.0));
        assert_eq!(parse_prefix("2e3"), Some(2000.0));
        assert_eq!(parse_prefix("2e"), Some(2.0));
        assert_eq!(parse_prefix("1.5e-1x"), Some(0.15));
        assert_eq!(parse_prefix("+7"), Some(7.0));
        assert_eq!(parse_prefix("-"), None);
        assert_eq!(parse_prefix("-."), None);
        assert_eq!(parse_prefix("abc"), None);
    }
}
