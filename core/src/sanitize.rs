//! # Keystroke Sanitization Filter
//!
//! Constrains a field, after each keystroke, to characters that can still
//! grow into a signed decimal number: an optional leading `-`, digits,
//! and at most one `.`.
//!
//! Advisory only. Fragments like `""`, `"-"` or `"."` all pass, so the
//! validator remains the real gate.

use std::borrow::Cow;

/// Applies one corrective step to a field value.
///
/// If `value` no longer matches the plausible-number shape, exactly the
/// most recently typed character is dropped; earlier offenders are never
/// fixed retroactively.
pub fn sanitize(value: &str) -> Cow<'_, str> {
    if is_plausible_number(value) {
        return Cow::Borrowed(value);
    }

    let mut corrected = value.to_string();
    corrected.pop();
    Cow::Owned(corrected)
}

/// Shape check for `-?` digits `.?` digits, all parts optional.
fn is_plausible_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);

    let mut seen_dot = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fragments_pass_unchanged() {
        for value in ["", "-", ".", "-.", "12", "-12", "1.5", "-0.25", "12."] {
            assert_eq!(sanitize(value), value, "rejected {value:?}");
        }
    }

    #[test]
    fn trailing_letter_is_dropped() {
        assert_eq!(sanitize("12a"), "12");
        assert_eq!(sanitize("-3x"), "-3");
    }

    #[test]
    fn second_dot_is_dropped() {
        assert_eq!(sanitize("1.2."), "1.2");
    }

    #[test]
    fn only_the_last_character_is_corrected() {
        // The filter runs per keystroke, so a value that is already
        // multiple characters past valid only loses its newest one.
        assert_eq!(sanitize("1.2.3"), "1.2.");
    }

    #[test]
    fn misplaced_sign_is_dropped() {
        assert_eq!(sanitize("12-"), "12");
    }
}
