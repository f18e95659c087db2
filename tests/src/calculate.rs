use rectarea_common::alert::Severity;
use rectarea_core::{Outcome, ValidationError, calculate, sanitize};

/// Drives the full request/response contract the presentation layer
/// relies on: raw strings in, classified outcome with alert out.
#[test]
fn accepted_inputs_produce_rounded_areas() {
    let cases = [
        ("3", "4", 12.0),
        ("2.5", "4", 10.0),
        ("0.1", "0.2", 0.02),
        ("2.005", "1", 2.01),
        ("1000000", "1000000", 1_000_000_000_000.0),
        ("  7 ", " 2 ", 14.0),
    ];

    for (base, height, expected) in cases {
        match calculate(base, height) {
            Outcome::Success { dimensions } => {
                assert_eq!(dimensions.area(), expected, "area for {base:?} × {height:?}");
            }
            other => panic!("expected success for {base:?} × {height:?}, got {other:?}"),
        }
    }
}

#[test]
fn rejection_taxonomy_covers_every_reason() {
    let cases = [
        ("", "5", ValidationError::EmptyField),
        ("5", "", ValidationError::EmptyField),
        ("", "", ValidationError::EmptyField),
        ("abc", "5", ValidationError::NotANumber),
        ("5", "xyz", ValidationError::NotANumber),
        ("-3", "5", ValidationError::NonPositive),
        ("0", "5", ValidationError::NonPositive),
        ("5", "0", ValidationError::NonPositive),
        ("2000000", "5", ValidationError::TooLarge),
        ("1000000.01", "1", ValidationError::TooLarge),
    ];

    for (base, height, reason) in cases {
        assert_eq!(
            calculate(base, height),
            Outcome::Rejected(reason),
            "classification for {base:?} / {height:?}"
        );
    }
}

/// Replays the keystroke pipeline the form runs: each typed character is
/// appended and the filter applies its single corrective step.
#[test]
fn typing_pipeline_feeds_the_validator() {
    let mut field = String::new();
    for ch in "1x2a.5.".chars() {
        field.push(ch);
        field = sanitize(&field).into_owned();
    }
    assert_eq!(field, "12.5");

    match calculate(&field, "2") {
        Outcome::Success { dimensions } => assert_eq!(dimensions.area(), 25.0),
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn alerts_match_the_reporting_table() {
    let rows = [
        ("4", "2.5", Severity::Success, "Calculation succeeded", true),
        ("", "5", Severity::Warning, "Empty fields", false),
        ("abc", "5", Severity::Error, "Invalid values", false),
        ("-1", "5", Severity::Error, "Negative numbers or zero", false),
        ("2000000", "5", Severity::Warning, "Numbers too large", false),
    ];

    for (base, height, severity, title, auto_dismiss) in rows {
        let alert = calculate(base, height).alert();
        assert_eq!(alert.severity, severity, "severity for {base:?}/{height:?}");
        assert_eq!(alert.title, title);
        assert_eq!(alert.auto_dismiss, auto_dismiss);
    }

    let cleared = Outcome::Cleared.alert();
    assert_eq!(cleared.severity, Severity::Info);
    assert_eq!(cleared.message, "All fields have been erased.");
    assert!(cleared.auto_dismiss);
}

#[test]
fn success_message_uses_the_display_form_of_the_area() {
    let alert = calculate("3", "5").alert();
    assert_eq!(alert.message, "The rectangle area is 15 cm²");

    let alert = calculate("0.5", "0.52").alert();
    assert_eq!(alert.message, "The rectangle area is 0.26 cm²");
}

#[test]
fn calculate_carries_no_state_between_calls() {
    let first = calculate("9.9", "1.1");
    let second = calculate("9.9", "1.1");
    assert_eq!(first, second);

    // A rejected call in between changes nothing.
    let _ = calculate("oops", "1");
    assert_eq!(calculate("9.9", "1.1"), first);
}
