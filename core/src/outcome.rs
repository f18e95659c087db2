//! # Outcome Classification
//!
//! The crate's entry point: one calculation request in, one classified
//! [`Outcome`] out. Every user mistake resolves locally into a
//! `Rejected` value; nothing propagates as a fault.

use rectarea_common::alert::{Alert, Severity};
use tracing::debug;

use crate::dimensions::Dimensions;
use crate::validate::{self, ValidationError};

/// The result of a single calculation or clear request.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Both fields validated; `dimensions.area()` is the rounded result.
    Success { dimensions: Dimensions },
    /// Validation failed; the reason carries the user-facing message.
    Rejected(ValidationError),
    /// The form was reset on request.
    Cleared,
}

/// Runs one complete validate-and-compute cycle over the raw field text.
///
/// Pure and stateless: identical inputs always produce identical
/// outcomes, and nothing is retained between calls.
pub fn calculate(base_text: &str, height_text: &str) -> Outcome {
    match validate::validate(base_text, height_text) {
        Ok(dimensions) => {
            debug!(
                base = dimensions.base(),
                height = dimensions.height(),
                area = dimensions.area(),
                "calculation accepted"
            );
            Outcome::Success { dimensions }
        }
        Err(reason) => {
            debug!(%reason, "calculation rejected");
            Outcome::Rejected(reason)
        }
    }
}

impl Outcome {
    /// Maps the outcome onto the alert table the presentation layer
    /// renders from.
    pub fn alert(&self) -> Alert {
        match self {
            Outcome::Success { dimensions } => Alert::transient(
                Severity::Success,
                "Calculation succeeded",
                format!("The rectangle area is {} cm²", dimensions.area()),
            ),
            Outcome::Rejected(reason) => reason.alert(),
            Outcome::Cleared => Alert::transient(
                Severity::Info,
                "Form cleared",
                "All fields have been erased.",
            ),
        }
    }
}

impl ValidationError {
    /// Alert row for this rejection. Messages come from the `Display`
    /// impl so the error itself stays the single source of wording.
    pub fn alert(&self) -> Alert {
        let (severity, title) = match self {
            ValidationError::EmptyField => (Severity::Warning, "Empty fields"),
            ValidationError::NotANumber => (Severity::Error, "Invalid values"),
            ValidationError::NonPositive => (Severity::Error, "Negative numbers or zero"),
            ValidationError::TooLarge => (Severity::Warning, "Numbers too large"),
        };
        Alert::sticky(severity, title, self.to_string())
    }
}
