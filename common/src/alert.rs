//! # Alert Model
//!
//! The presentation-facing shape of every outcome the calculator can
//! report. The core classifies what happened; the terminal layer decides
//! how an [`Alert`] looks on screen.

use std::fmt;

/// How loudly an alert should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{label}")
    }
}

/// A single user-facing notification.
///
/// `auto_dismiss` marks alerts that confirm an action (success, form
/// cleared) and may disappear on their own; warnings and errors stay on
/// screen until the user acts again.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub severity: Severity,
    pub title: &'static str,
    pub message: String,
    pub auto_dismiss: bool,
}

impl Alert {
    pub fn sticky(severity: Severity, title: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            title,
            message: message.into(),
            auto_dismiss: false,
        }
    }

    pub fn transient(severity: Severity, title: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            title,
            message: message.into(),
            auto_dismiss: true,
        }
    }
}
