//! # Calculation Core
//!
//! Everything with decision logic lives here: the keystroke sanitization
//! filter, the ordered input validator, the validated dimensions model and
//! the area computation, plus the classification of every outcome into a
//! reportable alert.
//!
//! **Architectural Note:**
//! This crate never touches the terminal. Presentation layers depend on
//! [`calculate`] and [`sanitize`] and render the resulting
//! [`Outcome`]/[`Alert`](rectarea_common::alert::Alert) however they like.

pub mod dimensions;
pub mod outcome;
pub mod sanitize;
pub mod validate;

pub use dimensions::{Dimensions, MAX_DIMENSION};
pub use outcome::{Outcome, calculate};
pub use sanitize::sanitize;
pub use validate::{ValidationError, validate};
