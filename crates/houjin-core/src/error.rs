//! # Error Hierarchy
//!
//! Structured error types for corporate number handling, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every variant carries the observed input so a caller can report exactly
//! which identifier was rejected and why.

use thiserror::Error;

/// Validation errors for a single corporate number or body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The decimal rendering of the number is not 13 characters long.
    #[error("corporate number must be 13 digits; got {digits} digits")]
    InvalidLength {
        /// Number of decimal digits actually observed.
        digits: usize,
    },

    /// A body passed on its own does not fit in 12 decimal digits.
    #[error("corporate number body must fit in 12 digits; got {0}")]
    BodyOutOfRange(u64),

    /// The leading digit does not match the digit computed from the body.
    ///
    /// `number` renders zero-padded to 13 digits, so a leading `0` typed by
    /// the caller shows up in the message.
    #[error("check digit mismatch for {number:013}: expected {expected}, found {actual}")]
    CheckDigitMismatch {
        /// The rejected number.
        number: u64,
        /// Check digit computed from the body.
        expected: u8,
        /// Leading digit actually present.
        actual: u8,
    },

    /// A textual corporate number contains something other than ASCII digits.
    #[error("corporate number must contain only digits: \"{0}\"")]
    NotNumeric(String),
}

/// Errors raised when validating a list of corporate numbers as a unit.
///
/// A single bad element rejects the whole list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// No numbers were supplied.
    #[error("at least one corporate number is required")]
    Empty,

    /// More numbers were supplied than a single lookup accepts.
    #[error("at most {max} corporate numbers are accepted; got {count}")]
    TooMany {
        /// Number of elements supplied.
        count: usize,
        /// Upper bound.
        max: usize,
    },

    /// One element failed validation.
    #[error("corporate number at index {index} is invalid: {source}")]
    Invalid {
        /// Zero-based position of the offending element.
        index: usize,
        /// Why it was rejected.
        #[source]
        source: ValidationError,
    },
}
