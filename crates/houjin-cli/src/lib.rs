//! # houjin-cli: Corporate Number Command Line
//!
//! Provides the `houjin` command-line interface over `houjin-core`.
//!
//! ## Subcommands
//!
//! - `houjin digit`: compute the check digit of 13-digit numbers.
//! - `houjin check`: verify 13-digit numbers.
//! - `houjin complete`: prefix 12-digit bodies with their check digit.
//!
//! ```bash
//! houjin check 5070001032626 4070001032626
//! houjin complete 000020100005 --json
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` at least one number failed verification, `2` at least
//! one argument was malformed.

pub mod check;
pub mod complete;
pub mod digit;
pub mod output;

use houjin_core::{ValidationError, CORPORATE_NUMBER_DIGITS};

/// Exit code for a clean run.
pub const EXIT_OK: u8 = 0;

/// Exit code when a well-formed number fails verification.
pub const EXIT_INVALID: u8 = 1;

/// Exit code when an argument is not a usable number.
pub const EXIT_MALFORMED: u8 = 2;

/// Strip a numeric command-line argument down to its digits.
///
/// Surrounding whitespace and `-` separators are ignored. The digits are
/// returned as text so leading zeros and the length survive.
///
/// # Errors
///
/// Returns [`ValidationError::NotNumeric`] if anything else remains.
pub fn digits_arg(raw: &str) -> Result<String, ValidationError> {
    let digits: String = raw.trim().chars().filter(|c| *c != '-').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric(raw.to_string()));
    }
    Ok(digits)
}

/// Read the 12-digit body of a 13-digit corporate number argument.
///
/// The leading digit is dropped unread, zero or not.
///
/// # Errors
///
/// Returns [`ValidationError::NotNumeric`] for non-digit input and
/// [`ValidationError::InvalidLength`] with the digit count of the text when
/// it is not 13 digits long.
pub fn number_body_arg(raw: &str) -> Result<u64, ValidationError> {
    let digits = digits_arg(raw)?;
    if digits.len() != CORPORATE_NUMBER_DIGITS {
        return Err(ValidationError::InvalidLength {
            digits: digits.len(),
        });
    }
    digits[1..]
        .parse()
        .map_err(|_| ValidationError::NotNumeric(raw.to_string()))
}
