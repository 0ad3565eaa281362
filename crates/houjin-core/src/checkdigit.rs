//! # Check Digit Engine
//!
//! Computes and verifies the check digit of a 13-digit corporate number.
//!
//! The leading digit of a corporate number is the check digit. The other
//! twelve digits (the body) determine it:
//!
//! ```text
//! index:  0 | 1  2  3  4  5  6  7  8  9 10 11 12
//!         C | E  O  E  O  E  O  E  O  E  O  E  O
//!
//! check = 9 - ((sum(E) * 2 + sum(O)) mod 9)
//! ```
//!
//! Counting rows from 1 at the least significant end, `E` digits sit on even
//! rows and `O` digits on odd rows. Index 0 is never read.
//!
//! The result lies in `1..=9` and is never reduced mod 10: the published
//! formula keeps 9 as 9.
//!
//! ## Reference
//!
//! National Tax Agency, "法人番号のチェックデジット" (checkdigit.pdf).

use crate::error::ValidationError;

/// Number of decimal digits in a corporate number.
pub const CORPORATE_NUMBER_DIGITS: usize = 13;

/// Number of decimal digits in the body that follows the check digit.
pub const BODY_DIGITS: usize = CORPORATE_NUMBER_DIGITS - 1;

/// `10^12`: splits the check digit from the body and bounds the body.
pub(crate) const BODY_MODULUS: u64 = 1_000_000_000_000;

/// Compute the check digit implied by the trailing 12 digits of `number`.
///
/// The leading digit of `number` does not influence the result.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidLength`] if the decimal rendering of
/// `number` is not exactly 13 digits, carrying the observed digit count.
///
/// # Examples
///
/// ```
/// use houjin_core::compute_check_digit;
///
/// assert_eq!(compute_check_digit(5070001032626).unwrap(), 5);
/// assert!(compute_check_digit(1234).is_err());
/// ```
pub fn compute_check_digit(number: u64) -> Result<u8, ValidationError> {
    let (_, body) = split(number)?;
    Ok(digit_from_body(body))
}

/// Report whether the leading digit of `number` is its correct check digit.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidLength`] under the same condition as
/// [`compute_check_digit`].
///
/// # Examples
///
/// ```
/// use houjin_core::is_valid;
///
/// assert!(is_valid(5070001032626).unwrap());
/// assert!(!is_valid(4070001032626).unwrap());
/// ```
pub fn is_valid(number: u64) -> Result<bool, ValidationError> {
    let (leading, body) = split(number)?;
    Ok(leading == digit_from_body(body))
}

/// Compute the check digit for a bare body.
///
/// Bodies frequently start with zeros, so `body` is read as if left-padded
/// to 12 digits: `20100005` is the body `000020100005`.
///
/// # Errors
///
/// Returns [`ValidationError::BodyOutOfRange`] if `body` does not fit in
/// 12 decimal digits.
pub fn check_digit_for_body(body: u64) -> Result<u8, ValidationError> {
    if body >= BODY_MODULUS {
        return Err(ValidationError::BodyOutOfRange(body));
    }
    Ok(digit_from_body(body))
}

/// Number of decimal digits in `n` (`0` has one digit).
pub(crate) fn decimal_len(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Split a 13-digit number into its leading digit and 12-digit body.
pub(crate) fn split(number: u64) -> Result<(u8, u64), ValidationError> {
    let digits = decimal_len(number);
    if digits != CORPORATE_NUMBER_DIGITS {
        return Err(ValidationError::InvalidLength { digits });
    }
    // Quotient is a single digit once the length holds.
    let leading = (number / BODY_MODULUS) as u8;
    Ok((leading, number % BODY_MODULUS))
}

/// Weighted-sum formula over a body below `10^12`.
fn digit_from_body(body: u64) -> u8 {
    let mut rest = body;
    let mut even_sum = 0u64;
    let mut odd_sum = 0u64;

    // Position 0 is the least significant digit (string index 12).
    for position in 0..BODY_DIGITS {
        let digit = rest % 10;
        rest /= 10;
        if position % 2 == 0 {
            odd_sum += digit;
        } else {
            even_sum += digit;
        }
    }

    (9 - (even_sum * 2 + odd_sum) % 9) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[(u64, u8)] = &[
        (5070001032626, 5),
        (7000020100005, 7),
        (9000020102024, 9),
        (1010401089234, 1),
        (6011001106696, 6),
        (8010403022079, 8),
        (3011103003992, 3),
    ];

    const INVALID: &[u64] = &[
        4070001032626,
        6000020100005,
        8000020102024,
        2010401089234,
        7011001106696,
        9010403022079,
        1011103003992,
    ];

    #[test]
    fn computes_known_check_digits() {
        for &(number, expected) in VALID {
            assert_eq!(
                compute_check_digit(number).unwrap(),
                expected,
                "check digit for {number}"
            );
        }
    }

    #[test]
    fn known_numbers_are_valid() {
        for &(number, _) in VALID {
            assert!(is_valid(number).unwrap(), "{number} should be valid");
        }
    }

    #[test]
    fn altered_leading_digit_is_invalid() {
        for &number in INVALID {
            assert!(!is_valid(number).unwrap(), "{number} should be invalid");
        }
    }

    #[test]
    fn leading_digit_does_not_affect_computation() {
        assert_eq!(compute_check_digit(4070001032626).unwrap(), 5);
        assert_eq!(compute_check_digit(9070001032626).unwrap(), 5);
    }

    #[test]
    fn nine_is_not_wrapped_to_zero() {
        assert_eq!(compute_check_digit(9000020102024).unwrap(), 9);
        // All-zero body: 9 - (0 mod 9) = 9.
        assert_eq!(compute_check_digit(1_000_000_000_000).unwrap(), 9);
        assert!(is_valid(9_000_000_000_000).unwrap());
    }

    #[test]
    fn short_number_reports_digit_count() {
        let err = compute_check_digit(1234).unwrap_err();
        assert_eq!(err, ValidationError::InvalidLength { digits: 4 });
        assert_eq!(
            err.to_string(),
            "corporate number must be 13 digits; got 4 digits"
        );
    }

    #[test]
    fn is_valid_propagates_length_error() {
        assert_eq!(
            is_valid(1234).unwrap_err(),
            ValidationError::InvalidLength { digits: 4 }
        );
        assert_eq!(
            is_valid(10_000_000_000_000).unwrap_err(),
            ValidationError::InvalidLength { digits: 14 }
        );
    }

    #[test]
    fn zero_has_one_digit() {
        assert_eq!(
            compute_check_digit(0).unwrap_err(),
            ValidationError::InvalidLength { digits: 1 }
        );
    }

    #[test]
    fn u64_max_is_rejected() {
        assert_eq!(
            compute_check_digit(u64::MAX).unwrap_err(),
            ValidationError::InvalidLength { digits: 20 }
        );
    }

    #[test]
    fn length_boundaries() {
        assert!(compute_check_digit(999_999_999_999).is_err());
        assert!(compute_check_digit(1_000_000_000_000).is_ok());
        assert!(compute_check_digit(9_999_999_999_999).is_ok());
        assert!(compute_check_digit(10_000_000_000_000).is_err());
    }

    #[test]
    fn body_with_leading_zeros() {
        // 7000020100005 has body 000020100005.
        assert_eq!(check_digit_for_body(20100005).unwrap(), 7);
        assert_eq!(check_digit_for_body(70001032626).unwrap(), 5);
        assert_eq!(check_digit_for_body(0).unwrap(), 9);
    }

    #[test]
    fn body_out_of_range() {
        assert_eq!(
            check_digit_for_body(BODY_MODULUS).unwrap_err(),
            ValidationError::BodyOutOfRange(BODY_MODULUS)
        );
        assert!(check_digit_for_body(BODY_MODULUS - 1).is_ok());
    }

    #[test]
    fn decimal_len_matches_string_rendering() {
        for n in [0, 9, 10, 99, 100, 1234, BODY_MODULUS, u64::MAX] {
            assert_eq!(decimal_len(n), n.to_string().len(), "len of {n}");
        }
    }
}
