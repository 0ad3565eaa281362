//! # Corporate Number Newtype
//!
//! [`CorporateNumber`] is a 13-digit corporate number whose check digit has
//! been verified. Holding one is proof that the value passed
//! [`is_valid`](crate::is_valid); there is no way to build an unchecked one.
//!
//! ## Validation
//!
//! - Exactly 13 decimal digits
//! - Leading digit equals the check digit computed from the body
//! - Textual input may carry surrounding whitespace and hyphen separators
//!   (`"5-0700-0103-2626"`); anything else non-numeric is rejected
//!
//! ## Serialization
//!
//! Serialized as the 13-character decimal string, which is how the registry
//! carries it. Deserializes from either a string or an integer and validates
//! in both cases.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checkdigit::{check_digit_for_body, split, BODY_MODULUS, CORPORATE_NUMBER_DIGITS};
use crate::error::ValidationError;

/// A validated 13-digit corporate number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCorporateNumber", into = "String")]
pub struct CorporateNumber(u64);

impl CorporateNumber {
    /// Validate `number` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLength`] if `number` is not 13
    /// digits, or [`ValidationError::CheckDigitMismatch`] if its leading
    /// digit is wrong.
    pub fn new(number: u64) -> Result<Self, ValidationError> {
        let (leading, body) = split(number)?;
        Self::verified(number, leading, body)
    }

    /// Build a corporate number from its 12-digit body by prefixing the
    /// computed check digit.
    ///
    /// `body` is read as if left-padded to 12 digits, so
    /// `from_body(20100005)` yields `7000020100005`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BodyOutOfRange`] if `body` does not fit in
    /// 12 digits.
    pub fn from_body(body: u64) -> Result<Self, ValidationError> {
        let check = check_digit_for_body(body)?;
        // check is in 1..=9, so the result always has 13 digits.
        Ok(Self(u64::from(check) * BODY_MODULUS + body))
    }

    /// The number as an integer.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The leading check digit.
    pub fn check_digit(&self) -> u8 {
        (self.0 / BODY_MODULUS) as u8
    }

    /// The 12 digits following the check digit.
    pub fn body(&self) -> u64 {
        self.0 % BODY_MODULUS
    }

    fn verified(number: u64, actual: u8, body: u64) -> Result<Self, ValidationError> {
        let expected = check_digit_for_body(body)?;
        if actual != expected {
            return Err(ValidationError::CheckDigitMismatch {
                number,
                expected,
                actual,
            });
        }
        Ok(Self(number))
    }
}

impl std::fmt::Display for CorporateNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CorporateNumber {
    type Err = ValidationError;

    /// Parse a corporate number from text.
    ///
    /// Surrounding whitespace and `-` separators are ignored. A leading `0`
    /// is kept as the check digit (and therefore rejected as a mismatch)
    /// rather than silently dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.trim().chars().filter(|c| *c != '-').collect();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotNumeric(s.to_string()));
        }
        if digits.len() != CORPORATE_NUMBER_DIGITS {
            return Err(ValidationError::InvalidLength {
                digits: digits.len(),
            });
        }

        let number: u64 = digits
            .parse()
            .map_err(|_| ValidationError::NotNumeric(s.to_string()))?;
        let leading = digits.as_bytes()[0] - b'0';
        Self::verified(number, leading, number % BODY_MODULUS)
    }
}

impl TryFrom<u64> for CorporateNumber {
    type Error = ValidationError;

    fn try_from(number: u64) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<CorporateNumber> for u64 {
    fn from(number: CorporateNumber) -> Self {
        number.0
    }
}

impl From<CorporateNumber> for String {
    fn from(number: CorporateNumber) -> Self {
        number.to_string()
    }
}

/// Wire shapes accepted when deserializing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCorporateNumber {
    Text(String),
    Integer(u64),
}

impl TryFrom<RawCorporateNumber> for CorporateNumber {
    type Error = ValidationError;

    fn try_from(raw: RawCorporateNumber) -> Result<Self, Self::Error> {
        match raw {
            RawCorporateNumber::Text(s) => s.parse(),
            RawCorporateNumber::Integer(n) => Self::new(n),
        }
    }
}
