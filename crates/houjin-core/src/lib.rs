#![deny(missing_docs)]

//! # houjin-core: Corporate Number Check Digits
//!
//! Computes and verifies the check digit of the 13-digit corporate number
//! (法人番号) issued by the National Tax Agency. It depends on `serde` and
//! `thiserror` only; there is no I/O and no global state.
//!
//! ## Design Principles
//!
//! 1. **Pure functions at the core.** [`compute_check_digit`] and
//!    [`is_valid`] take a `u64` and return a `Result`. Same input, same
//!    output, safe to call from any thread.
//!
//! 2. **[`CorporateNumber`] newtype.** A `u64` that has passed the check.
//!    Code that receives one never re-validates.
//!
//! 3. **Structured errors.** [`ValidationError`] and [`BatchError`] carry
//!    the observed input. The digit count in
//!    [`ValidationError::InvalidLength`] is the one actually seen.
//!
//! ## Example
//!
//! ```
//! use houjin_core::{compute_check_digit, is_valid, CorporateNumber};
//!
//! assert_eq!(compute_check_digit(5070001032626).unwrap(), 5);
//! assert!(is_valid(5070001032626).unwrap());
//!
//! let number: CorporateNumber = "7000020100005".parse().unwrap();
//! assert_eq!(number.check_digit(), 7);
//! ```

pub mod batch;
pub mod checkdigit;
pub mod error;
pub mod identity;

// Re-export primary types at crate root for ergonomic imports.
pub use batch::{validate_all, MAX_BATCH_SIZE};
pub use checkdigit::{
    check_digit_for_body, compute_check_digit, is_valid, BODY_DIGITS, CORPORATE_NUMBER_DIGITS,
};
pub use error::{BatchError, ValidationError};
pub use identity::CorporateNumber;
