//! # Batch Validation
//!
//! Validates a list of corporate numbers as one unit, the way a registry
//! lookup by number receives them. A single bad element rejects the list.

use crate::error::BatchError;
use crate::identity::CorporateNumber;

/// Maximum number of corporate numbers accepted by a single lookup.
pub const MAX_BATCH_SIZE: usize = 10;

/// Validate every number in `numbers`, in order.
///
/// Returns the typed numbers on success. Stops at the first element that
/// fails and reports its index.
///
/// # Errors
///
/// - [`BatchError::Empty`] if `numbers` is empty.
/// - [`BatchError::TooMany`] if it holds more than [`MAX_BATCH_SIZE`] numbers.
/// - [`BatchError::Invalid`] for the first element that is not a valid
///   corporate number.
pub fn validate_all(numbers: &[u64]) -> Result<Vec<CorporateNumber>, BatchError> {
    if numbers.is_empty() {
        return Err(BatchError::Empty);
    }
    if numbers.len() > MAX_BATCH_SIZE {
        return Err(BatchError::TooMany {
            count: numbers.len(),
            max: MAX_BATCH_SIZE,
        });
    }

    numbers
        .iter()
        .enumerate()
        .map(|(index, &number)| {
            CorporateNumber::new(number).map_err(|source| BatchError::Invalid { index, source })
        })
        .collect()
}
