//! Error types for structured error handling.
//!
//! Every fallible operation in this crate reports one of the
//! [`RandomError`] variants. Validation always happens before the bit
//! source is touched, so a failed call never consumes random state.

use thiserror::Error;

/// Categorised generator errors.
///
/// # Variants
/// - `InvalidArgument`: Malformed input (NaN or infinite bound, non-positive
///   count, roll count or logarithm base, non-positive weight)
/// - `InvalidRange`: Integer bounds with `max < min`
/// - `EmptyTable`: Selection attempted on a weighted table with no entries
/// - `RangeExceeded`: Percentile conversion cannot fit the table into its scale
///
/// # Examples
/// ```
/// use randkit_core::types::RandomError;
///
/// let err = RandomError::InvalidRange { min: 10, max: 3 };
/// assert_eq!(format!("{}", err), "Invalid range: max (3) is less than min (10)");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// Malformed input to a generator call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Integer upper bound below the lower bound.
    #[error("Invalid range: max ({max}) is less than min ({min})")]
    InvalidRange {
        /// Requested lower bound
        min: i128,
        /// Requested upper bound
        max: i128,
    },

    /// Selection from a table with zero entries.
    #[error("Table is empty, populate table before selecting a value")]
    EmptyTable,

    /// Percentile conversion overflowed the requested scale.
    #[error("Range exceeded: table needs at least {needed} slots but the scale is {scale}")]
    RangeExceeded {
        /// Number of slots available (the die size)
        scale: u32,
        /// Number of slots the table required when conversion stopped
        needed: u32,
    },
}

impl RandomError {
    /// Shorthand for an [`RandomError::InvalidArgument`] with a formatted message.
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RandomError::InvalidArgument(msg.into())
    }

    /// Shorthand for an [`RandomError::InvalidRange`] from any integer pair.
    pub(crate) fn range(min: impl Into<i128>, max: impl Into<i128>) -> Self {
        RandomError::InvalidRange {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = RandomError::invalid("rolls must be at least 1, got 0");
        assert_eq!(
            format!("{}", err),
            "Invalid argument: rolls must be at least 1, got 0"
        );
    }

    #[test]
    fn test_range_helper_widens() {
        let err = RandomError::range(i64::MAX, i64::MIN);
        assert_eq!(
            err,
            RandomError::InvalidRange {
                min: i64::MAX as i128,
                max: i64::MIN as i128
            }
        );
    }

    #[test]
    fn test_range_exceeded_display() {
        let err = RandomError::RangeExceeded {
            scale: 6,
            needed: 8,
        };
        assert!(format!("{}", err).contains("scale is 6"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&RandomError::EmptyTable);
    }
}
