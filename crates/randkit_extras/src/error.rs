//! Error types for the collaborator layer.

use randkit_core::RandomError;
use thiserror::Error;

use crate::registry::PrimitiveKind;

/// Errors raised by the extras layer.
///
/// Core validation failures pass through unchanged as
/// [`ExtrasError::Random`].
///
/// # Examples
/// ```
/// use randkit_extras::ExtrasError;
/// use randkit_core::RandomError;
///
/// let err: ExtrasError = RandomError::EmptyTable.into();
/// assert!(matches!(err, ExtrasError::Random(RandomError::EmptyTable)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtrasError {
    /// Failure reported by a core generator call.
    #[error(transparent)]
    Random(#[from] RandomError),

    /// No generator is registered for the requested primitive kind.
    #[error("No generator registered for primitive kind '{0}'")]
    UnregisteredKind(PrimitiveKind),

    /// A registered generator produced a value of the wrong kind for a field.
    #[error("Field '{field}' expects a {expected} value but the generator produced {found}")]
    TypeMismatch {
        /// Field being populated
        field: String,
        /// Kind the field holds
        expected: PrimitiveKind,
        /// Kind the generator returned
        found: PrimitiveKind,
    },

    /// Dice formula text that could not be parsed or has invalid parts.
    #[error("Invalid dice formula '{input}': {reason}")]
    InvalidFormula {
        /// Offending formula text
        input: String,
        /// What was wrong with it
        reason: String,
    },
}

impl ExtrasError {
    pub(crate) fn formula(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ExtrasError::InvalidFormula {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for extras operations.
pub type Result<T> = std::result::Result<T, ExtrasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through() {
        let err: ExtrasError = RandomError::InvalidRange { min: 5, max: 1 }.into();
        assert_eq!(
            err.to_string(),
            "Invalid range: max (1) is less than min (5)"
        );
    }

    #[test]
    fn test_messages() {
        let err = ExtrasError::UnregisteredKind(PrimitiveKind::DateTime);
        assert_eq!(
            err.to_string(),
            "No generator registered for primitive kind 'datetime'"
        );

        let err = ExtrasError::TypeMismatch {
            field: "age".into(),
            expected: PrimitiveKind::Int,
            found: PrimitiveKind::String,
        };
        assert_eq!(
            err.to_string(),
            "Field 'age' expects a int value but the generator produced string"
        );

        let err = ExtrasError::formula("3q6", "missing 'd'");
        assert_eq!(err.to_string(), "Invalid dice formula '3q6': missing 'd'");
    }
}
