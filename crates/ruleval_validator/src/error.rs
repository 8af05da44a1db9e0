//! Error types for validation runs.

use ruleval_core::{ConfigurationError, ValidatorError};
use thiserror::Error;

/// Everything `validate()` can fail with.
///
/// Only [`EngineError::Invalid`] means "the data is invalid". The other variants
/// are defects in the rules or in a predicate and never carry aggregated
/// failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The data failed one or more rules
    #[error("Validation failed with {} error(s)", .0.failure_count())]
    Invalid(#[from] ValidatorError),

    /// The engine or a rule is misconfigured
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A predicate could not run
    #[error("Predicate '{identifier}' failed on property '{property}': {message}")]
    Predicate {
        identifier: String,
        property: String,
        message: String,
    },
}

impl EngineError {
    /// Creates a new predicate defect error.
    pub fn predicate(
        identifier: impl Into<String>,
        property: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Predicate {
            identifier: identifier.into(),
            property: property.into(),
            message: message.into(),
        }
    }

    /// Returns true when the data itself was invalid.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The aggregated failure chain, if the data was invalid.
    pub fn validator_error(&self) -> Option<&ValidatorError> {
        match self {
            Self::Invalid(chain) => Some(chain),
            _ => None,
        }
    }

    /// Consumes the error and returns the failure chain, if any.
    pub fn into_validator_error(self) -> Option<ValidatorError> {
        match self {
            Self::Invalid(chain) => Some(chain),
            _ => None,
        }
    }
}

/// Result type for validation runs.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_message_counts_failures() {
        let first = ValidatorError::new("Must be present", "email", None);
        let second = ValidatorError::new("Must be numeric", "age", Some(first));
        let error = EngineError::from(second);

        assert!(error.is_invalid());
        assert_eq!(error.to_string(), "Validation failed with 2 error(s)");
        assert_eq!(error.validator_error().map(|e| e.property()), Some("age"));
    }

    #[test]
    fn test_configuration_is_transparent() {
        let error = EngineError::from(ConfigurationError::UnrecognizedIdentifier(
            "nope".to_string(),
        ));

        assert!(!error.is_invalid());
        assert!(error.validator_error().is_none());
        assert_eq!(error.to_string(), "Unrecognized validation identifier: nope");
    }

    #[test]
    fn test_predicate_defect() {
        let error = EngineError::predicate("min", "age", "Expects parameter to be numeric");

        assert_eq!(
            error.to_string(),
            "Predicate 'min' failed on property 'age': Expects parameter to be numeric"
        );
        assert!(error.into_validator_error().is_none());
    }
}
