//! Convenience construction of validators from the standard catalogue.

use crate::Validator;
use crate::predicates::{
    Between, Comparison, Empty, In, Include, Match, Max, Min, NotEmpty, Numeric, TypeCheck,
};
use ruleval_core::{ConfigurationError, Predicate, Registry, Strategy};

/// Identifiers of the standard catalogue, in alphabetical order.
const AVAILABLE: [&str; 14] = [
    "between",
    "empty",
    "gt",
    "gte",
    "in",
    "include",
    "lt",
    "lte",
    "match",
    "max",
    "min",
    "not_empty",
    "numeric",
    "type",
];

/// Builds validators pre-populated with standard predicates.
///
/// # Example
///
/// ```rust
/// use ruleval_core::{Record, RuleSet, Strategy};
/// use ruleval_validator::ValidatorFactory;
///
/// let validator = ValidatorFactory
///     .create_validator(Some(&["numeric", "min"]), Strategy::RunAllValidations)
///     .unwrap();
///
/// let rules = RuleSet::new().rule("age", "numeric|min:18");
/// assert!(validator.validate(&Record::new().with("age", 21), &rules).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorFactory;

impl ValidatorFactory {
    /// Every identifier the factory can register.
    pub fn available() -> &'static [&'static str] {
        &AVAILABLE
    }

    /// Creates a validator with the named predicates, or the whole catalogue
    /// when `identifiers` is `None`.
    ///
    /// Fails with [`ConfigurationError::UnknownPredicate`] on the first name
    /// outside the catalogue.
    pub fn create_validator(
        &self,
        identifiers: Option<&[&str]>,
        strategy: Strategy,
    ) -> Result<Validator, ConfigurationError> {
        let identifiers = identifiers.unwrap_or(&AVAILABLE);
        let mut registry = Registry::new();

        for identifier in identifiers {
            let predicate = standard_predicate(identifier)
                .ok_or_else(|| ConfigurationError::UnknownPredicate(identifier.to_string()))?;
            registry.insert_boxed(predicate)?;
        }

        Ok(Validator::with_registry(registry, strategy))
    }
}

/// The standard predicate registered under `identifier`, if any.
pub fn standard_predicate(identifier: &str) -> Option<Box<dyn Predicate>> {
    let predicate: Box<dyn Predicate> = match identifier {
        Between::IDENTIFIER => Box::new(Between),
        Empty::IDENTIFIER => Box::new(Empty),
        In::IDENTIFIER => Box::new(In),
        Include::IDENTIFIER => Box::new(Include),
        Match::IDENTIFIER => Box::new(Match),
        Max::IDENTIFIER => Box::new(Max),
        Min::IDENTIFIER => Box::new(Min),
        NotEmpty::IDENTIFIER => Box::new(NotEmpty),
        Numeric::IDENTIFIER => Box::new(Numeric),
        TypeCheck::IDENTIFIER => Box::new(TypeCheck),
        other => Box::new(Comparison::from_identifier(other)?),
    };

    Some(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_available_matches_catalogue() {
        for identifier in ValidatorFactory::available() {
            let predicate = standard_predicate(identifier)
                .unwrap_or_else(|| panic!("'{}' is not in the catalogue", identifier));
            assert_eq!(predicate.identifier(), *identifier);
        }
        assert!(standard_predicate("present").is_none());
        assert!(standard_predicate("nope").is_none());
    }

    #[test]
    fn test_create_full_catalogue() {
        let validator = ValidatorFactory
            .create_validator(None, Strategy::StopAtFirstInvalidProperty)
            .unwrap();

        assert_eq!(validator.registry().identifiers(), AVAILABLE.to_vec());
        assert_eq!(validator.strategy(), Strategy::StopAtFirstInvalidProperty);
    }

    #[test]
    fn test_create_subset() {
        let validator = ValidatorFactory
            .create_validator(Some(&["numeric", "gt"]), Strategy::default())
            .unwrap();

        assert_eq!(validator.registry().identifiers(), vec!["gt", "numeric"]);
    }

    #[test]
    fn test_create_unknown_predicate() {
        let result =
            ValidatorFactory.create_validator(Some(&["numeric", "nope"]), Strategy::default());
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::UnknownPredicate("nope".to_string())
        );
    }
}
