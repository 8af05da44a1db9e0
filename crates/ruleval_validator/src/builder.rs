//! Builder for configuring a [`Validator`].

use crate::Validator;
use ruleval_core::{
    ConfigurationError, FnPredicate, Predicate, PredicateResult, Registry, Strategy, Value,
};
use std::fmt;

/// Builder for creating a `Validator`.
///
/// Predicates are registered in the order they are added when
/// [`build`](ValidatorBuilder::build) runs, so a later predicate with the same
/// identifier wins.
///
/// # Example
///
/// ```rust
/// use ruleval_core::Strategy;
/// use ruleval_validator::{Numeric, Validator};
///
/// let validator = Validator::builder()
///     .strategy(Strategy::StopAtFirstInvalidProperty)
///     .predicate(Numeric)
///     .build()
///     .unwrap();
///
/// assert!(validator.registry().has("numeric"));
/// ```
#[derive(Default)]
pub struct ValidatorBuilder {
    registry: Registry,
    strategy: Strategy,
    predicates: Vec<Box<dyn Predicate>>,
}

impl ValidatorBuilder {
    /// Creates a builder with an empty registry running all validations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Starts from an existing registry instead of an empty one.
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Adds a predicate.
    pub fn predicate<P: Predicate + 'static>(mut self, predicate: P) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Adds an inline function under `identifier`.
    pub fn function<F>(self, identifier: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value, &[String]) -> PredicateResult + Send + Sync + 'static,
    {
        self.predicate(FnPredicate::new(identifier, check))
    }

    /// Builds the validator.
    ///
    /// Fails with [`ConfigurationError::EmptyIdentifier`] if any added predicate
    /// has an empty identifier.
    pub fn build(self) -> Result<Validator, ConfigurationError> {
        let mut registry = self.registry;
        for predicate in self.predicates {
            registry.insert_boxed(predicate)?;
        }

        Ok(Validator::with_registry(registry, self.strategy))
    }
}

impl fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending: Vec<&str> = self.predicates.iter().map(|p| p.identifier()).collect();
        f.debug_struct("ValidatorBuilder")
            .field("registry", &self.registry)
            .field("strategy", &self.strategy)
            .field("predicates", &pending)
            .finish()
    }
}
