//! Main validation engine.
//!
//! This module provides the [`Validator`] that checks a [`Record`] against a
//! [`RuleSet`], dispatching each rule to a registered predicate and folding
//! failures into a [`ValidatorError`] chain under the configured [`Strategy`].

use crate::{EngineError, Result, ValidatorBuilder};
use ruleval_core::{
    ConfigurationError, FnPredicate, NullHandling, Predicate, PredicateError, PredicateResult,
    Record, Registry, RuleSet, Strategy, ValidationFailure, ValidatorError, Value,
};
use ruleval_parser::{Invocation, parse_rule};
use tracing::{debug, trace, warn};

/// Validation engine.
///
/// A configured validator holds no per-call state: every call to
/// [`validate`](Validator::validate) builds its own failure chain, so one engine
/// can serve any number of calls (and threads).
///
/// # Example
///
/// ```rust
/// use ruleval_core::{Record, RuleSet};
/// use ruleval_validator::{Min, Numeric, Validator};
///
/// let mut validator = Validator::new();
/// validator.register(Numeric).unwrap().register(Min).unwrap();
///
/// let rules = RuleSet::new()
///     .rule("name", "present")
///     .rule("age", "numeric|min:18");
/// let record = Record::new().with("age", 12);
///
/// let error = validator.validate(&record, &rules).unwrap_err();
/// let errors = error.validator_error().unwrap().errors();
///
/// assert_eq!(errors["name"], vec!["Must be present"]);
/// assert_eq!(errors["age"], vec!["Must be larger than 18"]);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    registry: Registry,
    strategy: Strategy,
}

impl Validator {
    /// Creates a validator with an empty registry running all validations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from an existing registry and strategy.
    pub fn with_registry(registry: Registry, strategy: Strategy) -> Self {
        Self { registry, strategy }
    }

    /// Starts building a validator.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// The active strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The registered predicates.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Replaces the active strategy for all subsequent calls.
    pub fn use_strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Registers a predicate under its own identifier, replacing any earlier
    /// registration.
    pub fn register<P: Predicate + 'static>(
        &mut self,
        predicate: P,
    ) -> std::result::Result<&mut Self, ConfigurationError> {
        self.registry.insert(predicate)?;
        Ok(self)
    }

    /// Registers an inline function under `identifier`.
    ///
    /// ```rust
    /// use ruleval_core::{PredicateError, Record, RuleSet};
    /// use ruleval_validator::Validator;
    ///
    /// let mut validator = Validator::new();
    /// validator
    ///     .register_fn("even", |value, _| match value.as_int() {
    ///         Some(n) if n % 2 == 0 => Ok(()),
    ///         _ => Err(PredicateError::invalid("Must be even")),
    ///     })
    ///     .unwrap();
    ///
    /// let rules = RuleSet::new().rule("count", "even");
    /// assert!(validator.validate(&Record::new().with("count", 4), &rules).is_ok());
    /// assert!(validator.validate(&Record::new().with("count", 3), &rules).is_err());
    /// ```
    pub fn register_fn<F>(
        &mut self,
        identifier: impl Into<String>,
        check: F,
    ) -> std::result::Result<&mut Self, ConfigurationError>
    where
        F: Fn(&Value, &[String]) -> PredicateResult + Send + Sync + 'static,
    {
        self.register(FnPredicate::new(identifier, check))
    }

    /// Validates `record` against `rules`, starting from an empty chain.
    ///
    /// Returns `Ok(())` when every rule passes, [`EngineError::Invalid`] with the
    /// failure chain otherwise. Unregistered identifiers and predicate defects
    /// abort the call immediately and are never aggregated.
    pub fn validate(&self, record: &Record, rules: &RuleSet) -> Result<()> {
        self.validate_with_previous(record, rules, None)
    }

    /// Validates `record` against `rules`, linking new failures onto `previous`.
    ///
    /// The retained chain counts as failures already recorded: under the stop
    /// strategies the call returns after its first invocation or property.
    pub fn validate_with_previous(
        &self,
        record: &Record,
        rules: &RuleSet,
        previous: Option<ValidatorError>,
    ) -> Result<()> {
        debug!(
            "Validating {} properties with strategy {}",
            rules.len(),
            self.strategy
        );

        let mut chain = previous;

        for (property, spec) in rules.iter() {
            for invocation in parse_rule(spec) {
                if let Some(failure) = self.run_invocation(record, property, &invocation)? {
                    trace!(
                        "Property '{}' failed '{}': {}",
                        property,
                        invocation.identifier(),
                        failure.message()
                    );
                    chain = Some(ValidatorError::new(failure.message(), property, chain));
                }

                if self.strategy.stops_after_invocation(chain.is_some()) {
                    debug!(
                        "Stopping after invocation '{}' on '{}'",
                        invocation.identifier(),
                        property
                    );
                    return raise(chain);
                }
            }

            if self.strategy.stops_after_property(chain.is_some()) {
                debug!("Stopping after property '{}'", property);
                return raise(chain);
            }
        }

        raise(chain)
    }

    /// Runs one invocation against `property`, returning its failure if any.
    fn run_invocation(
        &self,
        record: &Record,
        property: &str,
        invocation: &Invocation,
    ) -> Result<Option<ValidationFailure>> {
        if invocation.is_presence() {
            return Ok((!record.contains(property)).then(ValidationFailure::presence));
        }

        let identifier = invocation.identifier();
        let predicate = self.registry.get(identifier).ok_or_else(|| {
            ConfigurationError::UnrecognizedIdentifier(identifier.to_string())
        })?;

        let Some(value) = record.get(property) else {
            trace!("Skipping '{}' on absent property '{}'", identifier, property);
            return Ok(None);
        };

        if value.is_null() && predicate.null_handling() == NullHandling::Skip {
            trace!("Skipping '{}' on null property '{}'", identifier, property);
            return Ok(None);
        }

        trace!("Running '{}' on property '{}'", identifier, property);
        match predicate.validate(value, invocation.parameters()) {
            Ok(()) => Ok(None),
            Err(PredicateError::Invalid(failure)) => Ok(Some(failure)),
            Err(PredicateError::Defect(message)) => {
                warn!(
                    "Predicate '{}' could not run on property '{}': {}",
                    identifier, property, message
                );
                Err(EngineError::predicate(identifier, property, message))
            }
        }
    }
}

fn raise(chain: Option<ValidatorError>) -> Result<()> {
    match chain {
        Some(chain) => Err(EngineError::Invalid(chain)),
        None => Ok(()),
    }
}
