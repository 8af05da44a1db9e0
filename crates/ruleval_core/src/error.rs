//! Error types for predicates and engine configuration.
//!
//! Expected failures (a value that does not satisfy a rule) and defects (bad
//! configuration, a predicate used on something it cannot handle) are kept in
//! separate types so callers decide on an explicit tag, never on a message.

use thiserror::Error;

/// Message recorded when a property required by `present` is missing.
pub const PRESENCE_MESSAGE: &str = "Must be present";

/// A value does not satisfy a rule.
///
/// Raised by predicates for expected invalid input. The engine always folds it
/// into the failure chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
}

impl ValidationFailure {
    /// Creates a new validation failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure recorded by the reserved `present` rule.
    pub fn presence() -> Self {
        Self::new(PRESENCE_MESSAGE)
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a single failed predicate call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// The value is invalid; aggregated by the engine
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),

    /// The predicate could not run (bad parameters, unsupported value kind).
    /// Never aggregated: aborts the validation run.
    #[error("{0}")]
    Defect(String),
}

impl PredicateError {
    /// Creates an `Invalid` error with the given message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(ValidationFailure::new(message))
    }

    /// Creates a `Defect` error with the given message.
    pub fn defect(message: impl Into<String>) -> Self {
        Self::Defect(message.into())
    }

    /// Returns true for expected validation failures.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Programmer errors in how an engine is configured or used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A rule names an identifier that is neither `present` nor registered
    #[error("Unrecognized validation identifier: {0}")]
    UnrecognizedIdentifier(String),

    /// A predicate was registered under an empty identifier
    #[error("Validation identifier must not be empty")]
    EmptyIdentifier,

    /// The factory was asked for a predicate outside its catalogue
    #[error("Unknown predicate '{0}': not part of the standard catalogue")]
    UnknownPredicate(String),

    /// A strategy name could not be parsed
    #[error("Unknown validation strategy: {0}")]
    UnknownStrategy(String),
}

/// A document that should hold an object holds something else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected an object, found {found}")]
pub struct NotAnObject {
    /// Type name of what was found instead
    pub found: &'static str,
}
