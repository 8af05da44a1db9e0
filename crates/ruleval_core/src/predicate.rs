//! The predicate contract.
//!
//! A predicate is a named, pure check over a single value. It receives the
//! parameters parsed from the rule spec (`min:0` gives `["0"]`) and either
//! succeeds or returns a [`PredicateError`].

use crate::{PredicateError, Value};
use std::fmt;

/// Result type for predicate calls.
pub type PredicateResult = Result<(), PredicateError>;

/// How a predicate treats an explicit [`Value::Null`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullHandling {
    /// Null is passed to the predicate like any other value.
    #[default]
    Inspect,
    /// The engine skips the predicate for null values, as it does for absent
    /// properties.
    Skip,
}

/// Core trait for named value checks.
///
/// # Example
///
/// ```rust
/// use ruleval_core::{Predicate, PredicateError, PredicateResult, Value};
///
/// struct Positive;
///
/// impl Predicate for Positive {
///     fn identifier(&self) -> &str {
///         "positive"
///     }
///
///     fn validate(&self, value: &Value, _parameters: &[String]) -> PredicateResult {
///         match value.as_float() {
///             Some(n) if n > 0.0 => Ok(()),
///             _ => Err(PredicateError::invalid("Must be positive")),
///         }
///     }
/// }
///
/// assert!(Positive.validate(&Value::Int(3), &[]).is_ok());
/// assert!(Positive.validate(&Value::Int(-3), &[]).is_err());
/// ```
pub trait Predicate: Send + Sync {
    /// Stable identifier used in rule specs.
    fn identifier(&self) -> &str;

    /// Checks `value` against this predicate.
    ///
    /// Returns `PredicateError::Invalid` when the value does not satisfy the
    /// rule and `PredicateError::Defect` when the check cannot run at all.
    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult;

    /// How null values are handled. Defaults to [`NullHandling::Inspect`].
    fn null_handling(&self) -> NullHandling {
        NullHandling::Inspect
    }
}

/// A predicate built from an identifier and a closure.
///
/// ```rust
/// use ruleval_core::{FnPredicate, Predicate, PredicateError, Value};
///
/// let lowercase = FnPredicate::new("lowercase", |value, _| match value.as_str() {
///     Some(s) if s == s.to_lowercase() => Ok(()),
///     _ => Err(PredicateError::invalid("Must be lowercase")),
/// });
///
/// assert_eq!(lowercase.identifier(), "lowercase");
/// assert!(lowercase.validate(&Value::from("abc"), &[]).is_ok());
/// ```
pub struct FnPredicate<F> {
    identifier: String,
    check: F,
    null_handling: NullHandling,
}

impl<F> FnPredicate<F>
where
    F: Fn(&Value, &[String]) -> PredicateResult + Send + Sync,
{
    /// Binds `check` to `identifier`.
    pub fn new(identifier: impl Into<String>, check: F) -> Self {
        Self {
            identifier: identifier.into(),
            check,
            null_handling: NullHandling::Inspect,
        }
    }

    /// Sets how null values are handled.
    pub fn with_null_handling(mut self, null_handling: NullHandling) -> Self {
        self.null_handling = null_handling;
        self
    }
}

impl<F> Predicate for FnPredicate<F>
where
    F: Fn(&Value, &[String]) -> PredicateResult + Send + Sync,
{
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult {
        (self.check)(value, parameters)
    }

    fn null_handling(&self) -> NullHandling {
        self.null_handling
    }
}

impl<F> fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPredicate")
            .field("identifier", &self.identifier)
            .field("null_handling", &self.null_handling)
            .finish_non_exhaustive()
    }
}
