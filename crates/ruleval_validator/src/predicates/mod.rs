//! The standard predicate catalogue.
//!
//! Every predicate here is a stateless unit struct (or a small enum for the
//! comparison family). Parameters arrive as the strings parsed from the rule
//! spec and are interpreted per predicate.
//!
//! Each predicate documents what it does with [`Value::Null`]; all of them use
//! [`NullHandling::Inspect`](ruleval_core::NullHandling::Inspect), so null always
//! reaches the predicate and the documented behaviour applies.

mod bounds;
mod comparison;
mod emptiness;
mod membership;
mod numeric;
mod pattern;
mod temporal;
mod types;

pub use bounds::*;
pub use comparison::*;
pub use emptiness::*;
pub use membership::*;
pub use numeric::*;
pub use pattern::*;
pub use types::*;

use ruleval_core::{PredicateError, Value};

/// Message for values a predicate cannot measure or compare.
pub const UNEXPECTED_TYPE: &str = "Unexpected type";

/// Reads parameter `index` as a finite number.
///
/// A missing or non-numeric parameter is a defect in the rule, not in the value.
fn numeric_parameter(parameters: &[String], index: usize) -> Result<f64, PredicateError> {
    parameters
        .get(index)
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .ok_or_else(|| PredicateError::defect("Expects parameter to be numeric"))
}

/// The quantity size-based predicates compare: numbers by value, strings by
/// char count, lists by length.
fn measure(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::String(_) | Value::List(_) => value.length().map(|len| len as f64),
        Value::Null | Value::Bool(_) | Value::Map(_) => None,
    }
}

/// Whether a scalar value equals a rule parameter.
///
/// Numbers compare numerically so that `1` matches both `"1"` and `"1.0"`.
fn matches_literal(value: &Value, literal: &str) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) => match (value.as_float(), literal.parse::<f64>()) {
            (Some(n), Ok(parsed)) => n == parsed,
            _ => false,
        },
        Value::String(s) => s == literal,
        Value::Bool(b) => literal == if *b { "true" } else { "false" },
        Value::Null | Value::List(_) | Value::Map(_) => false,
    }
}

#[cfg(test)]
pub(crate) fn params(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|p| p.to_string()).collect()
}
