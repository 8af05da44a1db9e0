//! Size bounds: `min`, `max` and `between`.
//!
//! Numbers are compared by value, strings by char count and lists by length.
//! Null, booleans and maps fail with `Unexpected type`. Bounds must be finite
//! numbers; anything else is a defect in the rule.

use super::{UNEXPECTED_TYPE, measure, numeric_parameter};
use ruleval_core::{Predicate, PredicateError, PredicateResult, Value};

/// `min:<n>`: the measured value is at least `n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl Min {
    pub const IDENTIFIER: &'static str = "min";
}

impl Predicate for Min {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult {
        let min = numeric_parameter(parameters, 0)?;
        let measured = measure(value).ok_or_else(|| PredicateError::invalid(UNEXPECTED_TYPE))?;

        if measured < min {
            return Err(PredicateError::invalid(format!(
                "Must be larger than {}",
                parameters[0]
            )));
        }

        Ok(())
    }
}

/// `max:<n>`: the measured value is at most `n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl Max {
    pub const IDENTIFIER: &'static str = "max";
}

impl Predicate for Max {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult {
        let max = numeric_parameter(parameters, 0)?;
        let measured = measure(value).ok_or_else(|| PredicateError::invalid(UNEXPECTED_TYPE))?;

        if measured > max {
            return Err(PredicateError::invalid(format!(
                "Must be smaller than {}",
                parameters[0]
            )));
        }

        Ok(())
    }
}

/// `between:<min>,<max>`: the measured value lies in the inclusive range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Between;

impl Between {
    pub const IDENTIFIER: &'static str = "between";
}

impl Predicate for Between {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult {
        let min = numeric_parameter(parameters, 0)?;
        let max = numeric_parameter(parameters, 1)?;
        let measured = measure(value).ok_or_else(|| PredicateError::invalid(UNEXPECTED_TYPE))?;

        if measured < min || measured > max {
            return Err(PredicateError::invalid(format!(
                "Must be between {} and {}",
                parameters[0], parameters[1]
            )));
        }

        Ok(())
    }
}
