use super::temporal::parse_datetime;
use super::{UNEXPECTED_TYPE, numeric_parameter};
use ruleval_core::{Predicate, PredicateError, PredicateResult, Value};
use std::cmp::Ordering;

/// Threshold comparisons: `gt`, `gte`, `lt` and `lte`.
///
/// Numbers compare numerically against a numeric threshold. Strings compare
/// chronologically when both sides parse as dates and lexicographically
/// otherwise. Null, booleans and containers fail with `Unexpected type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl Comparison {
    /// All comparisons, in catalogue order.
    pub const ALL: [Comparison; 4] = [
        Comparison::GreaterThan,
        Comparison::GreaterThanOrEqual,
        Comparison::LessThan,
        Comparison::LessThanOrEqual,
    ];

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|comparison| comparison.as_str() == identifier)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::GreaterThan => "gt",
            Comparison::GreaterThanOrEqual => "gte",
            Comparison::LessThan => "lt",
            Comparison::LessThanOrEqual => "lte",
        }
    }

    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Comparison::GreaterThan => ordering == Ordering::Greater,
            Comparison::GreaterThanOrEqual => ordering != Ordering::Less,
            Comparison::LessThan => ordering == Ordering::Less,
            Comparison::LessThanOrEqual => ordering != Ordering::Greater,
        }
    }

    fn failure(&self, threshold: &str) -> PredicateError {
        let relation = match self {
            Comparison::GreaterThan => "greater than",
            Comparison::GreaterThanOrEqual => "greater than or equal to",
            Comparison::LessThan => "less than",
            Comparison::LessThanOrEqual => "less than or equal to",
        };
        PredicateError::invalid(format!("Must be {} {}", relation, threshold))
    }
}

impl Predicate for Comparison {
    fn identifier(&self) -> &str {
        self.as_str()
    }

    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult {
        let threshold = parameters
            .first()
            .ok_or_else(|| PredicateError::defect("Expects a threshold parameter"))?;

        let ordering = match value {
            Value::Int(_) | Value::Float(_) => {
                let limit = numeric_parameter(parameters, 0)?;
                value.as_float().and_then(|n| n.partial_cmp(&limit))
            }
            Value::String(s) => match (parse_datetime(s), parse_datetime(threshold)) {
                (Some(lhs), Some(rhs)) => Some(lhs.cmp(&rhs)),
                _ => Some(s.as_str().cmp(threshold.as_str())),
            },
            _ => return Err(PredicateError::invalid(UNEXPECTED_TYPE)),
        };

        match ordering {
            Some(ordering) if self.accepts(ordering) => Ok(()),
            _ => Err(self.failure(threshold)),
        }
    }
}
