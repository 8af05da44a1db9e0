use ruleval_core::{Predicate, PredicateError, PredicateResult, Value};

/// `numeric`: the value is a number or a string holding one.
///
/// Null: fails with `Must be numeric`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Numeric {
    pub const IDENTIFIER: &'static str = "numeric";
}

impl Predicate for Numeric {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, _parameters: &[String]) -> PredicateResult {
        let numeric = match value {
            Value::Int(_) => true,
            Value::Float(f) => !f.is_nan(),
            Value::String(s) => s.trim().parse::<f64>().is_ok_and(|n| !n.is_nan()),
            _ => false,
        };

        if numeric {
            Ok(())
        } else {
            Err(PredicateError::invalid("Must be numeric"))
        }
    }
}
