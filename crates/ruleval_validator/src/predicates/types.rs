use super::temporal::parse_datetime;
use ruleval_core::{Predicate, PredicateError, PredicateResult, Value};

/// `type:<t1>,<t2>,...`: the value is of at least one of the listed types.
///
/// Recognised names: `string`, `number`, `integer`, `boolean`, `array`,
/// `object`, `null` and `date`. A `date` is a number (epoch) or a string that
/// parses as a date or timestamp. Unrecognised names never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCheck;

impl TypeCheck {
    pub const IDENTIFIER: &'static str = "type";
}

impl Predicate for TypeCheck {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult {
        if parameters.is_empty() {
            return Err(PredicateError::defect("Expects at least one type parameter"));
        }

        if parameters.iter().any(|t| type_matches(value, t)) {
            return Ok(());
        }

        Err(PredicateError::invalid(format!(
            "Must be of type {}",
            format_allowed_types(parameters)
        )))
    }
}

fn type_matches(value: &Value, type_name: &str) -> bool {
    match type_name {
        "string" => matches!(value, Value::String(_)),
        "number" => value.is_number(),
        "integer" => matches!(value, Value::Int(_)),
        "boolean" => matches!(value, Value::Bool(_)),
        "array" => matches!(value, Value::List(_)),
        "object" => matches!(value, Value::Map(_)),
        "null" => value.is_null(),
        "date" => match value {
            Value::Int(_) | Value::Float(_) => true,
            Value::String(s) => parse_datetime(s).is_some(),
            _ => false,
        },
        _ => false,
    }
}

/// `a`, `a or b`, `a, b or c`.
fn format_allowed_types(types: &[String]) -> String {
    match types {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}
