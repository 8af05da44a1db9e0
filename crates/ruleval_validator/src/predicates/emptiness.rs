use super::UNEXPECTED_TYPE;
use ruleval_core::{Predicate, PredicateError, PredicateResult, Value};

fn length_of(value: &Value) -> Result<usize, PredicateError> {
    value
        .length()
        .ok_or_else(|| PredicateError::defect(UNEXPECTED_TYPE))
}

/// `empty`: a string, list or map with no elements.
///
/// Null, numbers and booleans have no length and are a defect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl Empty {
    pub const IDENTIFIER: &'static str = "empty";
}

impl Predicate for Empty {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, _parameters: &[String]) -> PredicateResult {
        if length_of(value)? > 0 {
            return Err(PredicateError::invalid("Must be empty"));
        }
        Ok(())
    }
}

/// `not_empty`: a string, list or map with at least one element.
///
/// Null, numbers and booleans have no length and are a defect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmpty;

impl NotEmpty {
    pub const IDENTIFIER: &'static str = "not_empty";
}

impl Predicate for NotEmpty {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, _parameters: &[String]) -> PredicateResult {
        if length_of(value)? == 0 {
            return Err(PredicateError::invalid("Must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_values() {
        assert!(Empty.validate(&Value::from(""), &[]).is_ok());
        assert!(Empty.validate(&Value::List(vec![]), &[]).is_ok());
        assert!(Empty.validate(&Value::from(json!({})), &[]).is_ok());
    }

    #[test]
    fn test_empty_rejects_content() {
        assert_eq!(
            Empty.validate(&Value::from("string"), &[]),
            Err(PredicateError::invalid("Must be empty"))
        );
        assert!(Empty.validate(&Value::from(vec![1, 2, 3]), &[]).is_err());
        assert!(Empty.validate(&Value::from(json!({"a": 1})), &[]).is_err());
    }

    #[test]
    fn test_not_empty_values() {
        assert!(NotEmpty.validate(&Value::from("string"), &[]).is_ok());
        assert!(NotEmpty.validate(&Value::from(vec![1, 2, 3]), &[]).is_ok());
        assert_eq!(
            NotEmpty.validate(&Value::from(""), &[]),
            Err(PredicateError::invalid("Must not be empty"))
        );
        assert!(NotEmpty.validate(&Value::List(vec![]), &[]).is_err());
    }

    #[test]
    fn test_unmeasurable_values_are_defects() {
        for value in [Value::Null, Value::Int(0), Value::Bool(false)] {
            assert_eq!(
                Empty.validate(&value, &[]),
                Err(PredicateError::defect(UNEXPECTED_TYPE))
            );
            assert_eq!(
                NotEmpty.validate(&value, &[]),
                Err(PredicateError::defect(UNEXPECTED_TYPE))
            );
        }
    }
}
