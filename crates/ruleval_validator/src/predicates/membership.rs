//! Membership checks against the rule parameters: `in` and `include`.

use super::matches_literal;
use ruleval_core::{Predicate, PredicateError, PredicateResult, Value};

/// `in:<v1>,<v2>,...`: the value equals one of the parameters.
///
/// Null and containers never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct In;

impl In {
    pub const IDENTIFIER: &'static str = "in";
}

impl Predicate for In {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult {
        if parameters.iter().any(|p| matches_literal(value, p)) {
            return Ok(());
        }

        Err(PredicateError::invalid(format!(
            "Must be one of: {}",
            parameters.join(", ")
        )))
    }
}

/// `include:<collection>`: the parameters include the value.
///
/// A single parameter is treated as text and the value must be a substring of
/// it. Several parameters form a list the value must be an element of.
#[derive(Debug, Clone, Copy, Default)]
pub struct Include;

impl Include {
    pub const IDENTIFIER: &'static str = "include";
}

impl Predicate for Include {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult {
        let included = match parameters {
            [] => return Err(PredicateError::defect("Expects a collection parameter")),
            [text] => value.to_text().is_some_and(|needle| text.contains(&needle)),
            items => items.iter().any(|item| matches_literal(value, item)),
        };

        if included {
            Ok(())
        } else {
            Err(PredicateError::invalid(format!(
                "Must include: {}",
                parameters.join(", ")
            )))
        }
    }
}
