use super::UNEXPECTED_TYPE;
use regex::Regex;
use ruleval_core::{Predicate, PredicateError, PredicateResult, Value};

/// `match:<pattern>`: the value's text matches a regular expression.
///
/// The rule parser splits parameters on `,`, so the pattern is rejoined with
/// commas before compiling; `match:^\d{1,3}$` keeps its quantifier. The match is
/// unanchored unless the pattern anchors itself.
///
/// Null and containers fail with `Unexpected type`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Match;

impl Match {
    pub const IDENTIFIER: &'static str = "match";
}

impl Predicate for Match {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn validate(&self, value: &Value, parameters: &[String]) -> PredicateResult {
        let pattern = parameters.join(",");
        if pattern.is_empty() {
            return Err(PredicateError::defect(
                "Expects parameter to be a regular expression",
            ));
        }

        let regex = Regex::new(&pattern).map_err(|e| {
            PredicateError::defect(format!("Invalid regular expression '{}': {}", pattern, e))
        })?;

        let text = value
            .to_text()
            .ok_or_else(|| PredicateError::invalid(UNEXPECTED_TYPE))?;

        if regex.is_match(&text) {
            Ok(())
        } else {
            Err(PredicateError::invalid(format!("Must match: {}", pattern)))
        }
    }
}
