//! Early-termination strategies.
//!
//! A strategy is consulted at two points of a validation run: after every
//! predicate invocation and after every property. It decides whether the run
//! stops there and raises the failures recorded so far.

use crate::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much of a rule set still runs once a failure has been recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    /// Run every invocation of every property, then raise all failures.
    #[default]
    #[serde(alias = "run_all_validations", alias = "run-all-validations")]
    RunAllValidations,

    /// Raise at the first failing invocation.
    #[serde(
        alias = "stop_at_first_invalid_validation",
        alias = "stop-at-first-invalid-validation"
    )]
    StopAtFirstInvalidValidation,

    /// Finish the failing property's invocations, then raise.
    #[serde(
        alias = "stop_at_first_invalid_property",
        alias = "stop-at-first-invalid-property"
    )]
    StopAtFirstInvalidProperty,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 3] = [
        Strategy::RunAllValidations,
        Strategy::StopAtFirstInvalidValidation,
        Strategy::StopAtFirstInvalidProperty,
    ];

    /// Canonical name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::RunAllValidations => "RUN_ALL_VALIDATIONS",
            Strategy::StopAtFirstInvalidValidation => "STOP_AT_FIRST_INVALID_VALIDATION",
            Strategy::StopAtFirstInvalidProperty => "STOP_AT_FIRST_INVALID_PROPERTY",
        }
    }

    /// Whether the run stops right after an invocation.
    ///
    /// `has_failures` is true when the chain is non-empty, whichever call
    /// recorded the failures.
    pub fn stops_after_invocation(&self, has_failures: bool) -> bool {
        has_failures && matches!(self, Strategy::StopAtFirstInvalidValidation)
    }

    /// Whether the run stops once all invocations of a property have run.
    pub fn stops_after_property(&self, has_failures: bool) -> bool {
        has_failures && matches!(self, Strategy::StopAtFirstInvalidProperty)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigurationError;

    /// Parses a strategy name, ignoring case and accepting `-` for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_uppercase();

        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| ConfigurationError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table_after_invocation() {
        assert!(!Strategy::RunAllValidations.stops_after_invocation(true));
        assert!(Strategy::StopAtFirstInvalidValidation.stops_after_invocation(true));
        assert!(!Strategy::StopAtFirstInvalidValidation.stops_after_invocation(false));
        assert!(!Strategy::StopAtFirstInvalidProperty.stops_after_invocation(true));
    }

    #[test]
    fn test_decision_table_after_property() {
        assert!(!Strategy::RunAllValidations.stops_after_property(true));
        assert!(!Strategy::StopAtFirstInvalidValidation.stops_after_property(false));
        assert!(Strategy::StopAtFirstInvalidProperty.stops_after_property(true));
        assert!(!Strategy::StopAtFirstInvalidProperty.stops_after_property(false));
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            "RUN_ALL_VALIDATIONS".parse::<Strategy>().unwrap(),
            Strategy::RunAllValidations
        );
        assert_eq!(
            "stop-at-first-invalid-property".parse::<Strategy>().unwrap(),
            Strategy::StopAtFirstInvalidProperty
        );
        assert_eq!(
            " stop_at_first_invalid_validation ".parse::<Strategy>().unwrap(),
            Strategy::StopAtFirstInvalidValidation
        );
    }

    #[test]
    fn test_parse_unknown_strategy() {
        let err = "fastest".parse::<Strategy>().unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownStrategy("fastest".into()));
    }

    #[test]
    fn test_display_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Strategy::StopAtFirstInvalidProperty).unwrap();
        assert_eq!(json, "\"STOP_AT_FIRST_INVALID_PROPERTY\"");

        let parsed: Strategy = serde_json::from_str("\"run_all_validations\"").unwrap();
        assert_eq!(parsed, Strategy::RunAllValidations);
    }
}
