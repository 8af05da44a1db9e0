//! Rule sets.
//!
//! A [`RuleSet`] maps property names to rule specs. Declaration order is kept:
//! properties are validated in that order, which the stop-at-first-invalid
//! strategies depend on.

use crate::Strategy;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from property name to rule spec.
///
/// # Example
///
/// ```rust
/// use ruleval_core::RuleSet;
///
/// let rules = RuleSet::new()
///     .rule("email", "present|match:^[^@]+@[^@]+$")
///     .rule("age", "numeric|between:0,150");
///
/// let properties: Vec<&str> = rules.properties().collect();
/// assert_eq!(properties, vec!["email", "age"]);
/// assert_eq!(rules.get("age"), Some("numeric|between:0,150"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<String, String>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, builder style.
    pub fn rule(mut self, property: impl Into<String>, spec: impl Into<String>) -> Self {
        self.rules.insert(property.into(), spec.into());
        self
    }

    /// Inserts a rule, returning the spec it replaced.
    ///
    /// Replacing keeps the property's original position.
    pub fn insert(&mut self, property: impl Into<String>, spec: impl Into<String>) -> Option<String> {
        self.rules.insert(property.into(), spec.into())
    }

    /// Gets the rule spec for a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.rules.get(property).map(String::as_str)
    }

    /// Returns the number of properties with rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Property names in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// `(property, spec)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(p, s)| (p.as_str(), s.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RuleSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A rule set as stored in a configuration file, with an optional strategy.
///
/// ```yaml
/// strategy: STOP_AT_FIRST_INVALID_PROPERTY
/// rules:
///   name: present|not_empty
///   age: numeric|min:0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDocument {
    /// Strategy to validate with; the engine's own strategy applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,

    /// Property rules in document order
    #[serde(default)]
    pub rules: RuleSet,
}
