//! The linked chain of validation failures.
//!
//! Every failure recorded during a validation run becomes a new
//! [`ValidatorError`] pointing at the failure recorded before it, so the head of
//! the chain is always the most recent failure. Entries are never mutated once
//! linked.

use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

/// Aggregated validation error: one failure plus every failure before it.
///
/// # Example
///
/// ```rust
/// use ruleval_core::ValidatorError;
///
/// let first = ValidatorError::new("Must be present", "email", None);
/// let second = ValidatorError::new("Must be numeric", "age", Some(first));
/// let third = ValidatorError::new("Must be larger than 18", "age", Some(second));
///
/// let errors = third.errors();
/// assert_eq!(errors["age"], vec!["Must be numeric", "Must be larger than 18"]);
/// assert_eq!(errors["email"], vec!["Must be present"]);
/// assert_eq!(third.previous().map(|e| e.property()), Some("age"));
/// ```
///
/// Dropping, cloning, comparing and debug-printing walk the chain iteratively,
/// so chain length is bounded by memory rather than stack depth.
#[derive(Error)]
#[error("{message}")]
pub struct ValidatorError {
    message: String,
    property: String,
    #[source]
    previous: Option<Box<ValidatorError>>,
}

impl ValidatorError {
    /// Creates a new chain head linked to `previous`.
    pub fn new(
        message: impl Into<String>,
        property: impl Into<String>,
        previous: Option<ValidatorError>,
    ) -> Self {
        Self {
            message: message.into(),
            property: property.into(),
            previous: previous.map(Box::new),
        }
    }

    /// Message of this (the most recent) failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Property this failure was recorded for.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The failure recorded immediately before this one.
    pub fn previous(&self) -> Option<&ValidatorError> {
        self.previous.as_deref()
    }

    /// Walks the chain from this entry back to the oldest one.
    pub fn iter(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Number of failures in the chain, this one included.
    pub fn failure_count(&self) -> usize {
        self.iter().count()
    }

    /// Failure messages grouped by property.
    ///
    /// Within a property, messages are in the order they were recorded (oldest
    /// first). Properties appear in the order of their most recent failure.
    pub fn errors(&self) -> IndexMap<String, Vec<String>> {
        let mut errors: IndexMap<String, Vec<String>> = IndexMap::new();

        for entry in self.iter() {
            errors
                .entry(entry.property.clone())
                .or_default()
                .push(entry.message.clone());
        }

        // Collected newest first
        for messages in errors.values_mut() {
            messages.reverse();
        }

        errors
    }
}

impl Drop for ValidatorError {
    fn drop(&mut self) {
        let mut next = self.previous.take();
        while let Some(mut entry) = next {
            next = entry.previous.take();
        }
    }
}

impl Clone for ValidatorError {
    fn clone(&self) -> Self {
        let mut entries: Vec<&ValidatorError> = self.iter().collect();
        entries.reverse();

        let mut chain: Option<ValidatorError> = None;
        for entry in entries {
            chain = Some(ValidatorError::new(
                entry.message.clone(),
                entry.property.clone(),
                chain,
            ));
        }

        chain.unwrap_or_else(|| {
            ValidatorError::new(self.message.clone(), self.property.clone(), None)
        })
    }
}

impl PartialEq for ValidatorError {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();

        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.message == b.message && a.property == b.property => {}
                _ => return false,
            }
        }
    }
}

impl Eq for ValidatorError {}

impl fmt::Debug for ValidatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<(&str, &str)> = self
            .iter()
            .map(|entry| (entry.property.as_str(), entry.message.as_str()))
            .collect();

        f.debug_struct("ValidatorError")
            .field("message", &self.message)
            .field("property", &self.property)
            .field("chain", &entries)
            .finish()
    }
}

/// Iterator over a failure chain, newest first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a ValidatorError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ValidatorError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.previous();
        Some(current)
    }
}

impl<'a> IntoIterator for &'a ValidatorError {
    type Item = &'a ValidatorError;
    type IntoIter = Chain<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    fn sample_chain() -> ValidatorError {
        let error1 = ValidatorError::new("Error message 1", "property_1", None);
        let error2 = ValidatorError::new("Error message 2", "property_3", Some(error1));
        let error3 = ValidatorError::new("Error message 3", "property_2", Some(error2));
        ValidatorError::new("Error message 4", "property_3", Some(error3))
    }

    #[test]
    fn test_errors_grouped_per_property() {
        let errors = sample_chain().errors();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors["property_1"], vec!["Error message 1"]);
        assert_eq!(errors["property_2"], vec!["Error message 3"]);
        assert_eq!(
            errors["property_3"],
            vec!["Error message 2", "Error message 4"]
        );
    }

    #[test]
    fn test_errors_property_order_follows_most_recent_failure() {
        let errors = sample_chain().errors();
        let properties: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(properties, vec!["property_3", "property_2", "property_1"]);
    }

    #[test]
    fn test_errors_is_idempotent() {
        let chain = sample_chain();
        assert_eq!(chain.errors(), chain.errors());
    }

    #[test]
    fn test_chain_walk() {
        let chain = sample_chain();
        let messages: Vec<&str> = chain.iter().map(|e| e.message()).collect();

        assert_eq!(
            messages,
            vec![
                "Error message 4",
                "Error message 3",
                "Error message 2",
                "Error message 1"
            ]
        );
        assert_eq!(chain.failure_count(), 4);
        assert_eq!(chain.property(), "property_3");
    }

    #[test]
    fn test_display_and_source() {
        let chain = sample_chain();
        assert_eq!(chain.to_string(), "Error message 4");

        let source = chain.source().expect("chain has a previous entry");
        assert_eq!(source.to_string(), "Error message 3");

        let single = ValidatorError::new("only", "key", None);
        assert!(single.source().is_none());
        assert!(single.previous().is_none());
    }

    fn long_chain(length: usize) -> ValidatorError {
        (1..length).fold(ValidatorError::new("Must be present", "p0", None), |chain, i| {
            ValidatorError::new("Must be present", format!("p{}", i % 7), Some(chain))
        })
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let chain = long_chain(100_000);
        assert_eq!(chain.failure_count(), 100_000);
        drop(chain);
    }

    #[test]
    fn test_long_chain_clone_compare_and_debug() {
        let chain = long_chain(100_000);
        let copy = chain.clone();

        assert!(copy == chain);
        assert_eq!(copy.errors()["p0"].len(), chain.errors()["p0"].len());
        assert!(format!("{:?}", chain).starts_with("ValidatorError"));

        let shorter = long_chain(99_999);
        assert!(shorter != chain);
    }

    #[test]
    fn test_clone_preserves_entries() {
        let chain = sample_chain();
        let copy = chain.clone();

        assert_eq!(copy, chain);
        assert_eq!(copy.failure_count(), 4);
        assert_eq!(copy.errors(), chain.errors());
    }
}
