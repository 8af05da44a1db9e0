//! Predicate registry.

use crate::{ConfigurationError, Predicate};
use std::collections::HashMap;
use std::fmt;

/// Lookup from identifier to predicate.
///
/// Registering a predicate under an identifier that is already taken replaces
/// the earlier one.
#[derive(Default)]
pub struct Registry {
    predicates: HashMap<String, Box<dyn Predicate>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a predicate under its own identifier.
    pub fn insert<P: Predicate + 'static>(&mut self, predicate: P) -> Result<(), ConfigurationError> {
        self.insert_boxed(Box::new(predicate))
    }

    /// Registers an already boxed predicate.
    ///
    /// Fails only when the identifier is empty.
    pub fn insert_boxed(&mut self, predicate: Box<dyn Predicate>) -> Result<(), ConfigurationError> {
        let identifier = predicate.identifier().to_string();
        if identifier.is_empty() {
            return Err(ConfigurationError::EmptyIdentifier);
        }

        self.predicates.insert(identifier, predicate);
        Ok(())
    }

    /// Returns true if a predicate is registered under `identifier`.
    pub fn has(&self, identifier: &str) -> bool {
        self.predicates.contains_key(identifier)
    }

    /// Gets the predicate registered under `identifier`.
    pub fn get(&self, identifier: &str) -> Option<&dyn Predicate> {
        self.predicates.get(identifier).map(|p| &**p)
    }

    /// Registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self.predicates.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        identifiers
    }

    /// Returns the number of registered predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}
