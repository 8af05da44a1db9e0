//! # ruleval Core
//!
//! Core data structures and types for the ruleval validation engine.
//!
//! A validation run checks a [`Record`] against a [`RuleSet`]: an ordered mapping
//! from property name to a short rule spec such as `"present|numeric|min:0"`.
//! Each identifier in a rule spec names a [`Predicate`] looked up in a
//! [`Registry`]. Failures are collected into a [`ValidatorError`] chain whose
//! [`errors`](ValidatorError::errors) view groups messages per property.
//!
//! ## Key Concepts
//!
//! - **Value / Record**: the dynamically typed data being validated
//! - **RuleSet**: property name to rule spec, in declaration order
//! - **Predicate**: a named, pure check over a single value
//! - **Strategy**: how much of a rule set still runs after a failure
//! - **ValidatorError**: the linked chain of failures raised by a validation run
//!
//! ## Example
//!
//! ```rust
//! use ruleval_core::{Record, RuleSet, Strategy, Value};
//!
//! let record = Record::new()
//!     .with("name", "Ada")
//!     .with("age", 36);
//!
//! let rules = RuleSet::new()
//!     .rule("name", "present|not_empty")
//!     .rule("age", "numeric|min:0");
//!
//! assert!(record.contains("name"));
//! assert_eq!(record.get("age"), Some(&Value::Int(36)));
//! assert_eq!(rules.len(), 2);
//! assert_eq!(Strategy::default(), Strategy::RunAllValidations);
//! ```

pub mod chain;
pub mod error;
pub mod predicate;
pub mod registry;
pub mod rules;
pub mod strategy;
pub mod value;

pub use chain::*;
pub use error::*;
pub use predicate::*;
pub use registry::*;
pub use rules::*;
pub use strategy::*;
pub use value::*;
