//! # ruleval Validator
//!
//! Validation engine for ruleval rule sets. This crate provides:
//!
//! - [`Validator`]: runs a [`RuleSet`](ruleval_core::RuleSet) against a
//!   [`Record`](ruleval_core::Record) under a [`Strategy`](ruleval_core::Strategy)
//! - [`ValidatorBuilder`]: fluent configuration of a validator
//! - the standard predicate catalogue (`min`, `between`, `match`, `type`, ...)
//! - [`ValidatorFactory`]: validators pre-populated from that catalogue
//!
//! ## Example
//!
//! ```rust
//! use ruleval_core::{Record, RuleSet, Strategy};
//! use ruleval_validator::{EngineError, ValidatorFactory};
//!
//! let validator = ValidatorFactory
//!     .create_validator(None, Strategy::RunAllValidations)
//!     .unwrap();
//!
//! let rules = RuleSet::new()
//!     .rule("email", "present|match:^[^@]+@[^@]+$")
//!     .rule("age", "numeric|between:0,150");
//! let record = Record::new().with("age", 200);
//!
//! match validator.validate(&record, &rules) {
//!     Ok(()) => println!("Validation passed!"),
//!     Err(EngineError::Invalid(chain)) => {
//!         for (property, messages) in chain.errors() {
//!             println!("{}: {}", property, messages.join(", "));
//!         }
//!     }
//!     Err(other) => panic!("rules are misconfigured: {}", other),
//! }
//! ```

mod builder;
mod engine;
mod error;
mod factory;
mod predicates;

pub use builder::*;
pub use engine::*;
pub use error::*;
pub use factory::*;
pub use predicates::*;
