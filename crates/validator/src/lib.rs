//! # verity-validator
//!
//! A composable value-validation engine. Values are described with
//! arguments, checked by constraints, and reported as a list of violations
//! with property paths, codes and translated messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use verity_validator::prelude::*;
//!
//! let title = "";
//! let keywords: Vec<String> = Vec::new();
//!
//! let result = Validator::new().validate(&[
//!     &string(title).with(it::is_not_blank()).at_property("title"),
//!     &iterable(&keywords).with(it::has_count_between(2, 10)).at_property("keywords"),
//! ]);
//!
//! let violations = result.unwrap_err().into_violations().unwrap();
//! assert_eq!(violations.len(), 2);
//! assert_eq!(violations.first().unwrap().path().to_string(), "title");
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: paths, violations, scopes, and the [`Constraint`](foundation::Constraint)
//!   and [`Argument`](foundation::Argument) traits
//! - [`constraints`] (also [`it`]): the built-in constraints
//! - [`arguments`]: values and nested validatables handed to a validator
//! - [`combinators`]: conditional, sequential, alternative and concurrent flow
//! - [`validator`]: the [`Validator`] façade and the process-wide default
//!
//! Custom constraints are declared with [`constraint!`] or by implementing
//! [`Constraint`](foundation::Constraint) by hand.
//!
//! ## Errors
//!
//! Every entry point returns `Result<(), Error>`. Invalid data gives
//! [`Error::Violations`]; anything else (a constraint that cannot be set
//! up or applied, an unsupported value type, a missing stored constraint)
//! is fatal and discards the violations collected so far.

// Error carries a ViolationList inline; boxing it would cost an allocation
// on every failed validation.
#![allow(clippy::result_large_err)]

pub mod arguments;
pub mod combinators;
pub mod constraints;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validator;

pub use constraints as it;
pub use foundation::{Error, Language, Violation, ViolationList};
pub use validator::{Validatable, Validator, ValidatorBuilder, validate, validate_it};
