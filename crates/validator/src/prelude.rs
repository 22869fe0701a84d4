//! Prelude module for convenient imports.
//!
//! Provides a single `use verity_validator::prelude::*;` import that brings
//! in the validator, the argument constructors, the combinators and the
//! traits needed to write constraints. Built-in constraints come through the
//! [`it`] alias so they read as `it::is_not_blank()`.
//!
//! # Examples
//!
//! ```rust
//! use verity_validator::prelude::*;
//!
//! let result = Validator::new().validate(&[
//!     &number(17).with(it::is_greater_than_or_equal(18)).at_property("age"),
//! ]);
//! assert!(result.is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, data model
// ============================================================================

pub use crate::foundation::{
    Argument, ArgumentExt, Constraint, ConstraintExt, Context, Error, Language, Number,
    PropertyPath, PropertyPathElement, Scope, SetUpError, Translations, Translator, Value,
    ValueKind, Violation, ViolationList,
};

// ============================================================================
// VALIDATOR
// ============================================================================

pub use crate::validator::{Validatable, Validator, ValidatorBuilder};

// ============================================================================
// ARGUMENTS: Values and nested validatables
// ============================================================================

pub use crate::arguments::{
    boolean, comparable, countable, iterable, nil, nil_boolean, nil_comparable, nil_iterable,
    nil_number, nil_string, nil_time, nil_valid, number, string, strings, time, valid, valid_each,
    valid_map, value,
};

// ============================================================================
// COMBINATORS: Flow control
// ============================================================================

pub use crate::combinators::{
    all, at_least_one_of, concurrently, sequentially, when, when_groups,
};

// ============================================================================
// CONSTRAINTS
// ============================================================================

pub use crate::it;
