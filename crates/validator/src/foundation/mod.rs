//! Core validation types and traits
//!
//! - **Paths**: [`PropertyPath`], [`PropertyPathElement`]
//! - **Outcomes**: [`Violation`], [`ViolationList`], [`Error`]
//! - **Environment**: [`Scope`], [`Context`], [`Language`], [`Translator`]
//! - **Abstractions**: [`Constraint`], [`Argument`], and the [`Value`] kinds
//!   constraints dispatch on
//!
//! # Architecture
//!
//! Validation walks a tree of [`Argument`]s. Each argument derives a child
//! [`Scope`] (path, language, groups), classifies the value it wraps into a
//! [`Value`], and applies its constraints through [`check`]. Constraints
//! report failures as violations built with [`Scope::build_violation`];
//! anything that prevents validation from completing is a fatal [`Error`]
//! and aborts the walk.

pub mod argument;
pub mod constraint;
pub mod context;
pub mod error;
pub mod path;
pub mod scope;
pub mod translation;
pub mod value;
pub mod violation;
pub mod violations;

pub use argument::{Argument, ArgumentExt, ArgumentOptions, execute_all};
pub use constraint::{Constraint, ConstraintExt, ConstraintOptions, check, check_all};
pub use context::Context;
pub use error::{BoxError, Error, SetUpError};
pub use path::{PropertyPath, PropertyPathElement};
pub use scope::{DEFAULT_GROUP, Scope, is_ignored_for_groups};
pub use translation::{Language, Translations, Translator, plural_form_index, select_plural_form};
pub use value::{Collection, ComparableRef, Number, Value, ValueKind};
pub use violation::{
    DefaultViolationFactory, NewViolation, TemplateParameter, TemplateParameters, Violation,
    ViolationBuilder, ViolationFactory, render_message,
};
pub use violations::ViolationList;
