//! Boolean constraints
//!
//! Nil booleans pass; combine with [`is_not_nil`](super::is_not_nil) to
//! require a value.

use super::message::{code, template};

crate::constraint! {
    /// Validates that a boolean value is `true`.
    pub IsTrue as "IsTrueConstraint";
    fn is_true();
    violation(code::NOT_TRUE, template::NOT_TRUE);
    validate_bool(value: Option<bool>) { value.is_none_or(|v| v) }
}

crate::constraint! {
    /// Validates that a boolean value is `false`.
    pub IsFalse as "IsFalseConstraint";
    fn is_false();
    violation(code::NOT_FALSE, template::NOT_FALSE);
    validate_bool(value: Option<bool>) { value.is_none_or(|v| !v) }
}
