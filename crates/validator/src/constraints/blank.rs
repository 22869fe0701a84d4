//! Blank and nil constraints
//!
//! A value is *blank* when it is nil or the zero value of its kind: `""`,
//! `false`, `0`, an empty collection. Nil-ness alone is checked by
//! [`is_nil`] and [`is_not_nil`].

use super::message::{code, template};
use crate::foundation::constraint::configurable;
use crate::foundation::{ComparableRef, Constraint, ConstraintOptions, Error, Number, Scope};
use chrono::{DateTime, Utc};

// ============================================================================
// NOT BLANK
// ============================================================================

/// Validates that a value is not blank.
#[derive(Debug, Clone, Default)]
pub struct NotBlank {
    allow_nil: bool,
    options: ConstraintOptions,
}

/// Validates that a value is not nil and not the zero value of its kind.
#[must_use]
pub fn is_not_blank() -> NotBlank {
    NotBlank::default()
}

impl NotBlank {
    /// Accepts nil values; only present-but-empty values are rejected.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_nil(mut self) -> Self {
        self.allow_nil = true;
        self
    }

    fn check(&self, is_nil: bool, is_zero: bool, scope: &Scope) -> Result<(), Error> {
        if (is_nil && self.allow_nil) || (!is_nil && !is_zero) {
            return Ok(());
        }
        let message = self.options.message_or(template::NOT_BLANK);
        Err(scope
            .build_violation(code::NOT_BLANK, message)
            .create()
            .into())
    }
}

impl Constraint for NotBlank {
    fn name(&self) -> &'static str {
        "NotBlankConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn validate_nil(&self, is_nil: bool, scope: &Scope) -> Result<(), Error> {
        self.check(is_nil, false, scope)
    }

    fn validate_bool(&self, value: Option<bool>, scope: &Scope) -> Result<(), Error> {
        self.check(value.is_none(), value == Some(false), scope)
    }

    fn validate_number(&self, value: Option<Number>, scope: &Scope) -> Result<(), Error> {
        self.check(value.is_none(), value.is_some_and(|n| n.is_zero()), scope)
    }

    fn validate_string(&self, value: Option<&str>, scope: &Scope) -> Result<(), Error> {
        self.check(value.is_none(), value.is_some_and(str::is_empty), scope)
    }

    fn validate_time(&self, value: Option<DateTime<Utc>>, scope: &Scope) -> Result<(), Error> {
        self.check(value.is_none(), false, scope)
    }

    fn validate_countable(&self, count: usize, scope: &Scope) -> Result<(), Error> {
        self.check(false, count == 0, scope)
    }

    fn validate_iterable(&self, count: Option<usize>, scope: &Scope) -> Result<(), Error> {
        self.check(count.is_none(), count == Some(0), scope)
    }

    fn validate_comparable(
        &self,
        value: Option<ComparableRef<'_>>,
        scope: &Scope,
    ) -> Result<(), Error> {
        self.check(value.is_none(), false, scope)
    }
}

// ============================================================================
// BLANK
// ============================================================================

/// Validates that a value is blank.
#[derive(Debug, Clone, Default)]
pub struct Blank {
    options: ConstraintOptions,
}

/// Validates that a value is nil or the zero value of its kind.
#[must_use]
pub fn is_blank() -> Blank {
    Blank::default()
}

impl Blank {
    fn check(&self, is_blank: bool, scope: &Scope) -> Result<(), Error> {
        if is_blank {
            return Ok(());
        }
        Err(scope
            .build_violation(code::BLANK, self.options.message_or(template::BLANK))
            .create()
            .into())
    }
}

impl Constraint for Blank {
    fn name(&self) -> &'static str {
        "BlankConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn validate_nil(&self, is_nil: bool, scope: &Scope) -> Result<(), Error> {
        self.check(is_nil, scope)
    }

    fn validate_bool(&self, value: Option<bool>, scope: &Scope) -> Result<(), Error> {
        self.check(value != Some(true), scope)
    }

    fn validate_number(&self, value: Option<Number>, scope: &Scope) -> Result<(), Error> {
        self.check(value.is_none_or(|n| n.is_zero()), scope)
    }

    fn validate_string(&self, value: Option<&str>, scope: &Scope) -> Result<(), Error> {
        self.check(value.is_none_or(str::is_empty), scope)
    }

    fn validate_time(&self, value: Option<DateTime<Utc>>, scope: &Scope) -> Result<(), Error> {
        self.check(value.is_none(), scope)
    }

    fn validate_countable(&self, count: usize, scope: &Scope) -> Result<(), Error> {
        self.check(count == 0, scope)
    }

    fn validate_iterable(&self, count: Option<usize>, scope: &Scope) -> Result<(), Error> {
        self.check(count.is_none_or(|c| c == 0), scope)
    }

    fn validate_comparable(
        &self,
        value: Option<ComparableRef<'_>>,
        scope: &Scope,
    ) -> Result<(), Error> {
        self.check(value.is_none(), scope)
    }
}

configurable!(NotBlank, Blank);

// ============================================================================
// NIL
// ============================================================================

crate::constraint! {
    /// Validates that a nullable value is nil.
    pub Nil as "NilConstraint";
    fn is_nil();
    violation(code::NIL, template::NIL);
    validate_nil(is_nil: bool) { is_nil }
    validate_bool(value: Option<bool>) { value.is_none() }
    validate_number(value: Option<Number>) { value.is_none() }
    validate_string(value: Option<&str>) { value.is_none() }
    validate_time(value: Option<DateTime<Utc>>) { value.is_none() }
    validate_iterable(count: Option<usize>) { count.is_none() }
    validate_comparable(value: Option<ComparableRef<'_>>) { value.is_none() }
}

crate::constraint! {
    /// Validates that a nullable value is not nil.
    pub NotNil as "NotNilConstraint";
    fn is_not_nil();
    violation(code::NOT_NIL, template::NOT_NIL);
    validate_nil(is_nil: bool) { !is_nil }
    validate_bool(value: Option<bool>) { value.is_some() }
    validate_number(value: Option<Number>) { value.is_some() }
    validate_string(value: Option<&str>) { value.is_some() }
    validate_time(value: Option<DateTime<Utc>>) { value.is_some() }
    validate_iterable(count: Option<usize>) { count.is_some() }
    validate_comparable(value: Option<ComparableRef<'_>>) { value.is_some() }
}
