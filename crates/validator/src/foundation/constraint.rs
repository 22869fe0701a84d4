//! The constraint abstraction
//!
//! A constraint is a reusable rule applied to a [`Value`]. It declares the
//! kinds of values it understands by overriding the matching `validate_*`
//! method; every other kind fails with
//! [`Error::InapplicableConstraint`].
//!
//! Flow constraints that need the whole value (conditional, sequential,
//! at-least-one-of) override [`Constraint::validate`] instead.
//!
//! Constraints are always applied through [`check`], which honours the
//! constraint's `when` flag and groups and runs its set-up step first.

use super::error::{Error, SetUpError};
use super::scope::Scope;
use super::value::{ComparableRef, Number, Value, ValueKind};
use super::violations::ViolationList;
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::sync::Arc;

// ============================================================================
// OPTIONS
// ============================================================================

/// Options shared by every configurable constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintOptions {
    message: Option<Cow<'static, str>>,
    groups: Vec<String>,
    ignored: bool,
}

static NO_OPTIONS: ConstraintOptions = ConstraintOptions::new();

impl ConstraintOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: None,
            groups: Vec::new(),
            ignored: false,
        }
    }

    /// The custom message template, or `default`.
    #[must_use]
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(default)
    }

    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn set_message(&mut self, template: impl Into<Cow<'static, str>>) {
        self.message = Some(template.into());
    }

    pub fn set_groups<I, S>(&mut self, groups: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
    }

    pub fn set_ignored(&mut self, ignored: bool) {
        self.ignored = ignored;
    }
}

// ============================================================================
// CONSTRAINT
// ============================================================================

/// A validation rule.
///
/// # Examples
///
/// ```rust
/// use verity_validator::prelude::*;
///
/// struct IsEven;
///
/// impl Constraint for IsEven {
///     fn name(&self) -> &'static str {
///         "IsEvenConstraint"
///     }
///
///     fn validate_number(&self, value: Option<Number>, scope: &Scope) -> Result<(), Error> {
///         match value {
///             Some(Number::Int(n)) if n % 2 != 0 => {
///                 Err(scope.build_violation("notEven", "This value should be even.").create().into())
///             }
///             _ => Ok(()),
///         }
///     }
/// }
///
/// let validator = Validator::new();
/// assert!(validator.validate(&[&number(4).with(IsEven)]).is_ok());
/// assert!(validator.validate(&[&number(3).with(IsEven)]).is_err());
/// ```
pub trait Constraint: Send + Sync {
    /// Name used in set-up and inapplicability errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn options(&self) -> &ConstraintOptions {
        &NO_OPTIONS
    }

    /// Checks the constraint's own configuration before use.
    fn set_up(&self) -> Result<(), SetUpError> {
        Ok(())
    }

    /// Validates a value of any kind by dispatching on its kind.
    fn validate(&self, value: &Value<'_>, scope: &Scope) -> Result<(), Error> {
        match *value {
            Value::Nil(is_nil) => self.validate_nil(is_nil, scope),
            Value::Bool(value) => self.validate_bool(value, scope),
            Value::Number(value) => self.validate_number(value, scope),
            Value::String(value) => self.validate_string(value, scope),
            Value::Time(value) => self.validate_time(value, scope),
            Value::Countable(count) => self.validate_countable(count, scope),
            Value::Iterable(count) => self.validate_iterable(count, scope),
            Value::Comparable(value) => self.validate_comparable(value, scope),
        }
    }

    fn validate_nil(&self, is_nil: bool, scope: &Scope) -> Result<(), Error> {
        let _ = is_nil;
        Err(Error::inapplicable(self.name(), ValueKind::Nil, scope))
    }

    fn validate_bool(&self, value: Option<bool>, scope: &Scope) -> Result<(), Error> {
        let _ = value;
        Err(Error::inapplicable(self.name(), ValueKind::Bool, scope))
    }

    fn validate_number(&self, value: Option<Number>, scope: &Scope) -> Result<(), Error> {
        let _ = value;
        Err(Error::inapplicable(self.name(), ValueKind::Number, scope))
    }

    fn validate_string(&self, value: Option<&str>, scope: &Scope) -> Result<(), Error> {
        let _ = value;
        Err(Error::inapplicable(self.name(), ValueKind::String, scope))
    }

    fn validate_time(&self, value: Option<DateTime<Utc>>, scope: &Scope) -> Result<(), Error> {
        let _ = value;
        Err(Error::inapplicable(self.name(), ValueKind::Time, scope))
    }

    fn validate_countable(&self, count: usize, scope: &Scope) -> Result<(), Error> {
        let _ = count;
        Err(Error::inapplicable(
            self.name(),
            ValueKind::Countable,
            scope,
        ))
    }

    fn validate_iterable(&self, count: Option<usize>, scope: &Scope) -> Result<(), Error> {
        let _ = count;
        Err(Error::inapplicable(self.name(), ValueKind::Iterable, scope))
    }

    fn validate_comparable(
        &self,
        value: Option<ComparableRef<'_>>,
        scope: &Scope,
    ) -> Result<(), Error> {
        let _ = value;
        Err(Error::inapplicable(
            self.name(),
            ValueKind::Comparable,
            scope,
        ))
    }
}

macro_rules! forward_constraint {
    ($($wrapper:ty),+) => {
        $(
            impl<C: Constraint + ?Sized> Constraint for $wrapper {
                fn name(&self) -> &str { (**self).name() }
                fn options(&self) -> &ConstraintOptions { (**self).options() }
                fn set_up(&self) -> Result<(), SetUpError> { (**self).set_up() }
                fn validate(&self, value: &Value<'_>, scope: &Scope) -> Result<(), Error> {
                    (**self).validate(value, scope)
                }
            }
        )+
    };
}

forward_constraint!(&C, Box<C>, Arc<C>);

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Builder methods shared by every configurable constraint.
pub trait ConstraintExt: Constraint + Sized {
    fn options_mut(&mut self) -> &mut ConstraintOptions;

    /// Replaces the message template.
    #[must_use = "builder methods must be chained or built"]
    fn with_message(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.options_mut().set_message(template);
        self
    }

    /// Restricts the constraint to the given groups.
    #[must_use = "builder methods must be chained or built"]
    fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options_mut().set_groups(groups);
        self
    }

    /// Applies the constraint only when `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    fn when(mut self, condition: bool) -> Self {
        self.options_mut().set_ignored(!condition);
        self
    }
}

/// Implements [`ConstraintExt`] for types with an `options` field.
macro_rules! configurable {
    ($($ty:ident $(<$($generic:ident),+>)?),+ $(,)?) => {
        $(
            impl$(<$($generic),+>)? $crate::foundation::ConstraintExt for $ty$(<$($generic),+>)?
            where
                Self: $crate::foundation::Constraint,
            {
                fn options_mut(&mut self) -> &mut $crate::foundation::ConstraintOptions {
                    &mut self.options
                }
            }
        )+
    };
}

pub(crate) use configurable;

// ============================================================================
// DISPATCH
// ============================================================================

/// Applies one constraint to a value.
///
/// Skips the constraint if its `when` flag is off or its groups are not
/// active, then runs set-up and validation.
///
/// # Errors
///
/// Violations, [`Error::ConstraintSetUp`] when set-up fails, or any fatal
/// error raised by the constraint.
pub fn check(constraint: &dyn Constraint, value: &Value<'_>, scope: &Scope) -> Result<(), Error> {
    let options = constraint.options();
    if options.is_ignored() || scope.is_ignored_for_groups(options.groups()) {
        return Ok(());
    }

    if let Err(source) = constraint.set_up() {
        tracing::warn!(
            constraint = constraint.name(),
            path = %scope.path(),
            error = %source,
            "constraint set-up failed"
        );
        return Err(Error::ConstraintSetUp {
            name: Cow::Owned(constraint.name().to_owned()),
            path: scope.path().clone(),
            source,
        });
    }

    constraint.validate(value, scope)
}

/// Applies every constraint in order and collects their violations.
///
/// # Errors
///
/// The first fatal error; violations gathered so far are discarded.
pub fn check_all(
    constraints: &[Box<dyn Constraint + '_>],
    value: &Value<'_>,
    scope: &Scope,
) -> Result<ViolationList, Error> {
    let mut violations = ViolationList::new();
    for constraint in constraints {
        violations.append_result(check(constraint.as_ref(), value, scope))?;
    }
    Ok(violations)
}
