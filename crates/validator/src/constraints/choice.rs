//! Equality and choice constraints
//!
//! Work on comparable values of the constraint's own type `T`. String values
//! are also accepted and compared with the `Display` form of `T`, so
//! `is_one_of(["admin", "user"])` applies to `string(role)` directly.

use super::message::{code, template};
use crate::foundation::constraint::configurable;
use crate::foundation::{
    ComparableRef, Constraint, ConstraintOptions, Error, Scope, SetUpError, ValueKind,
};
use std::any::Any;
use std::fmt::{Debug, Display};

/// A comparable value of another type than the constraint's own.
fn type_mismatch(constraint: &dyn Constraint, scope: &Scope) -> Error {
    Error::inapplicable(constraint.name(), ValueKind::Comparable, scope)
}

// ============================================================================
// EQUAL TO
// ============================================================================

/// Compares a value with a fixed one of the same type.
#[derive(Debug, Clone)]
pub struct EqualTo<T> {
    compared: T,
    negate: bool,
    options: ConstraintOptions,
}

/// Requires the value to equal `compared`.
#[must_use]
pub fn is_equal_to<T>(compared: T) -> EqualTo<T> {
    EqualTo {
        compared,
        negate: false,
        options: ConstraintOptions::new(),
    }
}

/// Requires the value to differ from `compared`.
#[must_use]
pub fn is_not_equal_to<T>(compared: T) -> EqualTo<T> {
    EqualTo {
        compared,
        negate: true,
        options: ConstraintOptions::new(),
    }
}

impl<T> EqualTo<T>
where
    T: PartialEq + Display + Any + Send + Sync,
{
    fn check(&self, equal: bool, scope: &Scope) -> Result<(), Error> {
        if equal != self.negate {
            return Ok(());
        }
        let (code, template) = if self.negate {
            (code::IS_EQUAL, template::IS_EQUAL)
        } else {
            (code::NOT_EQUAL, template::NOT_EQUAL)
        };
        Err(scope
            .build_violation(code, self.options.message_or(template))
            .with_parameter("{{ comparedValue }}", self.compared.to_string())
            .create()
            .into())
    }
}

impl<T> Constraint for EqualTo<T>
where
    T: PartialEq + Display + Any + Send + Sync,
{
    fn name(&self) -> &'static str {
        if self.negate {
            "NotEqualToConstraint"
        } else {
            "EqualToConstraint"
        }
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn validate_string(&self, value: Option<&str>, scope: &Scope) -> Result<(), Error> {
        match value {
            None => Ok(()),
            Some(value) => self.check(self.compared.to_string() == value, scope),
        }
    }

    fn validate_comparable(
        &self,
        value: Option<ComparableRef<'_>>,
        scope: &Scope,
    ) -> Result<(), Error> {
        let Some(value) = value else {
            return Ok(());
        };
        let value = value
            .downcast::<T>()
            .ok_or_else(|| type_mismatch(self, scope))?;
        self.check(*value == self.compared, scope)
    }
}

// ============================================================================
// CHOICE
// ============================================================================

/// Requires the value to be one of a fixed set.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    choices: Vec<T>,
    options: ConstraintOptions,
}

/// Requires the value to be one of `choices`.
///
/// An empty list of choices is a set-up error.
#[must_use]
pub fn is_one_of<T, I>(choices: I) -> Choice<T>
where
    I: IntoIterator<Item = T>,
{
    Choice {
        choices: choices.into_iter().collect(),
        options: ConstraintOptions::new(),
    }
}

impl<T> Choice<T>
where
    T: PartialEq + Display + Debug + Any + Send + Sync,
{
    fn check(&self, found: bool, scope: &Scope) -> Result<(), Error> {
        if found {
            return Ok(());
        }
        let choices = self
            .choices
            .iter()
            .map(|choice| format!("\"{choice}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let message = self.options.message_or(template::NO_SUCH_CHOICE);
        Err(scope
            .build_violation(code::NO_SUCH_CHOICE, message)
            .with_parameter("{{ choices }}", choices)
            .create()
            .into())
    }
}

impl<T> Constraint for Choice<T>
where
    T: PartialEq + Display + Debug + Any + Send + Sync,
{
    fn name(&self) -> &'static str {
        "ChoiceConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn set_up(&self) -> Result<(), SetUpError> {
        if self.choices.is_empty() {
            return Err(SetUpError::EmptyChoices);
        }
        Ok(())
    }

    fn validate_string(&self, value: Option<&str>, scope: &Scope) -> Result<(), Error> {
        match value {
            None | Some("") => Ok(()),
            Some(value) => self.check(
                self.choices.iter().any(|choice| choice.to_string() == value),
                scope,
            ),
        }
    }

    fn validate_comparable(
        &self,
        value: Option<ComparableRef<'_>>,
        scope: &Scope,
    ) -> Result<(), Error> {
        let Some(value) = value else {
            return Ok(());
        };
        let value = value
            .downcast::<T>()
            .ok_or_else(|| type_mismatch(self, scope))?;
        self.check(self.choices.contains(value), scope)
    }
}

configurable!(EqualTo<T>, Choice<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Value, check};

    #[derive(Debug, PartialEq, Eq)]
    enum Role {
        Admin,
        Guest,
    }

    impl Display for Role {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(match self {
                Role::Admin => "admin",
                Role::Guest => "guest",
            })
        }
    }

    fn check_str(constraint: &dyn Constraint, value: &str) -> Result<(), Error> {
        check(constraint, &Value::String(Some(value)), &Scope::default())
    }

    fn check_comparable<T>(constraint: &dyn Constraint, value: &T) -> Result<(), Error>
    where
        T: Any + Sync,
    {
        let value = Value::Comparable(Some(ComparableRef::new(value)));
        check(constraint, &value, &Scope::default())
    }

    #[test]
    fn test_one_of_strings() {
        let constraint = is_one_of(["admin", "user"]);
        assert!(check_str(&constraint, "user").is_ok());
        assert!(check_str(&constraint, "").is_ok());
        assert!(check_str(&constraint, "root").is_err());
    }

    #[test]
    fn test_one_of_comparable() {
        let constraint = is_one_of([Role::Admin]);
        assert!(check_comparable(&constraint, &Role::Admin).is_ok());
        let error = check_comparable(&constraint, &Role::Guest).unwrap_err();
        assert!(error.is_violation());
    }

    #[test]
    fn test_type_mismatch_is_inapplicable() {
        let error = check_comparable(&is_one_of([Role::Admin]), &5_i32).unwrap_err();
        let Error::InapplicableConstraint { kind, .. } = error else {
            panic!("expected an inapplicable constraint, got {error:?}");
        };
        assert_eq!(kind, ValueKind::Comparable);
    }

    #[test]
    fn test_empty_choices_fail_set_up() {
        let error = check_str(&is_one_of(Vec::<String>::new()), "x").unwrap_err();
        assert_eq!(
            error.to_string(),
            "failed to set up constraint \"ChoiceConstraint\": empty list of choices"
        );
    }

    #[test]
    fn test_equal_to() {
        let value = 42_u64;
        assert!(check_comparable(&is_equal_to(42_u64), &value).is_ok());
        assert!(check_comparable(&is_not_equal_to(42_u64), &value).is_err());

        let violations = check_str(&is_equal_to("draft"), "final")
            .unwrap_err()
            .into_violations()
            .unwrap();
        assert_eq!(
            violations.first().unwrap().message(),
            "This value should be equal to draft."
        );
    }
}
