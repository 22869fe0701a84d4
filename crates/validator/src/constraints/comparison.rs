//! Numeric comparison constraints
//!
//! Numbers of any width are compared through [`Number`]: integers exactly,
//! mixed integer/float pairs as `f64`. Nil numbers pass.

use super::message::{code, template};
use crate::foundation::constraint::configurable;
use crate::foundation::{Constraint, ConstraintOptions, Error, Number, Scope, SetUpError};
use std::cmp::Ordering;

// ============================================================================
// COMPARISON
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Operator {
    /// `None` (incomparable, e.g. NaN) satisfies only `NotEqual`.
    pub(crate) fn holds(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (Self::NotEqual, None) => true,
            (_, None) => false,
            (Self::Equal, Some(ordering)) => ordering.is_eq(),
            (Self::NotEqual, Some(ordering)) => ordering.is_ne(),
            (Self::Less, Some(ordering)) => ordering.is_lt(),
            (Self::LessOrEqual, Some(ordering)) => ordering.is_le(),
            (Self::Greater, Some(ordering)) => ordering.is_gt(),
            (Self::GreaterOrEqual, Some(ordering)) => ordering.is_ge(),
        }
    }
}

/// Compares a number with a fixed one.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberComparison {
    operator: Operator,
    compared: Number,
    code: &'static str,
    template: &'static str,
    options: ConstraintOptions,
}

impl NumberComparison {
    fn new(
        operator: Operator,
        compared: Number,
        code: &'static str,
        template: &'static str,
    ) -> Self {
        Self {
            operator,
            compared,
            code,
            template,
            options: ConstraintOptions::new(),
        }
    }
}

impl Constraint for NumberComparison {
    fn name(&self) -> &'static str {
        "NumberComparisonConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn validate_number(&self, value: Option<Number>, scope: &Scope) -> Result<(), Error> {
        let Some(value) = value else {
            return Ok(());
        };
        if self.operator.holds(value.compare(&self.compared)) {
            return Ok(());
        }
        Err(scope
            .build_violation(self.code, self.options.message_or(self.template))
            .with_parameter("{{ comparedValue }}", self.compared.to_string())
            .with_parameter("{{ value }}", value.to_string())
            .create()
            .into())
    }
}

/// Requires the number to equal `compared`.
#[must_use]
pub fn is_equal_to_number(compared: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(
        Operator::Equal,
        compared.into(),
        code::NOT_EQUAL,
        template::NOT_EQUAL,
    )
}

/// Requires the number to differ from `compared`.
#[must_use]
pub fn is_not_equal_to_number(compared: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(
        Operator::NotEqual,
        compared.into(),
        code::IS_EQUAL,
        template::IS_EQUAL,
    )
}

#[must_use]
pub fn is_less_than(compared: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(
        Operator::Less,
        compared.into(),
        code::TOO_HIGH_OR_EQUAL,
        template::TOO_HIGH_OR_EQUAL,
    )
}

#[must_use]
pub fn is_less_than_or_equal(compared: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(
        Operator::LessOrEqual,
        compared.into(),
        code::TOO_HIGH,
        template::TOO_HIGH,
    )
}

#[must_use]
pub fn is_greater_than(compared: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(
        Operator::Greater,
        compared.into(),
        code::TOO_LOW_OR_EQUAL,
        template::TOO_LOW_OR_EQUAL,
    )
}

#[must_use]
pub fn is_greater_than_or_equal(compared: impl Into<Number>) -> NumberComparison {
    NumberComparison::new(
        Operator::GreaterOrEqual,
        compared.into(),
        code::TOO_LOW,
        template::TOO_LOW,
    )
}

#[must_use]
pub fn is_positive() -> NumberComparison {
    NumberComparison::new(
        Operator::Greater,
        Number::Int(0),
        code::NOT_POSITIVE,
        template::NOT_POSITIVE,
    )
}

#[must_use]
pub fn is_positive_or_zero() -> NumberComparison {
    NumberComparison::new(
        Operator::GreaterOrEqual,
        Number::Int(0),
        code::NOT_POSITIVE_OR_ZERO,
        template::NOT_POSITIVE_OR_ZERO,
    )
}

#[must_use]
pub fn is_negative() -> NumberComparison {
    NumberComparison::new(
        Operator::Less,
        Number::Int(0),
        code::NOT_NEGATIVE,
        template::NOT_NEGATIVE,
    )
}

#[must_use]
pub fn is_negative_or_zero() -> NumberComparison {
    NumberComparison::new(
        Operator::LessOrEqual,
        Number::Int(0),
        code::NOT_NEGATIVE_OR_ZERO,
        template::NOT_NEGATIVE_OR_ZERO,
    )
}

// ============================================================================
// RANGE
// ============================================================================

/// Requires a number inside an inclusive range.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberRange {
    min: Number,
    max: Number,
    options: ConstraintOptions,
}

/// Requires `min <= value <= max`.
#[must_use]
pub fn is_between(min: impl Into<Number>, max: impl Into<Number>) -> NumberRange {
    NumberRange {
        min: min.into(),
        max: max.into(),
        options: ConstraintOptions::new(),
    }
}

impl Constraint for NumberRange {
    fn name(&self) -> &'static str {
        "RangeConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn set_up(&self) -> Result<(), SetUpError> {
        if Operator::Greater.holds(self.min.compare(&self.max)) {
            return Err(SetUpError::InvalidRange {
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }
        Ok(())
    }

    fn validate_number(&self, value: Option<Number>, scope: &Scope) -> Result<(), Error> {
        let Some(value) = value else {
            return Ok(());
        };
        if Operator::GreaterOrEqual.holds(value.compare(&self.min))
            && Operator::LessOrEqual.holds(value.compare(&self.max))
        {
            return Ok(());
        }
        let message = self.options.message_or(template::NOT_IN_RANGE);
        Err(scope
            .build_violation(code::NOT_IN_RANGE, message)
            .with_parameter("{{ min }}", self.min.to_string())
            .with_parameter("{{ max }}", self.max.to_string())
            .with_parameter("{{ value }}", value.to_string())
            .create()
            .into())
    }
}

configurable!(NumberComparison, NumberRange);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Value, check};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn check_number(constraint: &dyn Constraint, value: impl Into<Number>) -> Result<(), Error> {
        let value = Value::Number(Some(value.into()));
        check(constraint, &value, &Scope::default())
    }

    fn violation_code(constraint: &dyn Constraint, value: impl Into<Number>) -> Option<String> {
        let error = check_number(constraint, value).err()?;
        let violations = error.into_violations().ok()?;
        violations.first().map(|v| v.code().to_owned())
    }

    #[rstest]
    #[case(is_less_than(10), 10, Some("tooHighOrEqual"))]
    #[case(is_less_than(10), 9, None)]
    #[case(is_less_than_or_equal(10), 10, None)]
    #[case(is_less_than_or_equal(10), 11, Some("tooHigh"))]
    #[case(is_greater_than(0.5), 0, Some("tooLowOrEqual"))]
    #[case(is_greater_than_or_equal(1), 1, None)]
    #[case(is_positive(), 0, Some("notPositive"))]
    #[case(is_positive_or_zero(), 0, None)]
    #[case(is_negative(), -3, None)]
    #[case(is_negative_or_zero(), 1, Some("notNegativeOrZero"))]
    #[case(is_equal_to_number(3_u8), 3, None)]
    #[case(is_not_equal_to_number(3), 3, Some("isEqual"))]
    fn test_comparisons(
        #[case] constraint: NumberComparison,
        #[case] value: i64,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(violation_code(&constraint, value).as_deref(), expected);
    }

    #[test]
    fn test_message_parameters() {
        let violations = check_number(&is_less_than(10), 12)
            .unwrap_err()
            .into_violations()
            .unwrap();
        assert_eq!(
            violations.first().unwrap().message(),
            "This value should be less than 10."
        );
    }

    #[test]
    fn test_range() {
        assert_eq!(violation_code(&is_between(1, 5), 5), None);
        let code = violation_code(&is_between(1, 5), 6);
        assert_eq!(code.as_deref(), Some("notInRange"));
        assert!(check_number(&is_between(5, 1), 3).is_err());
    }

    #[test]
    fn test_nil_passes() {
        let value = Value::Number(None);
        assert!(check(&is_positive(), &value, &Scope::default()).is_ok());
    }

    proptest! {
        #[test]
        fn prop_between_agrees_with_range(value in -100_i64..100, min in -50_i64..0, max in 0_i64..50) {
            let valid = (min..=max).contains(&value);
            prop_assert_eq!(violation_code(&is_between(min, max), value).is_none(), valid);
        }
    }
}
