//! String length constraints
//!
//! Length is measured in Unicode scalar values (chars). Nil and empty
//! strings pass; use [`is_not_blank`](super::is_not_blank) to require a
//! value.

use super::message::{code, template};
use crate::foundation::constraint::configurable;
use crate::foundation::{Constraint, ConstraintOptions, Error, Scope, SetUpError};

/// Validates the length of a string against a minimum, a maximum, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
    exact: bool,
    options: ConstraintOptions,
}

impl Length {
    fn new(min: Option<usize>, max: Option<usize>, exact: bool) -> Self {
        Self {
            min,
            max,
            exact,
            options: ConstraintOptions::new(),
        }
    }

}

const NOT_EXACT: (&str, &str) = (code::LENGTH_NOT_EXACT, template::LENGTH_EXACT);
const TOO_FEW: (&str, &str) = (code::LENGTH_TOO_FEW, template::LENGTH_TOO_FEW);
const TOO_MANY: (&str, &str) = (code::LENGTH_TOO_MANY, template::LENGTH_TOO_MANY);

/// Requires at least `min` characters.
#[must_use]
pub fn has_min_length(min: usize) -> Length {
    Length::new(Some(min), None, false)
}

/// Requires at most `max` characters.
#[must_use]
pub fn has_max_length(max: usize) -> Length {
    Length::new(None, Some(max), false)
}

/// Requires between `min` and `max` characters, inclusive.
#[must_use]
pub fn has_length_between(min: usize, max: usize) -> Length {
    Length::new(Some(min), Some(max), false)
}

/// Requires exactly `length` characters.
#[must_use]
pub fn has_exact_length(length: usize) -> Length {
    Length::new(Some(length), Some(length), true)
}

impl Constraint for Length {
    fn name(&self) -> &'static str {
        "LengthConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn set_up(&self) -> Result<(), SetUpError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(SetUpError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn validate_string(&self, value: Option<&str>, scope: &Scope) -> Result<(), Error> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        let length = value.chars().count();

        let failure = if self.exact {
            self.min
                .filter(|min| length != *min)
                .map(|min| (NOT_EXACT, min))
        } else if let Some(min) = self.min.filter(|min| length < *min) {
            Some((TOO_FEW, min))
        } else {
            self.max
                .filter(|max| length > *max)
                .map(|max| (TOO_MANY, max))
        };

        let Some(((code, template), limit)) = failure else {
            return Ok(());
        };
        let message = self.options.message_or(template);
        Err(scope
            .build_violation(code, message)
            .with_plural_count(limit)
            .with_parameter("{{ limit }}", limit.to_string())
            .create()
            .into())
    }
}

configurable!(Length);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Value, check};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn messages(constraint: &Length, value: &str) -> Vec<String> {
        match check(constraint, &Value::String(Some(value)), &Scope::default()) {
            Ok(()) => Vec::new(),
            Err(error) => error
                .into_violations()
                .unwrap()
                .into_iter()
                .map(|v| v.message().to_owned())
                .collect(),
        }
    }

    #[rstest]
    #[case(has_min_length(3), "abc", true)]
    #[case(has_min_length(3), "ab", false)]
    #[case(has_min_length(3), "", true)]
    #[case(has_max_length(2), "abc", false)]
    #[case(has_length_between(2, 4), "привет", false)]
    #[case(has_length_between(2, 6), "привет", true)]
    #[case(has_exact_length(2), "ab", true)]
    #[case(has_exact_length(2), "abc", false)]
    fn test_length(#[case] constraint: Length, #[case] value: &str, #[case] valid: bool) {
        assert_eq!(messages(&constraint, value).is_empty(), valid);
    }

    #[test]
    fn test_plural_messages() {
        assert_eq!(
            messages(&has_min_length(1), "").len(),
            0,
            "empty strings are left to is_not_blank"
        );
        let too_short = messages(&has_min_length(5), "bar");
        assert_eq!(too_short.len(), 1);
        assert_eq!(
            too_short[0],
            "This value is too short. It should have 5 characters or more."
        );
        let too_long = messages(&has_max_length(1), "bar");
        assert_eq!(too_long.len(), 1);
        assert_eq!(
            too_long[0],
            "This value is too long. It should have 1 character or less."
        );
    }

    #[test]
    fn test_invalid_range_fails_set_up() {
        let value = Value::String(Some("abc"));
        let error = check(&has_length_between(5, 2), &value, &Scope::default()).unwrap_err();
        assert!(matches!(error, Error::ConstraintSetUp { .. }));
    }
}
