//! Collection size constraints
//!
//! Apply to iterables and countables. Nil collections pass.

use super::message::{code, template};
use crate::foundation::constraint::configurable;
use crate::foundation::{Constraint, ConstraintOptions, Error, Scope, SetUpError};

/// Validates the element count of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count {
    min: Option<usize>,
    max: Option<usize>,
    exact: bool,
    options: ConstraintOptions,
}

/// Requires at least `min` elements.
#[must_use]
pub fn has_min_count(min: usize) -> Count {
    Count::new(Some(min), None, false)
}

/// Requires at most `max` elements.
#[must_use]
pub fn has_max_count(max: usize) -> Count {
    Count::new(None, Some(max), false)
}

/// Requires between `min` and `max` elements, inclusive.
#[must_use]
pub fn has_count_between(min: usize, max: usize) -> Count {
    Count::new(Some(min), Some(max), false)
}

/// Requires exactly `count` elements.
#[must_use]
pub fn has_exact_count(count: usize) -> Count {
    Count::new(Some(count), Some(count), true)
}

impl Count {
    fn new(min: Option<usize>, max: Option<usize>, exact: bool) -> Self {
        Self {
            min,
            max,
            exact,
            options: ConstraintOptions::new(),
        }
    }

    fn check(&self, count: usize, scope: &Scope) -> Result<(), Error> {
        let failure = if self.exact {
            self.min
                .filter(|min| count != *min)
                .map(|min| (code::COUNT_NOT_EXACT, template::COUNT_EXACT, min))
        } else if let Some(min) = self.min.filter(|min| count < *min) {
            Some((code::COUNT_TOO_FEW, template::COUNT_TOO_FEW, min))
        } else {
            self.max
                .filter(|max| count > *max)
                .map(|max| (code::COUNT_TOO_MANY, template::COUNT_TOO_MANY, max))
        };

        let Some((code, template, limit)) = failure else {
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

impl Constraint for Count {
    fn name(&self) -> &'static str {
        "CountConstraint"
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

    fn validate_countable(&self, count: usize, scope: &Scope) -> Result<(), Error> {
        self.check(count, scope)
    }

    fn validate_iterable(&self, count: Option<usize>, scope: &Scope) -> Result<(), Error> {
        count.map_or(Ok(()), |count| self.check(count, scope))
    }
}

configurable!(Count);
