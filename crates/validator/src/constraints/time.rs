//! Time comparison constraints
//!
//! Nil times pass.

use super::comparison::Operator;
use super::message::{code, template};
use crate::foundation::constraint::configurable;
use crate::foundation::{Constraint, ConstraintOptions, Error, Scope, SetUpError};
use chrono::{DateTime, SecondsFormat, Utc};

/// Compares a time with a fixed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeComparison {
    operator: Operator,
    compared: DateTime<Utc>,
    code: &'static str,
    template: &'static str,
    options: ConstraintOptions,
}

impl TimeComparison {
    fn new(
        operator: Operator,
        compared: DateTime<Utc>,
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

fn format_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Constraint for TimeComparison {
    fn name(&self) -> &'static str {
        "TimeComparisonConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn validate_time(&self, value: Option<DateTime<Utc>>, scope: &Scope) -> Result<(), Error> {
        let Some(value) = value else {
            return Ok(());
        };
        if self.operator.holds(Some(value.cmp(&self.compared))) {
            return Ok(());
        }
        Err(scope
            .build_violation(self.code, self.options.message_or(self.template))
            .with_parameter("{{ comparedValue }}", format_time(&self.compared))
            .with_parameter("{{ value }}", format_time(&value))
            .create()
            .into())
    }
}

#[must_use]
pub fn is_earlier_than(compared: DateTime<Utc>) -> TimeComparison {
    TimeComparison::new(
        Operator::Less,
        compared,
        code::TOO_LATE_OR_EQUAL,
        template::TOO_LATE_OR_EQUAL,
    )
}

#[must_use]
pub fn is_earlier_than_or_equal(compared: DateTime<Utc>) -> TimeComparison {
    TimeComparison::new(
        Operator::LessOrEqual,
        compared,
        code::TOO_LATE,
        template::TOO_LATE,
    )
}

#[must_use]
pub fn is_later_than(compared: DateTime<Utc>) -> TimeComparison {
    TimeComparison::new(
        Operator::Greater,
        compared,
        code::TOO_EARLY_OR_EQUAL,
        template::TOO_EARLY_OR_EQUAL,
    )
}

#[must_use]
pub fn is_later_than_or_equal(compared: DateTime<Utc>) -> TimeComparison {
    TimeComparison::new(
        Operator::GreaterOrEqual,
        compared,
        code::TOO_EARLY,
        template::TOO_EARLY,
    )
}

/// Requires a time inside an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    min: DateTime<Utc>,
    max: DateTime<Utc>,
    options: ConstraintOptions,
}

/// Requires `min <= value <= max`.
#[must_use]
pub fn is_between_time(min: DateTime<Utc>, max: DateTime<Utc>) -> TimeRange {
    TimeRange {
        min,
        max,
        options: ConstraintOptions::new(),
    }
}

impl Constraint for TimeRange {
    fn name(&self) -> &'static str {
        "TimeRangeConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn set_up(&self) -> Result<(), SetUpError> {
        if self.min > self.max {
            return Err(SetUpError::InvalidRange {
                min: format_time(&self.min),
                max: format_time(&self.max),
            });
        }
        Ok(())
    }

    fn validate_time(&self, value: Option<DateTime<Utc>>, scope: &Scope) -> Result<(), Error> {
        let Some(value) = value else {
            return Ok(());
        };
        if (self.min..=self.max).contains(&value) {
            return Ok(());
        }
        let message = self.options.message_or(template::NOT_IN_RANGE);
        Err(scope
            .build_violation(code::NOT_IN_RANGE, message)
            .with_parameter("{{ min }}", format_time(&self.min))
            .with_parameter("{{ max }}", format_time(&self.max))
            .with_parameter("{{ value }}", format_time(&value))
            .create()
            .into())
    }
}

configurable!(TimeComparison, TimeRange);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Value, check};
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn check_time(constraint: &dyn Constraint, hour: Option<u32>) -> Result<(), Error> {
        let value = Value::Time(hour.map(at));
        check(constraint, &value, &Scope::default())
    }

    #[test]
    fn test_earlier_and_later() {
        let noon = at(12);
        assert!(check_time(&is_earlier_than(noon), Some(11)).is_ok());
        assert!(check_time(&is_earlier_than(noon), Some(12)).is_err());
        let until_noon = is_earlier_than_or_equal(noon);
        assert!(check_time(&until_noon, Some(12)).is_ok());
        assert!(check_time(&is_later_than(noon), Some(13)).is_ok());
        assert!(check_time(&is_later_than_or_equal(noon), None).is_ok());
    }

    #[test]
    fn test_message_renders_compared_time() {
        let violations = check_time(&is_later_than(at(12)), Some(9))
            .unwrap_err()
            .into_violations()
            .unwrap();
        assert_eq!(
            violations.first().unwrap().message(),
            "This value should be later than 2024-05-01T12:00:00Z."
        );
    }

    #[test]
    fn test_range() {
        let office_hours = is_between_time(at(8), at(17));
        assert!(check_time(&office_hours, Some(9)).is_ok());
        assert!(check_time(&office_hours, Some(18)).is_err());

        let inverted = is_between_time(at(17), at(8));
        assert!(check_time(&inverted, Some(9)).is_err());
    }
}
