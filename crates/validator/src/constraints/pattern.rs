//! Regular expression constraints

use super::message::{code, template};
use crate::foundation::constraint::configurable;
use crate::foundation::{Constraint, ConstraintOptions, Error, Scope, SetUpError};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
enum Source {
    Compiled(Regex),
    Pattern {
        pattern: String,
        compiled: OnceLock<Result<Regex, String>>,
    },
}

/// Validates a string against a regular expression.
///
/// Nil and empty strings pass.
#[derive(Debug, Clone)]
pub struct Matches {
    source: Source,
    negate: bool,
    options: ConstraintOptions,
}

/// Requires the string to match `regex`.
#[must_use]
pub fn matches(regex: Regex) -> Matches {
    Matches {
        source: Source::Compiled(regex),
        negate: false,
        options: ConstraintOptions::new(),
    }
}

/// Requires the string not to match `regex`.
#[must_use]
pub fn does_not_match(regex: Regex) -> Matches {
    Matches {
        negate: true,
        ..matches(regex)
    }
}

/// Requires the string to match `pattern`, compiled on first use.
///
/// An invalid pattern fails set-up.
#[must_use]
pub fn matches_pattern(pattern: impl Into<String>) -> Matches {
    Matches {
        source: Source::Pattern {
            pattern: pattern.into(),
            compiled: OnceLock::new(),
        },
        negate: false,
        options: ConstraintOptions::new(),
    }
}

impl Matches {
    fn regex(&self) -> Result<&Regex, SetUpError> {
        match &self.source {
            Source::Compiled(regex) => Ok(regex),
            Source::Pattern { pattern, compiled } => compiled
                .get_or_init(|| Regex::new(pattern).map_err(|error| error.to_string()))
                .as_ref()
                .map_err(|reason| SetUpError::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: reason.clone(),
                }),
        }
    }
}

impl Constraint for Matches {
    fn name(&self) -> &'static str {
        "RegexConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn set_up(&self) -> Result<(), SetUpError> {
        self.regex().map(|_| ())
    }

    fn validate_string(&self, value: Option<&str>, scope: &Scope) -> Result<(), Error> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        let regex = self.regex().map_err(|source| Error::ConstraintSetUp {
            name: self.name().to_owned().into(),
            path: scope.path().clone(),
            source,
        })?;
        if regex.is_match(value) != self.negate {
            return Ok(());
        }
        let message = self.options.message_or(template::NOT_VALID);
        Err(scope
            .build_violation(code::NOT_VALID, message)
            .with_parameter("{{ value }}", value)
            .create()
            .into())
    }
}

configurable!(Matches);
