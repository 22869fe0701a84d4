//! Ad-hoc constraints from closures

use super::message::{code, template};
use crate::foundation::constraint::configurable;
use crate::foundation::{Constraint, ConstraintOptions, Error, Scope, Value};
use std::borrow::Cow;
use std::fmt;

/// A constraint backed by a predicate over any kind of value.
pub struct Satisfies<F> {
    predicate: F,
    code: Cow<'static, str>,
    options: ConstraintOptions,
}

/// Requires `predicate` to return `true`.
///
/// The violation uses the `notValid` code unless
/// [`with_code`](Satisfies::with_code) says otherwise.
///
/// ```rust
/// use verity_validator::prelude::*;
///
/// let even = it::satisfies(|value: &Value<'_>| {
///     matches!(value, Value::Number(Some(Number::Int(n))) if n % 2 == 0)
/// });
/// assert!(Validator::new().validate(&[&number(4).with(even)]).is_ok());
/// ```
#[must_use]
pub fn satisfies<F>(predicate: F) -> Satisfies<F>
where
    F: Fn(&Value<'_>) -> bool + Send + Sync,
{
    Satisfies {
        predicate,
        code: Cow::Borrowed(code::NOT_VALID),
        options: ConstraintOptions::new(),
    }
}

impl<F> Satisfies<F> {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }
}

impl<F> fmt::Debug for Satisfies<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfies")
            .field("code", &self.code)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<F> Constraint for Satisfies<F>
where
    F: Fn(&Value<'_>) -> bool + Send + Sync,
{
    fn name(&self) -> &'static str {
        "SatisfiesConstraint"
    }

    fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    fn validate(&self, value: &Value<'_>, scope: &Scope) -> Result<(), Error> {
        if (self.predicate)(value) {
            return Ok(());
        }
        let message = self.options.message_or(template::NOT_VALID);
        Err(scope
            .build_violation(self.code.clone(), message)
            .create()
            .into())
    }
}

configurable!(Satisfies<F>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ConstraintExt, check};

    fn is_hashtag(value: &Value<'_>) -> bool {
        matches!(value, Value::String(Some(s)) if s.starts_with('#'))
    }

    #[test]
    fn test_satisfies() {
        let constraint = satisfies(is_hashtag)
            .with_code("notHashtag")
            .with_message("Should start with #.");
        let scope = Scope::default();

        let tagged = Value::String(Some("#rust"));
        assert!(check(&constraint, &tagged, &scope).is_ok());
        let violations = check(&constraint, &Value::String(Some("rust")), &scope)
            .unwrap_err()
            .into_violations()
            .unwrap();
        let violation = violations.first().unwrap();
        assert_eq!(violation.code(), "notHashtag");
        assert_eq!(violation.message(), "Should start with #.");
    }
}
