//! Nested validation
//!
//! Delegates to [`Validatable`] implementations, extending the property path
//! with the argument's path and, for collections, each element's index or
//! key.

use crate::foundation::argument::argument_ext;
use crate::foundation::{
    Argument, ArgumentOptions, Constraint, Error, Scope, Value, ViolationList, check_all,
};
use crate::validator::{Validatable, Validator};
use std::fmt::Display;

type Constraints<'a> = Vec<Box<dyn Constraint + 'a>>;

/// Runs `value.validate` in `scope` and collects its violations.
fn validate_nested(value: &dyn Validatable, scope: Scope) -> Result<ViolationList, Error> {
    let mut violations = ViolationList::new();
    violations.append_result(value.validate(&Validator::from_scope(scope)))?;
    Ok(violations)
}

// ============================================================================
// VALID
// ============================================================================

/// A nested validatable, optionally nil.
///
/// Constraints added with [`with`](Self::with) see the value as
/// [`Value::Nil`], so [`is_not_nil`](crate::constraints::is_not_nil) makes
/// it required.
#[must_use = "arguments do nothing until passed to a validator"]
pub struct ValidArgument<'a> {
    value: Option<&'a dyn Validatable>,
    constraints: Constraints<'a>,
    options: ArgumentOptions,
}

/// Validates a nested value by its own rules.
pub fn valid<T: Validatable>(value: &T) -> ValidArgument<'_> {
    nil_valid(Some(value))
}

/// Validates an optional nested value by its own rules; `None` is skipped.
pub fn nil_valid<T: Validatable>(value: Option<&T>) -> ValidArgument<'_> {
    ValidArgument {
        value: value.map(|value| value as &dyn Validatable),
        constraints: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

impl<'a> ValidArgument<'a> {
    pub fn with(mut self, constraint: impl Constraint + 'a) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }
}

impl Argument for ValidArgument<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        let nil = Value::Nil(self.value.is_none());
        let mut violations = check_all(&self.constraints, &nil, &scope)?;
        if let Some(value) = self.value {
            violations.join(validate_nested(value, scope)?);
        }
        Ok(violations)
    }
}

// ============================================================================
// VALID EACH
// ============================================================================

/// A slice of validatables, each validated at its index.
///
/// Constraints added with [`with`](Self::with) apply to the slice as an
/// iterable.
#[must_use = "arguments do nothing until passed to a validator"]
pub struct ValidEach<'a> {
    values: Vec<&'a dyn Validatable>,
    constraints: Constraints<'a>,
    options: ArgumentOptions,
}

pub fn valid_each<T: Validatable>(values: &[T]) -> ValidEach<'_> {
    ValidEach {
        values: values.iter().map(|v| v as &dyn Validatable).collect(),
        constraints: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

impl<'a> ValidEach<'a> {
    pub fn with(mut self, constraint: impl Constraint + 'a) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }
}

impl Argument for ValidEach<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        let count = Value::Iterable(Some(self.values.len()));
        let mut violations = check_all(&self.constraints, &count, &scope)?;
        for (index, value) in self.values.iter().enumerate() {
            violations.join(validate_nested(*value, scope.at_index(index))?);
        }
        Ok(violations)
    }
}

// ============================================================================
// VALID MAP
// ============================================================================

/// Map entries, each value validated at its key.
///
/// Entries are visited in the map's iteration order.
#[must_use = "arguments do nothing until passed to a validator"]
pub struct ValidMap<'a> {
    entries: Vec<(String, &'a dyn Validatable)>,
    constraints: Constraints<'a>,
    options: ArgumentOptions,
}

/// Validates every value of a map, e.g. `valid_map(&config.services)`.
pub fn valid_map<'a, K, V, I>(entries: I) -> ValidMap<'a>
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    K: Display + 'a,
    V: Validatable + 'a,
{
    ValidMap {
        entries: entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value as &dyn Validatable))
            .collect(),
        constraints: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

impl<'a> ValidMap<'a> {
    pub fn with(mut self, constraint: impl Constraint + 'a) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }
}

impl Argument for ValidMap<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        let count = Value::Iterable(Some(self.entries.len()));
        let mut violations = check_all(&self.constraints, &count, &scope)?;
        for (key, value) in &self.entries {
            violations.join(validate_nested(*value, scope.at_property(key.as_str()))?);
        }
        Ok(violations)
    }
}

argument_ext!(ValidArgument<'a>, ValidEach<'a>, ValidMap<'a>);
