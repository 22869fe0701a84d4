//! Value arguments
//!
//! Each constructor wraps one value with the kind constraints will see.
//! Constraints are attached with [`ValueArgument::with`].

use crate::foundation::argument::argument_ext;
use crate::foundation::{
    Argument, ArgumentOptions, Collection, ComparableRef, Constraint, Error, Number, Scope, Value,
    ViolationList, check_all,
};
use chrono::{DateTime, Utc};
use std::any::{Any, type_name};

/// A value with its constraints.
#[must_use = "arguments do nothing until passed to a validator"]
pub struct ValueArgument<'a> {
    /// `Err` carries the type name of a value that could not be classified.
    value: Result<Value<'a>, &'static str>,
    constraints: Vec<Box<dyn Constraint + 'a>>,
    options: ArgumentOptions,
}

impl<'a> ValueArgument<'a> {
    fn new(value: Value<'a>) -> Self {
        Self {
            value: Ok(value),
            constraints: Vec::new(),
            options: ArgumentOptions::default(),
        }
    }

    /// Adds a constraint.
    pub fn with(mut self, constraint: impl Constraint + 'a) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Adds every constraint of `constraints`.
    pub fn with_all<C, I>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Constraint + 'a,
    {
        let boxed = constraints
            .into_iter()
            .map(|c| Box::new(c) as Box<dyn Constraint + 'a>);
        self.constraints.extend(boxed);
        self
    }
}

impl Argument for ValueArgument<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        let value = self
            .value
            .map_err(|type_name| Error::NotValidatable { type_name })?;
        check_all(&self.constraints, &value, &scope)
    }
}

argument_ext!(ValueArgument<'a>);

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// A value known only by its nil-ness, e.g. an optional struct.
pub fn nil<'a>(is_nil: bool) -> ValueArgument<'a> {
    ValueArgument::new(Value::Nil(is_nil))
}

pub fn boolean<'a>(value: bool) -> ValueArgument<'a> {
    ValueArgument::new(Value::Bool(Some(value)))
}

pub fn nil_boolean<'a>(value: Option<bool>) -> ValueArgument<'a> {
    ValueArgument::new(Value::Bool(value))
}

pub fn number<'a>(value: impl Into<Number>) -> ValueArgument<'a> {
    ValueArgument::new(Value::Number(Some(value.into())))
}

pub fn nil_number<'a, N: Into<Number>>(value: Option<N>) -> ValueArgument<'a> {
    ValueArgument::new(Value::Number(value.map(Into::into)))
}

pub fn string(value: &str) -> ValueArgument<'_> {
    ValueArgument::new(Value::String(Some(value)))
}

pub fn nil_string(value: Option<&str>) -> ValueArgument<'_> {
    ValueArgument::new(Value::String(value))
}

/// A list of strings, each validated at its index.
pub fn strings<'a, S: AsRef<str>>(values: &'a [S]) -> EachString<'a> {
    EachString {
        values: values.iter().map(AsRef::<str>::as_ref).collect(),
        constraints: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

pub fn time<'a>(value: DateTime<Utc>) -> ValueArgument<'a> {
    ValueArgument::new(Value::Time(Some(value)))
}

pub fn nil_time<'a>(value: Option<DateTime<Utc>>) -> ValueArgument<'a> {
    ValueArgument::new(Value::Time(value))
}

/// A length that cannot be nil.
pub fn countable<'a>(count: usize) -> ValueArgument<'a> {
    ValueArgument::new(Value::Countable(count))
}

/// A collection, validated by its element count.
pub fn iterable<'a, C: Collection + ?Sized>(values: &C) -> ValueArgument<'a> {
    ValueArgument::new(Value::Iterable(Some(values.count())))
}

pub fn nil_iterable<'a, C: Collection + ?Sized>(values: Option<&C>) -> ValueArgument<'a> {
    ValueArgument::new(Value::Iterable(values.map(Collection::count)))
}

/// A value of any type compared by equality.
pub fn comparable<T: Any + Sync>(value: &T) -> ValueArgument<'_> {
    ValueArgument::new(Value::Comparable(Some(ComparableRef::new(value))))
}

pub fn nil_comparable<T: Any + Sync>(value: Option<&T>) -> ValueArgument<'_> {
    ValueArgument::new(Value::Comparable(value.map(ComparableRef::new)))
}

/// A value whose kind is decided at run time.
///
/// See [`Value::classify`] for the supported types. Any other type fails
/// with [`Error::NotValidatable`] when the argument runs.
pub fn value<T: Any + Sync>(value: &T) -> ValueArgument<'_> {
    ValueArgument {
        value: Value::classify(value).map_err(|_| type_name::<T>()),
        constraints: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

// ============================================================================
// EACH STRING
// ============================================================================

/// Strings validated one by one, each at its own index.
#[must_use = "arguments do nothing until passed to a validator"]
pub struct EachString<'a> {
    values: Vec<&'a str>,
    constraints: Vec<Box<dyn Constraint + 'a>>,
    options: ArgumentOptions,
}

impl<'a> EachString<'a> {
    pub fn with(mut self, constraint: impl Constraint + 'a) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }
}

impl Argument for EachString<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        let mut violations = ViolationList::new();
        for (index, value) in self.values.iter().enumerate() {
            let item = scope.at_index(index);
            let text = Value::String(Some(value));
            violations.join(check_all(&self.constraints, &text, &item)?);
        }
        Ok(violations)
    }
}

argument_ext!(EachString<'a>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{has_min_length, is_not_blank, is_positive};
    use crate::foundation::{ArgumentExt, ConstraintExt};
    use pretty_assertions::assert_eq;

    fn paths(list: &ViolationList) -> Vec<String> {
        list.iter().map(|v| v.path().to_string()).collect()
    }

    #[test]
    fn test_value_argument_path() {
        let list = string("")
            .with(is_not_blank())
            .at_property("title")
            .execute(&Scope::default())
            .unwrap();
        assert_eq!(paths(&list), ["title"]);
    }

    #[test]
    fn test_when_false_skips() {
        let list = string("")
            .with(is_not_blank())
            .when(false)
            .execute(&Scope::default())
            .unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_with_all() {
        let list = number(-1)
            .with_all([is_positive(), is_positive().with_message("Again.")])
            .execute(&Scope::default())
            .unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_each_string_indices() {
        let tags = vec!["ok".to_owned(), String::new(), "x".to_owned()];
        let list = strings(&tags)
            .with(is_not_blank())
            .with(has_min_length(2))
            .at_property("tags")
            .execute(&Scope::default())
            .unwrap();
        assert_eq!(paths(&list), ["tags[1]", "tags[2]"]);
    }

    #[test]
    fn test_unclassifiable_value_is_fatal() {
        struct Opaque;
        let error = value(&Opaque)
            .with(is_not_blank())
            .execute(&Scope::default())
            .unwrap_err();
        assert!(matches!(error, Error::NotValidatable { .. }));
    }
}
