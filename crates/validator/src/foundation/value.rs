//! Values under validation
//!
//! Constraints never see concrete Rust types. Arguments classify what they
//! wrap into a [`Value`] of one of a fixed set of kinds, and a constraint
//! implements the kinds it understands.

use super::error::Error;
use chrono::{DateTime, Utc};
use std::any::{Any, type_name};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

// ============================================================================
// KIND
// ============================================================================

/// The shape of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Number,
    String,
    Time,
    Countable,
    Iterable,
    Comparable,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Time => "time",
            Self::Countable => "countable",
            Self::Iterable => "iterable",
            Self::Comparable => "comparable",
        })
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// A number of any primitive width.
///
/// Integers are compared exactly; as soon as one side is a float both sides
/// are compared as `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Int(value) => value == 0,
            Self::Float(value) => value == 0.0,
        }
    }

    /// Compares two numbers; `None` when a float side is NaN.
    #[must_use]
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => Some(left.cmp(right)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

number_from!(Int as i128: i8, i16, i32, i64, u8, u16, u32, u64);
number_from!(Float as f64: f32, f64);

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::Int(value as i128)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Self::Int(value as i128)
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Self::Int(value)
    }
}

// ============================================================================
// COMPARABLE
// ============================================================================

/// A borrowed value of an arbitrary type, compared by equality.
#[derive(Clone, Copy)]
pub struct ComparableRef<'a> {
    value: &'a (dyn Any + Sync),
    type_name: &'static str,
}

impl<'a> ComparableRef<'a> {
    pub fn new<T: Any + Sync>(value: &'a T) -> Self {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Returns the value if it is a `T`.
    #[must_use]
    pub fn downcast<T: Any>(&self) -> Option<&'a T> {
        let value: &'a dyn Any = self.value;
        value.downcast_ref()
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ComparableRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComparableRef")
            .field(&self.type_name)
            .finish()
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A value classified into one of the kinds constraints understand.
///
/// Nullable kinds carry an `Option`; `None` is the nil value of that kind.
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    /// Only nil-ness is known; the payload is `true` for nil.
    Nil(bool),
    Bool(Option<bool>),
    Number(Option<Number>),
    String(Option<&'a str>),
    Time(Option<DateTime<Utc>>),
    /// A length that cannot be nil.
    Countable(usize),
    /// A collection; the payload is its element count.
    Iterable(Option<usize>),
    Comparable(Option<ComparableRef<'a>>),
}

impl<'a> Value<'a> {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Nil(_) => ValueKind::Nil,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Time(_) => ValueKind::Time,
            Self::Countable(_) => ValueKind::Countable,
            Self::Iterable(_) => ValueKind::Iterable,
            Self::Comparable(_) => ValueKind::Comparable,
        }
    }

    /// Returns `true` for the nil value of any nullable kind.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        match self {
            Self::Nil(is_nil) => *is_nil,
            Self::Bool(value) => value.is_none(),
            Self::Number(value) => value.is_none(),
            Self::String(value) => value.is_none(),
            Self::Time(value) => value.is_none(),
            Self::Countable(_) => false,
            Self::Iterable(value) => value.is_none(),
            Self::Comparable(value) => value.is_none(),
        }
    }

    /// Classifies a value of a type known only at run time.
    ///
    /// Recognizes booleans, every primitive number, `String`, `&'static str`,
    /// `DateTime<Utc>`, `serde_json::Value`, the `Option` of each of these,
    /// `Vec<String>` and `Vec<serde_json::Value>` as iterables, and `()` as
    /// nil.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotValidatable`] for any other type.
    pub fn classify<T: Any>(value: &'a T) -> Result<Value<'a>, Error> {
        let any: &'a dyn Any = value;
        classify_any(any).ok_or(Error::NotValidatable {
            type_name: type_name::<T>(),
        })
    }
}

fn classify_any(any: &dyn Any) -> Option<Value<'_>> {
    macro_rules! try_numbers {
        ($($ty:ty),+) => {
            $(
                if let Some(value) = any.downcast_ref::<$ty>() {
                    return Some(Value::Number(Some(Number::from(*value))));
                }
                if let Some(value) = any.downcast_ref::<Option<$ty>>() {
                    return Some(Value::Number(value.map(Number::from)));
                }
            )+
        };
    }

    if any.is::<()>() {
        return Some(Value::Nil(true));
    }
    if let Some(value) = any.downcast_ref::<bool>() {
        return Some(Value::Bool(Some(*value)));
    }
    if let Some(value) = any.downcast_ref::<Option<bool>>() {
        return Some(Value::Bool(*value));
    }
    try_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64);
    if let Some(value) = any.downcast_ref::<String>() {
        return Some(Value::String(Some(value.as_str())));
    }
    if let Some(value) = any.downcast_ref::<&'static str>() {
        return Some(Value::String(Some(*value)));
    }
    if let Some(value) = any.downcast_ref::<Option<String>>() {
        return Some(Value::String(value.as_deref()));
    }
    if let Some(value) = any.downcast_ref::<DateTime<Utc>>() {
        return Some(Value::Time(Some(*value)));
    }
    if let Some(value) = any.downcast_ref::<Option<DateTime<Utc>>>() {
        return Some(Value::Time(*value));
    }
    if let Some(value) = any.downcast_ref::<serde_json::Value>() {
        return Some(classify_json(value));
    }
    if let Some(value) = any.downcast_ref::<Option<serde_json::Value>>() {
        return Some(value.as_ref().map_or(Value::Nil(true), classify_json));
    }
    if let Some(values) = any.downcast_ref::<Vec<serde_json::Value>>() {
        return Some(Value::Iterable(Some(values.len())));
    }
    if let Some(values) = any.downcast_ref::<Vec<String>>() {
        return Some(Value::Iterable(Some(values.len())));
    }
    None
}

fn classify_json(value: &serde_json::Value) -> Value<'_> {
    use serde_json::Value as Json;

    match value {
        Json::Null => Value::Nil(true),
        Json::Bool(value) => Value::Bool(Some(*value)),
        Json::Number(number) => {
            let number = number
                .as_i64()
                .map(Number::from)
                .or_else(|| number.as_u64().map(Number::from))
                .or_else(|| number.as_f64().map(Number::from));
            Value::Number(number)
        }
        Json::String(value) => Value::String(Some(value.as_str())),
        Json::Array(items) => Value::Iterable(Some(items.len())),
        Json::Object(entries) => Value::Iterable(Some(entries.len())),
    }
}

// ============================================================================
// COLLECTION
// ============================================================================

/// Anything with an element count, validated as an iterable.
pub trait Collection {
    fn count(&self) -> usize;
}

impl<T> Collection for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    fn count(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for BTreeSet<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl Collection for serde_json::Map<String, serde_json::Value> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    fn count(&self) -> usize {
        (**self).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Number::from(3_u8), Number::from(3_i64), Ordering::Equal)]
    #[case(Number::from(2_i32), Number::from(2.5_f64), Ordering::Less)]
    #[case(Number::from(u64::MAX), Number::from(-1_i64), Ordering::Greater)]
    #[case(Number::from(0.1_f32), Number::from(0_i8), Ordering::Greater)]
    fn test_number_compare(
        #[case] left: Number,
        #[case] right: Number,
        #[case] expected: Ordering,
    ) {
        assert_eq!(left.compare(&right), Some(expected));
    }

    #[test]
    fn test_nan_is_incomparable() {
        assert_eq!(Number::from(f64::NAN).compare(&Number::from(1)), None);
    }

    fn kind_of<T: Any>(value: &T) -> ValueKind {
        Value::classify(value).unwrap().kind()
    }

    #[test]
    fn test_classify_known_types() {
        assert_eq!(kind_of(&true), ValueKind::Bool);
        assert_eq!(kind_of(&7_u16), ValueKind::Number);
        assert_eq!(kind_of(&String::from("x")), ValueKind::String);
        assert_eq!(kind_of(&"x"), ValueKind::String);
        assert_eq!(kind_of(&Utc::now()), ValueKind::Time);
        assert_eq!(kind_of(&vec!["a".to_owned()]), ValueKind::Iterable);
        assert!(Value::classify(&()).unwrap().is_nil());
        assert!(Value::classify(&None::<i32>).unwrap().is_nil());
    }

    #[test]
    fn test_classify_json() {
        let json = serde_json::json!({"a": [1, 2, 3]});
        let value = Value::classify(&json).unwrap();
        assert!(matches!(value, Value::Iterable(Some(1))));
        assert!(matches!(
            Value::classify(&serde_json::json!(null)).unwrap(),
            Value::Nil(true)
        ));
        assert!(matches!(
            Value::classify(&serde_json::json!(1.5)).unwrap(),
            Value::Number(Some(Number::Float(_)))
        ));
    }

    #[test]
    fn test_classify_unknown_type() {
        struct Opaque;
        let error = Value::classify(&Opaque).unwrap_err();
        match error {
            Error::NotValidatable { type_name } => assert!(type_name.ends_with("Opaque")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_comparable_downcast() {
        let value = 5_i32;
        let comparable = ComparableRef::new(&value);
        assert_eq!(comparable.downcast::<i32>(), Some(&5));
        assert_eq!(comparable.downcast::<i64>(), None);
        assert_eq!(comparable.type_name(), "i32");
    }

    #[test]
    fn test_comparable_downcast_custom_type() {
        #[derive(Debug, PartialEq, Eq)]
        struct Sku(&'static str);

        let sku = Sku("A-1");
        let comparable = Value::Comparable(Some(ComparableRef::new(&sku)));
        let Value::Comparable(Some(inner)) = comparable else {
            panic!("expected a comparable value");
        };
        assert_eq!(inner.downcast::<Sku>(), Some(&Sku("A-1")));
        assert_eq!(inner.downcast::<String>(), None);
    }

    proptest! {
        #[test]
        fn prop_integer_compare_matches_i64(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Number::from(a).compare(&Number::from(b)), Some(a.cmp(&b)));
        }
    }
}
