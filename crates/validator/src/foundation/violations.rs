//! Ordered collections of violations.

use super::error::Error;
use super::violation::Violation;
use serde::Serialize;
use std::fmt;

/// An ordered list of [`Violation`]s.
///
/// Order is the order in which violations were produced. Joining lists
/// preserves the order of both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViolationList {
    violations: Vec<Violation>,
}

impl ViolationList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Moves every violation of `other` to the end of this list.
    pub fn join(&mut self, other: ViolationList) {
        if self.violations.is_empty() {
            self.violations = other.violations;
        } else {
            self.violations.extend(other.violations);
        }
    }

    /// Absorbs the violations carried by `error`.
    ///
    /// A fatal error is handed back unchanged and the list is left as it was.
    pub fn append_from_error(&mut self, error: Error) -> Result<(), Error> {
        match error {
            Error::Violation(violation) => {
                self.push(*violation);
                Ok(())
            }
            Error::Violations(list) => {
                self.join(list);
                Ok(())
            }
            fatal => Err(fatal),
        }
    }

    /// Same as [`append_from_error`](Self::append_from_error), accepting a
    /// whole validation result.
    pub fn append_result(&mut self, result: Result<(), Error>) -> Result<(), Error> {
        match result {
            Ok(()) => Ok(()),
            Err(error) => self.append_from_error(error),
        }
    }

    /// Returns a new list with the violations whose code is in `codes`.
    #[must_use]
    pub fn filter(&self, codes: &[&str]) -> ViolationList {
        self.violations
            .iter()
            .filter(|violation| violation.is(codes))
            .cloned()
            .collect()
    }

    /// Returns `true` if any violation has a code in `codes`.
    #[must_use]
    pub fn has(&self, codes: &[&str]) -> bool {
        self.violations.iter().any(|violation| violation.is(codes))
    }

    #[must_use]
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Violation> {
        self.violations.last()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Violation> {
        self.violations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Violation> {
        self.violations
    }

    /// `Ok(())` for an empty list, otherwise the list as an error.
    pub fn into_result(self) -> Result<(), Error> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(Error::Violations(self))
        }
    }

    /// `None` for an empty list, otherwise the list as an error.
    #[must_use]
    pub fn into_error(self) -> Option<Error> {
        self.into_result().err()
    }
}

impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, violation) in self.violations.iter().enumerate() {
            if position > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ViolationList {}

impl From<Violation> for ViolationList {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl From<Vec<Violation>> for ViolationList {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl FromIterator<Violation> for ViolationList {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl Extend<Violation> for ViolationList {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.violations.extend(iter);
    }
}

impl IntoIterator for ViolationList {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::path::PropertyPath;
    use pretty_assertions::assert_eq;

    fn violation(code: &'static str, property: &str) -> Violation {
        Violation::new(code, format!("{code} message"))
            .with_path(PropertyPath::new().with_property(property))
    }

    #[test]
    fn test_append_single_violation() {
        let mut list = ViolationList::new();
        list.append_from_error(Error::from(violation("a", "x"))).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.first().unwrap().code(), "a");
    }

    #[test]
    fn test_append_list_keeps_order() {
        let mut list = ViolationList::from(violation("a", "x"));
        let other: ViolationList = [violation("b", "y"), violation("c", "z")]
            .into_iter()
            .collect();
        list.append_from_error(Error::Violations(other)).unwrap();

        let codes: Vec<&str> = list.iter().map(Violation::code).collect();
        assert_eq!(codes, ["a", "b", "c"]);
    }

    #[test]
    fn test_append_fatal_error_is_returned_unchanged() {
        let mut list = ViolationList::from(violation("a", "x"));
        let result = list.append_from_error(Error::ConstraintNotStored("key".into()));

        assert!(matches!(result, Err(Error::ConstraintNotStored(key)) if key == "key"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_append_ok_result() {
        let mut list = ViolationList::new();
        list.append_result(Ok(())).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_filter_and_has() {
        let list = ViolationList::from(vec![
            violation("a", "x"),
            violation("b", "y"),
            violation("a", "z"),
        ]);

        assert_eq!(list.filter(&["a"]).len(), 2);
        assert!(list.filter(&["missing"]).is_empty());
        assert!(list.has(&["missing", "b"]));
        assert!(!list.has(&["missing"]));
    }

    #[test]
    fn test_into_result() {
        assert!(ViolationList::new().into_result().is_ok());
        assert!(ViolationList::new().into_error().is_none());

        let list = ViolationList::from(violation("a", "x"));
        let error = list.into_result().unwrap_err();
        assert!(error.is_violation());
    }

    #[test]
    fn test_display_joins_messages() {
        let list: ViolationList = [violation("a", "x"), violation("b", "y")]
            .into_iter()
            .collect();
        assert_eq!(
            list.to_string(),
            "violation at 'x': a message; violation at 'y': b message"
        );
    }

    #[test]
    fn test_serialize_as_array() {
        let list: ViolationList = [violation("a", "x"), Violation::new("b", "root")]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            serde_json::json!([
                {"code": "a", "message": "a message", "propertyPath": "x"},
                {"code": "b", "message": "root"},
            ])
        );
    }
}
