//! Property paths
//!
//! A [`PropertyPath`] records where inside a nested value a violation was
//! raised. Paths are persistent: appending an element returns a new path that
//! shares its prefix with the original, so a parent path handed to several
//! child scopes is never mutated.
//!
//! # Examples
//!
//! ```rust
//! use verity_validator::foundation::PropertyPath;
//!
//! let path = PropertyPath::new()
//!     .with_property("properties")
//!     .with_index(1)
//!     .with_property("tag");
//!
//! assert_eq!(path.to_string(), "properties[1].tag");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// PATH ELEMENT
// ============================================================================

/// A single step of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyPathElement {
    /// A named property (struct field or map key).
    Property(String),
    /// A position inside an array or slice.
    Index(usize),
}

impl PropertyPathElement {
    /// Returns `true` for [`PropertyPathElement::Index`].
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for PropertyPathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for PropertyPathElement {
    fn from(name: &str) -> Self {
        Self::Property(name.to_owned())
    }
}

impl From<String> for PropertyPathElement {
    fn from(name: String) -> Self {
        Self::Property(name)
    }
}

impl From<usize> for PropertyPathElement {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

// ============================================================================
// PROPERTY PATH
// ============================================================================

#[derive(Debug)]
struct Node {
    parent: Option<Arc<Node>>,
    element: PropertyPathElement,
}

/// An ordered, persistent sequence of [`PropertyPathElement`]s.
///
/// Cloning is O(1) and appending is O(1); the previous path stays valid and
/// unchanged.
#[derive(Clone, Default)]
pub struct PropertyPath {
    head: Option<Arc<Node>>,
    len: usize,
}

impl PropertyPath {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new path with `element` appended.
    #[must_use]
    pub fn with(&self, element: impl Into<PropertyPathElement>) -> Self {
        Self {
            head: Some(Arc::new(Node {
                parent: self.head.clone(),
                element: element.into(),
            })),
            len: self.len + 1,
        }
    }

    /// Returns a new path with a property name appended.
    #[must_use]
    pub fn with_property(&self, name: impl Into<String>) -> Self {
        self.with(PropertyPathElement::Property(name.into()))
    }

    /// Returns a new path with an array index appended.
    #[must_use]
    pub fn with_index(&self, index: usize) -> Self {
        self.with(PropertyPathElement::Index(index))
    }

    /// Returns a new path with every element of `other` appended in order.
    #[must_use]
    pub fn join(&self, other: &PropertyPath) -> Self {
        other
            .elements()
            .into_iter()
            .fold(self.clone(), |path, element| path.with(element.clone()))
    }

    /// Returns a new path with every element of `elements` appended in order.
    #[must_use]
    pub fn extend<I>(&self, elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PropertyPathElement>,
    {
        elements
            .into_iter()
            .fold(self.clone(), |path, element| path.with(element))
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PropertyPathElement> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Returns the elements from root to leaf.
    ///
    /// Custom violation factories use this to render paths in other
    /// notations (for example JSON pointers).
    #[must_use]
    pub fn elements(&self) -> Vec<&PropertyPathElement> {
        let mut elements = Vec::with_capacity(self.len);
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            elements.push(&current.element);
            node = current.parent.as_deref();
        }
        elements.reverse();
        elements
    }

    /// Renders the path as `a.b[2].c`.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, element) in self.elements().into_iter().enumerate() {
            if position > 0 && !element.is_index() {
                f.write_str(".")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyPath({:?})", self.to_string())
    }
}

impl PartialEq for PropertyPath {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.elements() == other.elements()
    }
}

impl Eq for PropertyPath {}

impl<E: Into<PropertyPathElement>> FromIterator<E> for PropertyPath {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new().extend(iter)
    }
}

impl Serialize for PropertyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_and_indices() {
        let path: PropertyPath = [
            PropertyPathElement::from("properties"),
            PropertyPathElement::from(1),
            PropertyPathElement::from("tag"),
        ]
        .into_iter()
        .collect();

        assert_eq!(path.format(), "properties[1].tag");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(PropertyPath::new().to_string(), "");
    }

    #[test]
    fn test_format_leading_index() {
        let path = PropertyPath::new().with_index(0).with_property("name");
        assert_eq!(path.to_string(), "[0].name");
    }

    #[test]
    fn test_consecutive_indices() {
        let path = PropertyPath::new()
            .with_property("matrix")
            .with_index(2)
            .with_index(3);
        assert_eq!(path.to_string(), "matrix[2][3]");
    }

    #[test]
    fn test_append_does_not_touch_parent() {
        let parent = PropertyPath::new().with_property("items");
        let first = parent.with_index(0);
        let second = parent.with_index(1);

        assert_eq!(parent.to_string(), "items");
        assert_eq!(first.to_string(), "items[0]");
        assert_eq!(second.to_string(), "items[1]");
    }

    #[test]
    fn test_structural_equality() {
        let built = PropertyPath::new().with_property("a").with_index(1);
        let collected: PropertyPath = ["a".into(), PropertyPathElement::Index(1)]
            .into_iter()
            .collect();

        assert_eq!(built, collected);
        assert_ne!(built, PropertyPath::new().with_property("a"));
    }

    #[test]
    fn test_join() {
        let base = PropertyPath::new().with_property("order");
        let tail = PropertyPath::new().with_property("lines").with_index(4);
        assert_eq!(base.join(&tail).to_string(), "order.lines[4]");
        assert_eq!(base.join(&tail).len(), 3);
    }

    #[test]
    fn test_serialize_as_string() {
        let path = PropertyPath::new().with_property("a").with_index(0);
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"a[0]\"");
    }
}
