//! References to constraints stored in the validator

use crate::foundation::{Constraint, Error, Scope, Value, check};

/// Applies the constraint stored under a key at validation time.
///
/// Created by [`Validator::validate_by`](crate::Validator::validate_by).
/// A missing key is a fatal [`Error::ConstraintNotStored`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stored {
    key: String,
}

impl Stored {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Refers to the constraint stored under `key`.
#[must_use]
pub fn stored(key: impl Into<String>) -> Stored {
    Stored::new(key)
}

impl Constraint for Stored {
    fn name(&self) -> &'static str {
        "StoredConstraint"
    }

    fn validate(&self, value: &Value<'_>, scope: &Scope) -> Result<(), Error> {
        let constraint = scope
            .stored_constraint(&self.key)
            .ok_or_else(|| Error::ConstraintNotStored(self.key.clone()))?;
        check(constraint.as_ref(), value, scope)
    }
}
