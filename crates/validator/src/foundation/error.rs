//! Validation errors
//!
//! Every validation entry point returns `Result<(), Error>`. An error is
//! either a *violation* outcome ([`Error::Violation`], [`Error::Violations`])
//! meaning the value is invalid, or a *fatal* error meaning validation could
//! not be carried out. Fatal errors abort the current walk immediately and
//! are never mixed with violations.

use super::path::PropertyPath;
use super::scope::Scope;
use super::value::ValueKind;
use super::violation::Violation;
use super::violations::ViolationList;
use std::borrow::Cow;

/// Boxed error for user code plugged into validation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// ERROR
// ============================================================================

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// One violation.
    #[error(transparent)]
    Violation(Box<Violation>),

    /// One or more violations.
    #[error(transparent)]
    Violations(ViolationList),

    /// A constraint rejected its own configuration.
    #[error("failed to set up constraint \"{name}\"{at}: {source}", at = describe_path(.path))]
    ConstraintSetUp {
        name: Cow<'static, str>,
        path: PropertyPath,
        #[source]
        source: SetUpError,
    },

    /// A constraint was applied to a kind of value it does not support.
    #[error(
        "constraint \"{name}\" cannot be applied to value of type \"{kind}\"{at}",
        at = describe_path(.path)
    )]
    InapplicableConstraint {
        name: Cow<'static, str>,
        kind: ValueKind,
        path: PropertyPath,
    },

    /// A value passed to the reflective entry point has no known shape.
    #[error("cannot validate value of type \"{type_name}\"")]
    NotValidatable { type_name: &'static str },

    #[error("constraint with key \"{0}\" is not stored")]
    ConstraintNotStored(String),

    #[error("constraint with key \"{0}\" is already stored")]
    ConstraintAlreadyStored(String),

    /// The context was cancelled before validation finished.
    #[error("validation cancelled")]
    Cancelled,

    /// An error raised by user code.
    #[error(transparent)]
    Other(BoxError),
}

fn describe_path(path: &PropertyPath) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at path \"{path}\"")
    }
}

impl Error {
    /// Wraps an arbitrary error as a fatal one.
    pub fn other(error: impl Into<BoxError>) -> Self {
        Self::Other(error.into())
    }

    pub(crate) fn inapplicable(name: &str, kind: ValueKind, scope: &Scope) -> Self {
        Self::InapplicableConstraint {
            name: Cow::Owned(name.to_owned()),
            kind,
            path: scope.path().clone(),
        }
    }

    /// Returns `true` for violation outcomes, `false` for fatal errors.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_) | Self::Violations(_))
    }

    /// Returns a copy of the carried violations, if this is a violation
    /// outcome.
    #[must_use]
    pub fn violations(&self) -> Option<ViolationList> {
        match self {
            Self::Violation(violation) => Some(ViolationList::from(violation.as_ref().clone())),
            Self::Violations(list) => Some(list.clone()),
            _ => None,
        }
    }

    /// Converts a violation outcome into its list; a fatal error is returned
    /// unchanged.
    pub fn into_violations(self) -> Result<ViolationList, Error> {
        let mut list = ViolationList::new();
        list.append_from_error(self)?;
        Ok(list)
    }
}

impl From<Violation> for Error {
    fn from(violation: Violation) -> Self {
        Self::Violation(Box::new(violation))
    }
}

impl From<ViolationList> for Error {
    fn from(list: ViolationList) -> Self {
        Self::Violations(list)
    }
}

// ============================================================================
// SET-UP ERROR
// ============================================================================

/// Why a constraint refused its configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SetUpError {
    #[error("empty list of choices")]
    EmptyChoices,

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl SetUpError {
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_up_message_with_path() {
        let error = Error::ConstraintSetUp {
            name: "ChoiceConstraint".into(),
            path: PropertyPath::new().with_property("role"),
            source: SetUpError::EmptyChoices,
        };
        assert_eq!(
            error.to_string(),
            "failed to set up constraint \"ChoiceConstraint\" at path \"role\": \
             empty list of choices"
        );
    }

    #[test]
    fn test_set_up_message_at_root() {
        let error = Error::ConstraintSetUp {
            name: "ChoiceConstraint".into(),
            path: PropertyPath::new(),
            source: SetUpError::EmptyChoices,
        };
        assert_eq!(
            error.to_string(),
            "failed to set up constraint \"ChoiceConstraint\": empty list of choices"
        );
    }

    #[test]
    fn test_inapplicable_message() {
        let error = Error::InapplicableConstraint {
            name: "IsTrueConstraint".into(),
            kind: ValueKind::String,
            path: PropertyPath::new(),
        };
        assert_eq!(
            error.to_string(),
            "constraint \"IsTrueConstraint\" cannot be applied to value of type \"string\""
        );
    }

    #[test]
    fn test_not_stored_message() {
        assert_eq!(
            Error::ConstraintNotStored("notFoo".into()).to_string(),
            "constraint with key \"notFoo\" is not stored"
        );
    }

    #[test]
    fn test_violation_classification() {
        let violation = Error::from(Violation::new("c", "m"));
        assert!(violation.is_violation());
        assert_eq!(violation.violations().map(|list| list.len()), Some(1));

        let fatal = Error::other(std::io::Error::other("disk"));
        assert!(!fatal.is_violation());
        assert!(fatal.violations().is_none());
        assert!(fatal.into_violations().is_err());
    }

    #[test]
    fn test_violation_display_is_transparent() {
        let error = Error::from(Violation::new("c", "Bad."));
        assert_eq!(error.to_string(), "violation: Bad.");
    }
}
