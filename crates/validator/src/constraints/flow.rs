//! Constraint-level flow control
//!
//! These constraints apply other constraints to the same value:
//!
//! - [`when`]: one list or another, chosen by a condition
//! - [`when_groups`]: one list or another, chosen by the active groups
//! - [`sequentially`]: stop at the first constraint that reports anything
//! - [`at_least_one_of`]: pass if any one constraint passes

use crate::foundation::{Constraint, Error, Scope, Value, ViolationList, check, check_all};

type Constraints<'a> = Vec<Box<dyn Constraint + 'a>>;

// ============================================================================
// WHEN
// ============================================================================

/// Applies `then` constraints when a condition holds, `otherwise` ones
/// when it does not.
#[must_use = "builder methods must be chained or built"]
pub struct When<'a> {
    condition: bool,
    then: Constraints<'a>,
    otherwise: Constraints<'a>,
}

pub fn when<'a>(condition: bool) -> When<'a> {
    When {
        condition,
        then: Vec::new(),
        otherwise: Vec::new(),
    }
}

impl<'a> When<'a> {
    pub fn then(mut self, constraint: impl Constraint + 'a) -> Self {
        self.then.push(Box::new(constraint));
        self
    }

    pub fn otherwise(mut self, constraint: impl Constraint + 'a) -> Self {
        self.otherwise.push(Box::new(constraint));
        self
    }
}

impl Constraint for When<'_> {
    fn name(&self) -> &'static str {
        "WhenConstraint"
    }

    fn validate(&self, value: &Value<'_>, scope: &Scope) -> Result<(), Error> {
        let branch = if self.condition {
            &self.then
        } else {
            &self.otherwise
        };
        check_all(branch, value, scope)?.into_result()
    }
}

// ============================================================================
// WHEN GROUPS
// ============================================================================

/// Applies `then` constraints when one of the groups is active, `otherwise`
/// ones when none is.
#[must_use = "builder methods must be chained or built"]
pub struct WhenGroups<'a> {
    groups: Vec<String>,
    then: Constraints<'a>,
    otherwise: Constraints<'a>,
}

pub fn when_groups<'a, I, S>(groups: I) -> WhenGroups<'a>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    WhenGroups {
        groups: groups.into_iter().map(Into::into).collect(),
        then: Vec::new(),
        otherwise: Vec::new(),
    }
}

impl<'a> WhenGroups<'a> {
    pub fn then(mut self, constraint: impl Constraint + 'a) -> Self {
        self.then.push(Box::new(constraint));
        self
    }

    pub fn otherwise(mut self, constraint: impl Constraint + 'a) -> Self {
        self.otherwise.push(Box::new(constraint));
        self
    }
}

impl Constraint for WhenGroups<'_> {
    fn name(&self) -> &'static str {
        "WhenGroupsConstraint"
    }

    fn validate(&self, value: &Value<'_>, scope: &Scope) -> Result<(), Error> {
        let branch = if scope.is_ignored_for_groups(&self.groups) {
            &self.otherwise
        } else {
            &self.then
        };
        check_all(branch, value, scope)?.into_result()
    }
}

// ============================================================================
// SEQUENTIALLY
// ============================================================================

/// Applies constraints in order and stops at the first one that reports a
/// violation or fails.
#[must_use = "builder methods must be chained or built"]
pub struct Sequentially<'a> {
    constraints: Constraints<'a>,
}

pub fn sequentially<'a>() -> Sequentially<'a> {
    Sequentially {
        constraints: Vec::new(),
    }
}

impl<'a> Sequentially<'a> {
    pub fn with(mut self, constraint: impl Constraint + 'a) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }
}

impl Constraint for Sequentially<'_> {
    fn name(&self) -> &'static str {
        "SequentialConstraint"
    }

    fn validate(&self, value: &Value<'_>, scope: &Scope) -> Result<(), Error> {
        for constraint in &self.constraints {
            check(constraint.as_ref(), value, scope)?;
        }
        Ok(())
    }
}

// ============================================================================
// AT LEAST ONE OF
// ============================================================================

/// Passes as soon as one constraint passes; otherwise reports the
/// violations of all of them.
#[must_use = "builder methods must be chained or built"]
pub struct AtLeastOneOf<'a> {
    constraints: Constraints<'a>,
}

pub fn at_least_one_of<'a>() -> AtLeastOneOf<'a> {
    AtLeastOneOf {
        constraints: Vec::new(),
    }
}

impl<'a> AtLeastOneOf<'a> {
    pub fn with(mut self, constraint: impl Constraint + 'a) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }
}

impl Constraint for AtLeastOneOf<'_> {
    fn name(&self) -> &'static str {
        "AtLeastOneOfConstraint"
    }

    fn validate(&self, value: &Value<'_>, scope: &Scope) -> Result<(), Error> {
        let mut violations = ViolationList::new();
        for constraint in &self.constraints {
            let mut branch = ViolationList::new();
            branch.append_result(check(constraint.as_ref(), value, scope))?;
            if branch.is_empty() {
                return Ok(());
            }
            violations.join(branch);
        }
        violations.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{has_min_length, is_blank, is_not_blank, is_true};
    use pretty_assertions::assert_eq;

    fn codes(result: Result<(), Error>) -> Vec<String> {
        match result {
            Ok(()) => Vec::new(),
            Err(error) => error
                .into_violations()
                .unwrap()
                .iter()
                .map(|v| v.code().to_owned())
                .collect(),
        }
    }

    fn check_str(constraint: &dyn Constraint, value: &str) -> Result<(), Error> {
        check(constraint, &Value::String(Some(value)), &Scope::default())
    }

    #[test]
    fn test_when_branches() {
        let then = when(true).then(is_not_blank());
        assert_eq!(codes(check_str(&then, "")), ["notBlank"]);

        let skipped = when(false).then(is_not_blank());
        assert!(codes(check_str(&skipped, "")).is_empty());

        let otherwise = when(false).then(is_blank()).otherwise(is_not_blank());
        assert_eq!(codes(check_str(&otherwise, "")), ["notBlank"]);
    }

    #[test]
    fn test_when_groups_branches() {
        let constraint = when_groups(["strict"]).then(is_not_blank());
        let empty = Value::String(Some(""));
        let strict = Scope::default().with_groups(["default", "strict"]);

        assert!(check(&constraint, &empty, &Scope::default()).is_ok());
        assert!(check(&constraint, &empty, &strict).is_err());
    }

    #[test]
    fn test_sequentially_stops_at_first_violation() {
        let constraint = sequentially().with(is_blank()).with(has_min_length(5));
        assert_eq!(codes(check_str(&constraint, "bar")), ["blank"]);
    }

    #[test]
    fn test_sequentially_stops_at_fatal_error() {
        let constraint = sequentially().with(is_true()).with(is_not_blank());
        let error = check_str(&constraint, "").unwrap_err();
        assert!(!error.is_violation());
    }

    #[test]
    fn test_at_least_one_of() {
        let constraint = at_least_one_of().with(is_blank()).with(has_min_length(5));

        assert!(check_str(&constraint, "").is_ok());
        assert!(check_str(&constraint, "longer").is_ok());
        assert_eq!(
            codes(check_str(&constraint, "bar")),
            ["blank", "lengthTooFew"]
        );
        assert!(check_str(&at_least_one_of(), "bar").is_ok());
    }
}
