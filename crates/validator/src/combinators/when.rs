//! WHEN combinators - conditional branches of arguments
//!
//! [`when`] picks a branch by a condition known when the argument tree is
//! built; [`when_groups`] picks it by the groups active in the validator
//! that runs the tree, so the same tree gives different results under
//! different validators.
//!
//! # Examples
//!
//! ```rust
//! use verity_validator::prelude::*;
//!
//! let is_company = true;
//! let tax_id = "";
//!
//! let result = Validator::new().validate(&[&when(is_company)
//!     .then(string(tax_id).with(it::is_not_blank()).at_property("taxId"))
//!     .otherwise(string(tax_id).with(it::is_blank()).at_property("taxId"))]);
//!
//! assert!(result.is_err());
//! ```

use super::Arguments;
use crate::foundation::argument::argument_ext;
use crate::foundation::{Argument, ArgumentOptions, Error, Scope, ViolationList, execute_all};

/// Runs `then` arguments when the condition holds, `otherwise` ones when it
/// does not.
#[must_use = "arguments do nothing until passed to a validator"]
pub struct When<'a> {
    condition: bool,
    then: Arguments<'a>,
    otherwise: Arguments<'a>,
    options: ArgumentOptions,
}

pub fn when<'a>(condition: bool) -> When<'a> {
    When {
        condition,
        then: Vec::new(),
        otherwise: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

impl<'a> When<'a> {
    pub fn then(mut self, argument: impl Argument + 'a) -> Self {
        self.then.push(Box::new(argument));
        self
    }

    pub fn otherwise(mut self, argument: impl Argument + 'a) -> Self {
        self.otherwise.push(Box::new(argument));
        self
    }
}

impl Argument for When<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        let branch = if self.condition {
            &self.then
        } else {
            &self.otherwise
        };
        execute_all(branch, &scope)
    }
}

/// Runs `then` arguments when one of the groups is active, `otherwise` ones
/// when none is.
#[must_use = "arguments do nothing until passed to a validator"]
pub struct WhenGroups<'a> {
    groups: Vec<String>,
    then: Arguments<'a>,
    otherwise: Arguments<'a>,
    options: ArgumentOptions,
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
        options: ArgumentOptions::default(),
    }
}

impl<'a> WhenGroups<'a> {
    pub fn then(mut self, argument: impl Argument + 'a) -> Self {
        self.then.push(Box::new(argument));
        self
    }

    pub fn otherwise(mut self, argument: impl Argument + 'a) -> Self {
        self.otherwise.push(Box::new(argument));
        self
    }
}

impl Argument for WhenGroups<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        let branch = if scope.is_ignored_for_groups(&self.groups) {
            &self.otherwise
        } else {
            &self.then
        };
        execute_all(branch, &scope)
    }
}

argument_ext!(When<'a>, WhenGroups<'a>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::string;
    use crate::constraints::{is_blank, is_not_blank};
    use crate::foundation::ArgumentExt;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::then(true, "notBlank")]
    #[case::otherwise(false, "blank")]
    fn test_when_picks_branch(#[case] condition: bool, #[case] code: &str) {
        let value = if condition { "" } else { "x" };
        let list = when(condition)
            .then(string(value).with(is_not_blank()))
            .otherwise(string(value).with(is_blank()))
            .execute(&Scope::default())
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.first().unwrap().code(), code);
    }

    #[test]
    fn test_when_false_without_otherwise() {
        let list = when(false)
            .then(string("").with(is_not_blank()))
            .execute(&Scope::default())
            .unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_when_shifts_path() {
        let list = when(true)
            .then(string("").with(is_not_blank()).at_property("name"))
            .at_property("owner")
            .execute(&Scope::default())
            .unwrap();
        assert_eq!(list.first().unwrap().path().to_string(), "owner.name");
    }

    #[test]
    fn test_when_groups_replays_under_groups() {
        let tree = when_groups(["strict"])
            .then(string("").with(is_not_blank()))
            .otherwise(string("").with(is_blank()));

        assert_eq!(tree.execute(&Scope::default()).unwrap().len(), 0);
        let strict = Scope::default().with_groups(["default", "strict"]);
        assert_eq!(tree.execute(&strict).unwrap().len(), 1);
    }

    #[test]
    fn test_when_combinator_gate() {
        let list = when(true)
            .then(string("").with(is_not_blank()))
            .when(false)
            .execute(&Scope::default())
            .unwrap();
        assert!(list.is_empty());
    }
}
