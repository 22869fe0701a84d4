//! SEQUENTIAL combinator - stop at the first argument that complains
//!
//! Useful when later checks only make sense once earlier ones pass, such as
//! a format check that would repeat what a presence check already said.

use super::Arguments;
use crate::foundation::argument::argument_ext;
use crate::foundation::{Argument, ArgumentOptions, Error, Scope, ViolationList};

#[must_use = "arguments do nothing until passed to a validator"]
pub struct Sequential<'a> {
    arguments: Arguments<'a>,
    options: ArgumentOptions,
}

/// Runs arguments in order until one of them reports violations.
pub fn sequentially<'a>() -> Sequential<'a> {
    Sequential {
        arguments: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

impl<'a> Sequential<'a> {
    pub fn with(mut self, argument: impl Argument + 'a) -> Self {
        self.arguments.push(Box::new(argument));
        self
    }
}

impl Argument for Sequential<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        for argument in &self.arguments {
            let violations = argument.execute(&scope)?;
            if !violations.is_empty() {
                return Ok(violations);
            }
        }
        Ok(ViolationList::new())
    }
}

argument_ext!(Sequential<'a>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::{number, string};
    use crate::constraints::{has_min_length, is_not_blank, is_positive};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stops_after_first_failure() {
        let list = sequentially()
            .with(string("").with(is_not_blank()))
            .with(string("").with(is_not_blank()))
            .with(number(-1).with(is_positive()))
            .execute(&Scope::default())
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.first().unwrap().code(), "notBlank");
    }

    #[test]
    fn test_continues_while_passing() {
        let list = sequentially()
            .with(string("ab").with(is_not_blank()))
            .with(string("ab").with(has_min_length(5)))
            .execute(&Scope::default())
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.first().unwrap().code(), "lengthTooFew");
    }

    #[test]
    fn test_empty_sequence() {
        let list = sequentially().execute(&Scope::default()).unwrap();
        assert!(list.is_empty());
    }
}
