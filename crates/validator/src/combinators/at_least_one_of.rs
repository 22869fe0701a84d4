//! AT LEAST ONE OF combinator - any passing branch is enough
//!
//! Branches run in order until one reports nothing. When every branch
//! fails, the caller sees all of their violations, branch by branch.

use super::Arguments;
use crate::foundation::argument::argument_ext;
use crate::foundation::{Argument, ArgumentOptions, Error, Scope, ViolationList};

#[must_use = "arguments do nothing until passed to a validator"]
pub struct AtLeastOneOf<'a> {
    arguments: Arguments<'a>,
    options: ArgumentOptions,
}

pub fn at_least_one_of<'a>() -> AtLeastOneOf<'a> {
    AtLeastOneOf {
        arguments: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

impl<'a> AtLeastOneOf<'a> {
    pub fn with(mut self, argument: impl Argument + 'a) -> Self {
        self.arguments.push(Box::new(argument));
        self
    }
}

impl Argument for AtLeastOneOf<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        let mut violations = ViolationList::new();
        for argument in &self.arguments {
            let branch = argument.execute(&scope)?;
            if branch.is_empty() {
                return Ok(ViolationList::new());
            }
            violations.join(branch);
        }
        Ok(violations)
    }
}

argument_ext!(AtLeastOneOf<'a>);
