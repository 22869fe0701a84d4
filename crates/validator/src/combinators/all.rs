//! ALL combinator - group arguments without changing what they report

use super::Arguments;
use crate::foundation::argument::argument_ext;
use crate::foundation::{Argument, ArgumentOptions, Error, Scope, ViolationList, execute_all};

/// Runs every argument and joins their violations.
///
/// Behaves like passing the arguments straight to the validator; handy for
/// moving a whole subtree under one path or behind one gate.
#[must_use = "arguments do nothing until passed to a validator"]
pub struct All<'a> {
    arguments: Arguments<'a>,
    options: ArgumentOptions,
}

pub fn all<'a>() -> All<'a> {
    All {
        arguments: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

impl<'a> All<'a> {
    pub fn with(mut self, argument: impl Argument + 'a) -> Self {
        self.arguments.push(Box::new(argument));
        self
    }
}

impl Argument for All<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        match self.options.scope(scope) {
            Some(scope) => execute_all(&self.arguments, &scope),
            None => Ok(ViolationList::new()),
        }
    }
}

argument_ext!(All<'a>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::{number, string};
    use crate::constraints::{is_not_blank, is_positive};
    use crate::foundation::ArgumentExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_moves_subtree() {
        let list = all()
            .with(string("").with(is_not_blank()).at_property("street"))
            .with(number(0).with(is_positive()).at_property("number"))
            .at_property("address")
            .execute(&Scope::default())
            .unwrap();
        let paths: Vec<_> = list.iter().map(|v| v.path().to_string()).collect();
        assert_eq!(paths, ["address.street", "address.number"]);
    }
}
