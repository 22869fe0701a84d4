//! CONCURRENT combinator - run branches on their own threads
//!
//! Every branch runs on a scoped thread against the same read-only scope.
//! Results travel back over a channel tagged with the branch index and are
//! merged in declaration order, so the outcome does not depend on which
//! thread finishes first.
//!
//! The first fatal error wins: it cancels a token derived from the scope's
//! context and is returned, and the violations of every other branch are
//! dropped. Branches that have not started yet see the cancelled token and
//! bail out; branches already running can poll
//! [`Scope::is_cancelled`](crate::foundation::Scope::is_cancelled) to stop
//! early.
//!
//! The fatal error is returned only after every running branch has
//! finished, because scoped threads are joined before [`concurrently`]
//! returns. A branch that never polls the token delays the fatal return by
//! its remaining run time.
//!
//! # Examples
//!
//! ```rust
//! use verity_validator::prelude::*;
//!
//! let result = Validator::new().validate(&[&concurrently()
//!     .with(string("").with(it::is_not_blank()).at_property("name"))
//!     .with(number(-1).with(it::is_positive()).at_property("age"))]);
//!
//! let violations = result.unwrap_err().into_violations().unwrap();
//! assert_eq!(violations.first().unwrap().path().to_string(), "name");
//! assert_eq!(violations.last().unwrap().path().to_string(), "age");
//! ```

use super::Arguments;
use crate::foundation::argument::argument_ext;
use crate::foundation::{Argument, ArgumentOptions, Error, Scope, ViolationList};
use std::sync::mpsc;
use std::thread;

#[must_use = "arguments do nothing until passed to a validator"]
pub struct Concurrent<'a> {
    arguments: Arguments<'a>,
    options: ArgumentOptions,
}

/// Runs every branch on its own scoped thread.
///
/// A fatal error returns once the branches already running have finished;
/// branches that do not poll
/// [`Scope::is_cancelled`](crate::foundation::Scope::is_cancelled) delay it.
pub fn concurrently<'a>() -> Concurrent<'a> {
    Concurrent {
        arguments: Vec::new(),
        options: ArgumentOptions::default(),
    }
}

impl<'a> Concurrent<'a> {
    pub fn with(mut self, argument: impl Argument + 'a) -> Self {
        self.arguments.push(Box::new(argument));
        self
    }
}

impl Argument for Concurrent<'_> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        let Some(scope) = self.options.scope(scope) else {
            return Ok(ViolationList::new());
        };
        if self.arguments.is_empty() {
            return Ok(ViolationList::new());
        }

        let token = scope.context().cancellation().child_token();
        let context = scope.context().clone().with_cancellation(token.clone());
        let scope = scope.with_context(context);
        let (sender, receiver) = mpsc::channel();

        thread::scope(|threads| {
            for (index, argument) in self.arguments.iter().enumerate() {
                let sender = sender.clone();
                let scope = &scope;
                threads.spawn(move || {
                    let result = if scope.is_cancelled() {
                        Err(Error::Cancelled)
                    } else {
                        argument.execute(scope)
                    };
                    // The receiver is gone once a fatal error was returned.
                    let _ = sender.send((index, result));
                });
            }
            drop(sender);

            let mut branches: Vec<Option<ViolationList>> = Vec::new();
            branches.resize_with(self.arguments.len(), || None);
            for (index, result) in receiver {
                match result {
                    Ok(violations) => branches[index] = Some(violations),
                    Err(error) => {
                        tracing::debug!(
                            path = %scope.path(),
                            branch = index,
                            %error,
                            "concurrent branch failed, cancelling siblings"
                        );
                        token.cancel();
                        return Err(error);
                    }
                }
            }

            let mut violations = ViolationList::new();
            for branch in branches.into_iter().flatten() {
                violations.join(branch);
            }
            Ok(violations)
        })
    }
}

argument_ext!(Concurrent<'a>);
