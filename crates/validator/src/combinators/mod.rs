//! Flow control over arguments
//!
//! Every combinator is itself an [`Argument`], so combinators nest into
//! each other and into plain value arguments. They all accept the
//! [`ArgumentExt`](crate::foundation::ArgumentExt) options: a path prefix
//! for the whole subtree, a language, and a `when` gate.
//!
//! - [`when`] / [`when_groups`]: one branch or the other
//! - [`sequentially`]: stop at the first branch that reports violations
//! - [`at_least_one_of`]: succeed as soon as one branch passes
//! - [`all`]: run everything, report everything
//! - [`concurrently`]: run every branch on its own thread

use crate::foundation::Argument;

pub mod all;
pub mod at_least_one_of;
pub mod concurrent;
pub mod sequential;
pub mod when;

pub use all::{All, all};
pub use at_least_one_of::{AtLeastOneOf, at_least_one_of};
pub use concurrent::{Concurrent, concurrently};
pub use sequential::{Sequential, sequentially};
pub use when::{When, WhenGroups, when, when_groups};

type Arguments<'a> = Vec<Box<dyn Argument + 'a>>;
