//! Arguments accepted by [`Validator::validate`](crate::Validator::validate)
//!
//! - **Values**: [`string`], [`number`], [`boolean`], [`time`],
//!   [`iterable`], [`countable`], [`comparable`], [`nil`], their `nil_*`
//!   variants for optional values, [`strings`] for string lists, and
//!   [`value`] for values classified at run time
//! - **Nested**: [`valid`], [`nil_valid`], [`valid_each`], [`valid_map`]
//!
//! Flow combinators over arguments live in [`combinators`](crate::combinators).

pub mod nested;
pub mod value;

pub use nested::{ValidArgument, ValidEach, ValidMap, nil_valid, valid, valid_each, valid_map};
pub use value::{
    EachString, ValueArgument, boolean, comparable, countable, iterable, nil, nil_boolean,
    nil_comparable, nil_iterable, nil_number, nil_string, nil_time, number, string, strings, time,
    value,
};
