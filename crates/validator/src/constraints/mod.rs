//! Built-in constraints
//!
//! Also available as [`it`](crate::it), which reads naturally at call sites:
//!
//! ```rust
//! use verity_validator::prelude::*;
//!
//! let title = "";
//! let result = Validator::new().validate(&[
//!     &string(title).with(it::is_not_blank()).at_property("title"),
//! ]);
//! assert!(result.is_err());
//! ```
//!
//! - **Presence**: [`is_not_blank`], [`is_blank`], [`is_not_nil`], [`is_nil`]
//! - **Boolean**: [`is_true`], [`is_false`]
//! - **String**: [`has_min_length`], [`has_max_length`],
//!   [`has_length_between`], [`has_exact_length`], [`matches`],
//!   [`does_not_match`], [`matches_pattern`]
//! - **Collection**: [`has_min_count`], [`has_max_count`],
//!   [`has_count_between`], [`has_exact_count`]
//! - **Numeric**: [`is_less_than`], [`is_greater_than`], [`is_between`],
//!   [`is_positive`], [`is_negative`] and their variants
//! - **Time**: [`is_earlier_than`], [`is_later_than`], [`is_between_time`]
//! - **Equality**: [`is_equal_to`], [`is_not_equal_to`], [`is_one_of`]
//! - **Custom**: [`satisfies`], [`stored`]
//! - **Flow**: [`when`], [`when_groups`], [`sequentially`], [`at_least_one_of`]

pub mod blank;
pub mod boolean;
pub mod callback;
pub mod choice;
pub mod comparison;
pub mod count;
pub mod flow;
pub mod length;
pub mod message;
pub mod pattern;
pub mod stored;
pub mod time;

pub use blank::{Blank, Nil, NotBlank, NotNil, is_blank, is_nil, is_not_blank, is_not_nil};
pub use boolean::{IsFalse, IsTrue, is_false, is_true};
pub use callback::{Satisfies, satisfies};
pub use choice::{Choice, EqualTo, is_equal_to, is_not_equal_to, is_one_of};
pub use comparison::{
    NumberComparison, NumberRange, is_between, is_equal_to_number, is_greater_than,
    is_greater_than_or_equal, is_less_than, is_less_than_or_equal, is_negative,
    is_negative_or_zero, is_not_equal_to_number, is_positive, is_positive_or_zero,
};
pub use count::{Count, has_count_between, has_exact_count, has_max_count, has_min_count};
pub use flow::{
    AtLeastOneOf, Sequentially, When, WhenGroups, at_least_one_of, sequentially, when, when_groups,
};
pub use length::{Length, has_exact_length, has_length_between, has_max_length, has_min_length};
pub use pattern::{Matches, does_not_match, matches, matches_pattern};
pub use stored::{Stored, stored};
pub use time::{
    TimeComparison, TimeRange, is_between_time, is_earlier_than, is_earlier_than_or_equal,
    is_later_than, is_later_than_or_equal,
};
