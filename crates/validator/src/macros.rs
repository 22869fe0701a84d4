//! Macros for creating constraints with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust
//! use verity_validator::constraint;
//! use verity_validator::prelude::*;
//!
//! constraint! {
//!     /// Validates that a string is lowercase.
//!     pub IsLowercase as "IsLowercaseConstraint";
//!     fn is_lowercase();
//!     violation("notLowercase", "This value should be lowercase.");
//!     validate_string(value: Option<&str>) {
//!         value.is_none_or(|s| s.chars().all(|c| !c.is_uppercase()))
//!     }
//! }
//!
//! let validator = Validator::new();
//! assert!(validator.validate(&[&string("abc").with(is_lowercase())]).is_ok());
//! assert!(validator.validate(&[&string("aBc").with(is_lowercase())]).is_err());
//! ```

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Creates a complete predicate constraint: struct definition, `Constraint`
/// and `ConstraintExt` implementations, and a factory function.
///
/// Each rule names the `Constraint` method it overrides (`validate_string`,
/// `validate_number`, ...) and evaluates to `true` when the value is valid.
/// A failing rule raises one violation with the given code and template;
/// the template can be replaced per instance with `with_message`.
/// Kinds without a rule stay inapplicable.
///
/// `#[derive(Debug, Clone, Default)]` is always applied.
#[macro_export]
macro_rules! constraint {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident as $display:literal;
        fn $factory:ident();
        violation($code:expr, $template:expr);
        $( $method:ident($value:ident: $input:ty) $rule:block )+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            options: $crate::foundation::ConstraintOptions,
        }

        impl $crate::foundation::Constraint for $name {
            fn name(&self) -> &'static str {
                $display
            }

            fn options(&self) -> &$crate::foundation::ConstraintOptions {
                &self.options
            }

            $(
                fn $method(
                    &self,
                    $value: $input,
                    scope: &$crate::foundation::Scope,
                ) -> ::core::result::Result<(), $crate::foundation::Error> {
                    if $rule {
                        Ok(())
                    } else {
                        Err(scope
                            .build_violation($code, self.options.message_or($template))
                            .create()
                            .into())
                    }
                }
            )+
        }

        impl $crate::foundation::ConstraintExt for $name {
            fn options_mut(&mut self) -> &mut $crate::foundation::ConstraintOptions {
                &mut self.options
            }
        }

        #[must_use]
        $vis fn $factory() -> $name {
            $name::default()
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Constraint, ConstraintExt, Scope, Value, check};

    crate::constraint! {
        /// Test constraint with two kinds.
        pub IsShort as "IsShortConstraint";
        fn is_short();
        violation("notShort", "This value should be short.");
        validate_string(value: Option<&str>) { value.is_none_or(|s| s.len() < 4) }
        validate_countable(count: usize) { count < 4 }
    }

    #[test]
    fn test_generated_constraint() {
        let scope = Scope::default();
        assert_eq!(is_short().name(), "IsShortConstraint");
        let short = Value::String(Some("abc"));
        assert!(check(&is_short(), &short, &scope).is_ok());
        assert!(check(&is_short(), &Value::Countable(2), &scope).is_ok());

        let violations = check(&is_short(), &Value::String(Some("abcd")), &scope)
            .unwrap_err()
            .into_violations()
            .unwrap();
        assert_eq!(violations.first().unwrap().code(), "notShort");
    }

    #[test]
    fn test_generated_constraint_is_configurable() {
        let constraint = is_short().with_message("Shorter!");
        let violations = check(&constraint, &Value::Countable(9), &Scope::default())
            .unwrap_err()
            .into_violations()
            .unwrap();
        assert_eq!(violations.first().unwrap().message(), "Shorter!");
    }

    #[test]
    fn test_generated_constraint_other_kinds_are_inapplicable() {
        let flag = Value::Bool(Some(true));
        assert!(check(&is_short(), &flag, &Scope::default()).is_err());
    }
}
