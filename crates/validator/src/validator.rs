//! The validator façade
//!
//! A [`Validator`] owns a root [`Scope`] and runs arguments in it. It is
//! immutable: every `with_*`/`at_*` method returns a new validator and
//! leaves the original untouched, so one validator can be shared freely
//! across threads.
//!
//! # Examples
//!
//! ```rust
//! use verity_validator::prelude::*;
//!
//! struct Product {
//!     title: String,
//!     keywords: Vec<String>,
//! }
//!
//! impl Validatable for Product {
//!     fn validate(&self, validator: &Validator) -> Result<(), Error> {
//!         validator.validate(&[
//!             &string(&self.title).with(it::is_not_blank()).at_property("title"),
//!             &iterable(&self.keywords)
//!                 .with(it::has_count_between(2, 10))
//!                 .at_property("keywords"),
//!         ])
//!     }
//! }
//!
//! let product = Product { title: String::new(), keywords: Vec::new() };
//! let violations = Validator::new()
//!     .validate_it(&product)
//!     .unwrap_err()
//!     .into_violations()
//!     .unwrap();
//!
//! assert_eq!(violations.len(), 2);
//! assert_eq!(violations.get(1).unwrap().message(), "This collection should contain 2 elements or more.");
//! ```

use crate::constraints::Stored;
use crate::foundation::{
    Argument, Constraint, Context, Error, Language, Number, PropertyPathElement, Scope, Translator,
    ViolationBuilder, ViolationFactory, ViolationList, execute_all,
};
use crate::arguments;
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use std::any::Any;
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

// ============================================================================
// VALIDATABLE
// ============================================================================

/// A type that knows how to validate itself.
///
/// Implementations describe their fields with arguments and hand them to
/// the given validator; paths, language and context flow in from the
/// caller.
pub trait Validatable: Sync {
    /// # Errors
    ///
    /// Violations found, or a fatal error.
    fn validate(&self, validator: &Validator) -> Result<(), Error>;
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self, validator: &Validator) -> Result<(), Error> {
        (**self).validate(validator)
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn validate(&self, validator: &Validator) -> Result<(), Error> {
        (**self).validate(validator)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Validator {
    scope: Scope,
}

impl Validator {
    /// Creates a validator with English messages, the built-in translations
    /// and no stored constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    pub(crate) fn from_scope(scope: Scope) -> Self {
        Self { scope }
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        self.scope.context()
    }

    // ------------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------------

    /// Runs every argument in order and joins their violations.
    ///
    /// # Errors
    ///
    /// [`Error::Violations`] with every violation found, or the first fatal
    /// error, in which case the violations are discarded.
    pub fn validate(&self, arguments: &[&dyn Argument]) -> Result<(), Error> {
        if self.scope.is_cancelled() {
            return Err(Error::Cancelled);
        }
        match execute_all(arguments, &self.scope) {
            Ok(violations) => violations.into_result(),
            Err(error) => {
                tracing::debug!(path = %self.scope.path(), %error, "validation aborted");
                Err(error)
            }
        }
    }

    /// Validates a [`Validatable`] in this validator's scope.
    pub fn validate_it<T: Validatable + ?Sized>(&self, value: &T) -> Result<(), Error> {
        if self.scope.is_cancelled() {
            return Err(Error::Cancelled);
        }
        value.validate(self)
    }

    /// Validates every element at its index.
    pub fn validate_each<T: Validatable>(&self, values: &[T]) -> Result<(), Error> {
        self.validate(&[&arguments::valid_each(values)])
    }

    pub fn validate_nil(&self, is_nil: bool, constraints: &[&dyn Constraint]) -> Result<(), Error> {
        let argument = arguments::nil(is_nil).with_all(constraints.iter().copied());
        self.validate(&[&argument])
    }

    pub fn validate_bool(&self, value: bool, constraints: &[&dyn Constraint]) -> Result<(), Error> {
        let argument = arguments::boolean(value).with_all(constraints.iter().copied());
        self.validate(&[&argument])
    }

    pub fn validate_number(
        &self,
        value: impl Into<Number>,
        constraints: &[&dyn Constraint],
    ) -> Result<(), Error> {
        let argument = arguments::number(value).with_all(constraints.iter().copied());
        self.validate(&[&argument])
    }

    pub fn validate_string(
        &self,
        value: &str,
        constraints: &[&dyn Constraint],
    ) -> Result<(), Error> {
        let argument = arguments::string(value).with_all(constraints.iter().copied());
        self.validate(&[&argument])
    }

    /// Validates each string at its index.
    pub fn validate_strings<S: AsRef<str>>(
        &self,
        values: &[S],
        constraints: &[&dyn Constraint],
    ) -> Result<(), Error> {
        let mut argument = arguments::strings(values);
        for constraint in constraints {
            argument = argument.with(*constraint);
        }
        self.validate(&[&argument])
    }

    pub fn validate_time(
        &self,
        value: DateTime<Utc>,
        constraints: &[&dyn Constraint],
    ) -> Result<(), Error> {
        let argument = arguments::time(value).with_all(constraints.iter().copied());
        self.validate(&[&argument])
    }

    pub fn validate_countable(
        &self,
        count: usize,
        constraints: &[&dyn Constraint],
    ) -> Result<(), Error> {
        let argument = arguments::countable(count).with_all(constraints.iter().copied());
        self.validate(&[&argument])
    }

    pub fn validate_iterable<C: crate::foundation::Collection + ?Sized>(
        &self,
        values: &C,
        constraints: &[&dyn Constraint],
    ) -> Result<(), Error> {
        let argument = arguments::iterable(values).with_all(constraints.iter().copied());
        self.validate(&[&argument])
    }

    pub fn validate_comparable<T: Any + Sync>(
        &self,
        value: &T,
        constraints: &[&dyn Constraint],
    ) -> Result<(), Error> {
        let argument = arguments::comparable(value).with_all(constraints.iter().copied());
        self.validate(&[&argument])
    }

    /// Validates a value whose kind is decided at run time.
    ///
    /// # Errors
    ///
    /// [`Error::NotValidatable`] when the type is not recognized.
    pub fn validate_value<T: Any + Sync>(
        &self,
        value: &T,
        constraints: &[&dyn Constraint],
    ) -> Result<(), Error> {
        let argument = arguments::value(value).with_all(constraints.iter().copied());
        self.validate(&[&argument])
    }

    // ------------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn at_property(&self, name: impl Into<String>) -> Self {
        Self::from_scope(self.scope.at_property(name))
    }

    #[must_use]
    pub fn at_index(&self, index: usize) -> Self {
        Self::from_scope(self.scope.at_index(index))
    }

    #[must_use]
    pub fn at<I>(&self, elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PropertyPathElement>,
    {
        Self::from_scope(self.scope.at(elements))
    }

    #[must_use]
    pub fn with_language(&self, language: Language) -> Self {
        Self::from_scope(self.scope.with_language(language))
    }

    #[must_use]
    pub fn with_context(&self, context: Context) -> Self {
        Self::from_scope(self.scope.with_context(context))
    }

    /// Activates `groups`; constraints outside them are skipped.
    #[must_use]
    pub fn with_groups<I, S>(&self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_scope(self.scope.with_groups(groups))
    }

    #[must_use]
    pub fn is_ignored_for_groups<G: AsRef<str>>(&self, groups: &[G]) -> bool {
        self.scope.is_ignored_for_groups(groups)
    }

    /// Starts a violation at this validator's path and language.
    pub fn build_violation(
        &self,
        code: impl Into<Cow<'static, str>>,
        template: impl Into<String>,
    ) -> ViolationBuilder<'_> {
        self.scope.build_violation(code, template)
    }

    // ------------------------------------------------------------------------
    // Stored constraints
    // ------------------------------------------------------------------------

    /// Stores a constraint under `key` for use with
    /// [`validate_by`](Self::validate_by).
    ///
    /// # Errors
    ///
    /// [`Error::ConstraintAlreadyStored`] if the key is taken.
    pub fn store_constraint(
        &mut self,
        key: impl Into<String>,
        constraint: impl Constraint + 'static,
    ) -> Result<(), Error> {
        let key = key.into();
        let stored = self.scope.stored_constraints_mut();
        if stored.contains_key(&key) {
            return Err(Error::ConstraintAlreadyStored(key));
        }
        tracing::debug!(%key, constraint = constraint.name(), "constraint stored");
        stored.insert(key, Arc::new(constraint));
        Ok(())
    }

    /// Returns a constraint that applies the one stored under `key`.
    ///
    /// The lookup happens at validation time; a missing key fails with
    /// [`Error::ConstraintNotStored`].
    #[must_use]
    pub fn validate_by(&self, key: impl Into<String>) -> Stored {
        Stored::new(key)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Configures a [`Validator`].
///
/// ```rust
/// use verity_validator::prelude::*;
///
/// let validator = Validator::builder()
///     .with_default_language(Language::RUSSIAN)
///     .with_constraint("isTag", it::matches_pattern("^#[a-z]+$"))
///     .build()
///     .unwrap();
///
/// assert!(validator.validate(&[&string("#rust").with(validator.validate_by("isTag"))]).is_ok());
/// ```
#[derive(Default)]
#[must_use = "builder methods must be chained or built"]
pub struct ValidatorBuilder {
    default_language: Option<Language>,
    translator: Option<Arc<dyn Translator>>,
    violation_factory: Option<Arc<dyn ViolationFactory>>,
    context: Option<Context>,
    groups: Vec<String>,
    constraints: Vec<(String, Arc<dyn Constraint>)>,
}

impl ValidatorBuilder {
    /// Language used when neither the caller nor the context sets one.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = Some(language);
        self
    }

    /// Replaces the built-in translations.
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    pub fn with_violation_factory(mut self, factory: impl ViolationFactory + 'static) -> Self {
        self.violation_factory = Some(Arc::new(factory));
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Stores a constraint under `key`.
    pub fn with_constraint(
        mut self,
        key: impl Into<String>,
        constraint: impl Constraint + 'static,
    ) -> Self {
        self.constraints.push((key.into(), Arc::new(constraint)));
        self
    }

    /// # Errors
    ///
    /// [`Error::ConstraintAlreadyStored`] if two constraints share a key.
    pub fn build(self) -> Result<Validator, Error> {
        let mut scope = Scope::default();
        if let Some(language) = self.default_language {
            scope.set_default_language(language);
        }
        if let Some(translator) = self.translator {
            scope.set_translator(translator);
        }
        if let Some(factory) = self.violation_factory {
            scope.set_violation_factory(factory);
        }
        if let Some(context) = self.context {
            scope.set_context(context);
        }
        scope.set_groups(self.groups);

        let stored = scope.stored_constraints_mut();
        for (key, constraint) in self.constraints {
            if stored.contains_key(&key) {
                return Err(Error::ConstraintAlreadyStored(key));
            }
            stored.insert(key, constraint);
        }

        Ok(Validator::from_scope(scope))
    }
}

// ============================================================================
// DEFAULT VALIDATOR
// ============================================================================

static DEFAULT_VALIDATOR: LazyLock<ArcSwap<Validator>> =
    LazyLock::new(|| ArcSwap::from_pointee(Validator::new()));

/// Returns the process-wide validator used by the free functions.
#[must_use]
pub fn default_validator() -> Arc<Validator> {
    DEFAULT_VALIDATOR.load_full()
}

/// Replaces the process-wide validator.
pub fn set_default_validator(validator: Validator) {
    DEFAULT_VALIDATOR.store(Arc::new(validator));
}

/// Restores a fresh process-wide validator.
pub fn reset_default_validator() {
    set_default_validator(Validator::new());
}

/// Runs arguments with the process-wide validator.
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate(arguments: &[&dyn Argument]) -> Result<(), Error> {
    DEFAULT_VALIDATOR.load().validate(arguments)
}

/// Validates a [`Validatable`] with the process-wide validator.
///
/// # Errors
///
/// See [`Validator::validate_it`].
pub fn validate_it<T: Validatable + ?Sized>(value: &T) -> Result<(), Error> {
    DEFAULT_VALIDATOR.load().validate_it(value)
}

/// Collects the violations of `result`, handing fatal errors back.
///
/// # Errors
///
/// The fatal error, if `result` carries one.
pub fn violations_of(result: Result<(), Error>) -> Result<ViolationList, Error> {
    let mut violations = ViolationList::new();
    violations.append_result(result)?;
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{has_min_length, is_not_blank, is_positive};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_typed_entry_points() {
        let validator = Validator::new();
        assert!(validator.validate_string("abc", &[&is_not_blank()]).is_ok());
        assert!(validator.validate_number(-2, &[&is_positive()]).is_err());
        assert!(validator.validate_countable(0, &[&is_not_blank()]).is_err());
        let short = has_min_length(2);
        assert!(validator.validate_value(&"x", &[&short]).is_err());
    }

    #[test]
    fn test_derivation_leaves_original_untouched() {
        let root = Validator::new();
        let nested = root.at_property("address").with_language(Language::RUSSIAN);

        let error = nested.validate_string("", &[&is_not_blank()]).unwrap_err();
        let violation = error.into_violations().unwrap().into_vec().remove(0);
        assert_eq!(violation.path().to_string(), "address");
        assert_eq!(violation.message(), "Значение не должно быть пустым.");

        assert!(root.scope().path().is_empty());
        assert_eq!(root.scope().language(), Language::ENGLISH);
    }

    #[test]
    fn test_store_constraint_twice() {
        let mut validator = Validator::new();
        validator.store_constraint("required", is_not_blank()).unwrap();
        let error = validator.store_constraint("required", is_not_blank()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "constraint with key \"required\" is already stored"
        );
    }

    #[test]
    fn test_validate_by_missing_key() {
        let validator = Validator::new();
        let title = arguments::string("x").with(validator.validate_by("notFoo"));
        let error = validator.validate(&[&title]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "constraint with key \"notFoo\" is not stored"
        );
    }

    #[test]
    fn test_builder_rejects_duplicate_keys() {
        let result = Validator::builder()
            .with_constraint("a", is_not_blank())
            .with_constraint("a", is_positive())
            .build();
        assert!(matches!(result, Err(Error::ConstraintAlreadyStored(key)) if key == "a"));
    }

    #[test]
    fn test_cancelled_context() {
        let context = Context::new();
        context.cancellation().cancel();
        let validator = Validator::new().with_context(context);
        assert!(matches!(
            validator.validate_string("", &[&is_not_blank()]),
            Err(Error::Cancelled)
        ));
    }

    #[test]
    fn test_violations_of() {
        let validator = Validator::new();
        let list = violations_of(validator.validate_string("", &[&is_not_blank()])).unwrap();
        assert_eq!(list.len(), 1);
        assert!(violations_of(Ok(())).unwrap().is_empty());
    }
}
