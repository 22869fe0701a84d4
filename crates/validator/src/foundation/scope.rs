//! Validation scope
//!
//! A [`Scope`] is the immutable environment of one point of a validation
//! walk: where we are ([`PropertyPath`]), which language messages render in,
//! which groups are active, and the shared services (translator, violation
//! factory, stored constraints). Deriving a child scope never affects the
//! parent, so sibling branches (including concurrent ones) see independent
//! scopes.

use super::constraint::Constraint;
use super::context::Context;
use super::path::{PropertyPath, PropertyPathElement};
use super::translation::{Language, Translations, Translator};
use super::violation::{
    DefaultViolationFactory, NewViolation, Violation, ViolationBuilder, ViolationFactory,
};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The group every constraint and scope without explicit groups belongs to.
pub const DEFAULT_GROUP: &str = "default";

pub(crate) type StoredConstraints = HashMap<String, Arc<dyn Constraint>>;

/// Decides whether something declared for `groups` is skipped when the
/// scope has `active` groups.
///
/// An empty list on either side stands for the [`DEFAULT_GROUP`].
#[must_use]
pub fn is_ignored_for_groups<A, G>(active: &[A], groups: &[G]) -> bool
where
    A: AsRef<str>,
    G: AsRef<str>,
{
    match (active.is_empty(), groups.is_empty()) {
        (true, true) => false,
        (true, false) => !groups.iter().any(|g| g.as_ref() == DEFAULT_GROUP),
        (false, true) => !active.iter().any(|g| g.as_ref() == DEFAULT_GROUP),
        (false, false) => !active
            .iter()
            .any(|a| groups.iter().any(|g| g.as_ref() == a.as_ref())),
    }
}

#[derive(Clone)]
pub struct Scope {
    context: Context,
    path: PropertyPath,
    language: Option<Language>,
    default_language: Language,
    translator: Arc<dyn Translator>,
    violation_factory: Arc<dyn ViolationFactory>,
    groups: Arc<[String]>,
    constraints: Arc<StoredConstraints>,
}

impl Default for Scope {
    fn default() -> Self {
        Self {
            context: Context::default(),
            path: PropertyPath::new(),
            language: None,
            default_language: Language::ENGLISH,
            translator: Arc::new(Translations::builtin()),
            violation_factory: Arc::new(DefaultViolationFactory),
            groups: Arc::from(Vec::<String>::new()),
            constraints: Arc::default(),
        }
    }
}

impl Scope {
    #[must_use]
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    #[must_use]
    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// The language messages render in.
    ///
    /// An explicitly set language wins over the context's, which wins over
    /// the validator default.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
            .as_ref()
            .or_else(|| self.context.language())
            .unwrap_or(&self.default_language)
            .clone()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.context.is_cancelled()
    }

    /// Returns `true` when something declared for `groups` is skipped in
    /// this scope. See [`is_ignored_for_groups`].
    #[must_use]
    pub fn is_ignored_for_groups<G: AsRef<str>>(&self, groups: &[G]) -> bool {
        is_ignored_for_groups(&self.groups[..], groups)
    }

    #[must_use]
    pub fn stored_constraint(&self, key: &str) -> Option<&Arc<dyn Constraint>> {
        self.constraints.get(key)
    }

    // ------------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn at_property(&self, name: impl Into<String>) -> Self {
        Self {
            path: self.path.with_property(name),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn at_index(&self, index: usize) -> Self {
        Self {
            path: self.path.with_index(index),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn at<I>(&self, elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PropertyPathElement>,
    {
        Self {
            path: self.path.extend(elements),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language: Some(language),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_context(&self, context: Context) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    /// Replaces the active groups.
    #[must_use]
    pub fn with_groups<I, S>(&self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------------
    // Violations
    // ------------------------------------------------------------------------

    /// Starts a violation at this scope's path and language.
    pub fn build_violation(
        &self,
        code: impl Into<Cow<'static, str>>,
        template: impl Into<String>,
    ) -> ViolationBuilder<'_> {
        ViolationBuilder::new(self, code.into(), template.into())
    }

    /// Renders a violation through the configured factory.
    #[must_use]
    pub fn create_violation(&self, new: NewViolation) -> Violation {
        self.violation_factory
            .create_violation(new, self.translator.as_ref())
    }

    // ------------------------------------------------------------------------
    // Configuration, used by the validator builder
    // ------------------------------------------------------------------------

    pub(crate) fn set_default_language(&mut self, language: Language) {
        self.default_language = language;
    }

    pub(crate) fn set_translator(&mut self, translator: Arc<dyn Translator>) {
        self.translator = translator;
    }

    pub(crate) fn set_violation_factory(&mut self, factory: Arc<dyn ViolationFactory>) {
        self.violation_factory = factory;
    }

    pub(crate) fn set_context(&mut self, context: Context) {
        self.context = context;
    }

    pub(crate) fn set_groups(&mut self, groups: Vec<String>) {
        self.groups = groups.into();
    }

    pub(crate) fn stored_constraints_mut(&mut self) -> &mut StoredConstraints {
        Arc::make_mut(&mut self.constraints)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stored: Vec<&str> = self.constraints.keys().map(String::as_str).collect();
        stored.sort_unstable();
        f.debug_struct("Scope")
            .field("path", &self.path)
            .field("language", &self.language())
            .field("groups", &self.groups)
            .field("stored_constraints", &stored)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NONE: &[&str] = &[];

    #[rstest]
    #[case(NONE, NONE, false)]
    #[case(NONE, &["default"], false)]
    #[case(NONE, &["admin"], true)]
    #[case(&["default"], NONE, false)]
    #[case(&["admin"], NONE, true)]
    #[case(&["admin"], &["admin", "user"], false)]
    #[case(&["admin"], &["user"], true)]
    #[case(&["default", "admin"], &["default"], false)]
    fn test_group_filter(#[case] active: &[&str], #[case] groups: &[&str], #[case] ignored: bool) {
        assert_eq!(is_ignored_for_groups(active, groups), ignored);
    }

    #[test]
    fn test_language_resolution_order() {
        let mut configured = Scope::default();
        assert_eq!(configured.language(), Language::ENGLISH);

        configured.set_default_language(Language::new("de"));
        assert_eq!(configured.language(), Language::new("de"));

        let context = Context::new().with_language(Language::RUSSIAN);
        let from_context = configured.with_context(context);
        assert_eq!(from_context.language(), Language::RUSSIAN);

        let explicit = from_context.with_language(Language::new("fr"));
        assert_eq!(explicit.language(), Language::new("fr"));
    }

    #[test]
    fn test_derivation_leaves_parent_untouched() {
        let parent = Scope::default().at_property("items");
        let child = parent.at_index(3).with_groups(["admin"]);

        assert_eq!(parent.path().to_string(), "items");
        assert!(parent.groups().is_empty());
        assert_eq!(child.path().to_string(), "items[3]");
        assert_eq!(child.groups(), ["admin"]);
    }
}
