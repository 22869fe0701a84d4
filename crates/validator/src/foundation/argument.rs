//! Validation arguments
//!
//! An [`Argument`] is one unit of work handed to
//! [`Validator::validate`](crate::Validator::validate): a value with its
//! constraints, a nested validatable, or a flow combinator over other
//! arguments. Arguments produce violations; fatal errors abort the walk.

use super::error::Error;
use super::path::PropertyPathElement;
use super::scope::Scope;
use super::translation::Language;
use super::violations::ViolationList;

pub trait Argument: Send + Sync {
    /// Runs the argument in `scope` and returns the violations it found.
    ///
    /// # Errors
    ///
    /// Fatal errors only; violations are returned in the list.
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error>;
}

impl<A: Argument + ?Sized> Argument for &A {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        (**self).execute(scope)
    }
}

impl<A: Argument + ?Sized> Argument for Box<A> {
    fn execute(&self, scope: &Scope) -> Result<ViolationList, Error> {
        (**self).execute(scope)
    }
}

/// Runs arguments in order, concatenating their violations.
///
/// # Errors
///
/// The first fatal error; later arguments are not run.
pub fn execute_all<A: Argument>(arguments: &[A], scope: &Scope) -> Result<ViolationList, Error> {
    let mut violations = ViolationList::new();
    for argument in arguments {
        violations.join(argument.execute(scope)?);
    }
    Ok(violations)
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Path, language and gating shared by every argument.
#[derive(Debug, Clone, Default)]
pub struct ArgumentOptions {
    path: Vec<PropertyPathElement>,
    language: Option<Language>,
    ignored: bool,
    groups: Vec<String>,
}

impl ArgumentOptions {
    /// Derives the scope the argument runs in, or `None` if it is skipped.
    #[must_use]
    pub fn scope(&self, parent: &Scope) -> Option<Scope> {
        if self.ignored {
            return None;
        }
        if !self.groups.is_empty() && parent.is_ignored_for_groups(&self.groups) {
            return None;
        }

        let mut scope = if self.path.is_empty() {
            parent.clone()
        } else {
            parent.at(self.path.iter().cloned())
        };
        if let Some(language) = &self.language {
            scope = scope.with_language(language.clone());
        }
        Some(scope)
    }
}

/// Builder methods shared by every argument.
pub trait ArgumentExt: Argument + Sized {
    fn options_mut(&mut self) -> &mut ArgumentOptions;

    /// Appends a property name to the argument's path.
    #[must_use = "builder methods must be chained or built"]
    fn at_property(mut self, name: impl Into<String>) -> Self {
        self.options_mut()
            .path
            .push(PropertyPathElement::Property(name.into()));
        self
    }

    /// Appends an index to the argument's path.
    #[must_use = "builder methods must be chained or built"]
    fn at_index(mut self, index: usize) -> Self {
        self.options_mut().path.push(PropertyPathElement::Index(index));
        self
    }

    /// Appends several elements to the argument's path.
    #[must_use = "builder methods must be chained or built"]
    fn at<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PropertyPathElement>,
    {
        self.options_mut()
            .path
            .extend(elements.into_iter().map(Into::into));
        self
    }

    /// Renders this argument's messages in `language`.
    #[must_use = "builder methods must be chained or built"]
    fn with_language(mut self, language: Language) -> Self {
        self.options_mut().language = Some(language);
        self
    }

    /// Runs the argument only when `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    fn when(mut self, condition: bool) -> Self {
        self.options_mut().ignored = !condition;
        self
    }

    /// Runs the argument only when one of `groups` is active.
    #[must_use = "builder methods must be chained or built"]
    fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options_mut().groups = groups.into_iter().map(Into::into).collect();
        self
    }
}

macro_rules! argument_ext {
    ($($ty:ident $(<$($lt:lifetime),+>)?),+ $(,)?) => {
        $(
            impl$(<$($lt),+>)? $crate::foundation::ArgumentExt for $ty$(<$($lt),+>)? {
                fn options_mut(&mut self) -> &mut $crate::foundation::ArgumentOptions {
                    &mut self.options
                }
            }
        )+
    };
}

pub(crate) use argument_ext;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_extend_path_and_language() {
        let mut options = ArgumentOptions::default();
        options.path.push("items".into());
        options.path.push(PropertyPathElement::Index(2));
        options.language = Some(Language::RUSSIAN);

        let order = Scope::default().at_property("order");
        let scope = options.scope(&order).unwrap();
        assert_eq!(scope.path().to_string(), "order.items[2]");
        assert_eq!(scope.language(), Language::RUSSIAN);
    }

    #[test]
    fn test_options_skip() {
        let ignored = ArgumentOptions {
            ignored: true,
            ..ArgumentOptions::default()
        };
        assert!(ignored.scope(&Scope::default()).is_none());

        let grouped = ArgumentOptions {
            groups: vec!["admin".into()],
            ..ArgumentOptions::default()
        };
        assert!(grouped.scope(&Scope::default()).is_none());
        let admin = Scope::default().with_groups(["admin"]);
        assert!(grouped.scope(&admin).is_some());
    }
}
