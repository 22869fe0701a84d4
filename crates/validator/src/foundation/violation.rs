//! A single validation violation and the machinery that renders it.

use super::path::{PropertyPath, PropertyPathElement};
use super::scope::Scope;
use super::translation::{Language, Translator};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use smallvec::SmallVec;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Parameters attached to a violation; most constraints use one or two.
pub type TemplateParameters = SmallVec<[TemplateParameter; 2]>;

// ============================================================================
// TEMPLATE PARAMETER
// ============================================================================

/// A placeholder substitution such as `{{ limit }}` → `5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParameter {
    /// The literal placeholder, braces included.
    pub key: Cow<'static, str>,
    /// The substituted value.
    pub value: String,
    /// Whether `value` goes through the translator before substitution.
    pub needs_translation: bool,
}

impl TemplateParameter {
    /// Creates a parameter whose value is substituted verbatim.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            needs_translation: false,
        }
    }

    /// Creates a parameter whose value is translated before substitution.
    pub fn translatable(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            needs_translation: true,
            ..Self::new(key, value)
        }
    }
}

/// Substitutes every parameter into `message`.
#[must_use]
pub fn render_message(
    message: &str,
    parameters: &[TemplateParameter],
    language: &Language,
    translator: &dyn Translator,
) -> String {
    let mut rendered = message.to_owned();
    for parameter in parameters {
        let key = parameter.key.as_ref();
        if !rendered.contains(key) {
            continue;
        }
        rendered = if parameter.needs_translation {
            let value = translator.translate(language, &parameter.value, 0);
            rendered.replace(key, &value)
        } else {
            rendered.replace(key, &parameter.value)
        };
    }
    rendered
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A single validation failure.
///
/// Violations are values: they are cheap to clone and carry no reference to
/// the validator that produced them. Two violations are equal when their
/// code, rendered message, template, parameters and path are equal; the
/// extension is not compared.
#[derive(Clone)]
pub struct Violation {
    code: Cow<'static, str>,
    message: String,
    template: String,
    plural_count: usize,
    parameters: TemplateParameters,
    path: PropertyPath,
    extension: Option<Arc<dyn Any + Send + Sync>>,
}

impl Violation {
    /// Creates a violation with an already rendered message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            code: code.into(),
            template: message.clone(),
            message,
            plural_count: 0,
            parameters: SmallVec::new(),
            path: PropertyPath::new(),
            extension: None,
        }
    }

    /// Sets the unrendered template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_parameters(mut self, parameters: TemplateParameters) -> Self {
        self.parameters = parameters;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_plural_count(mut self, count: usize) -> Self {
        self.plural_count = count;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: PropertyPath) -> Self {
        self.path = path;
        self
    }

    /// Attaches arbitrary data for custom factories and consumers.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_extension<T: Any + Send + Sync>(mut self, extension: T) -> Self {
        self.extension = Some(Arc::new(extension));
        self
    }

    /// Machine-readable identifier such as `notBlank`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The translated, rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The template the message was rendered from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn plural_count(&self) -> usize {
        self.plural_count
    }

    #[must_use]
    pub fn parameters(&self) -> &[TemplateParameter] {
        &self.parameters
    }

    #[must_use]
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Returns the extension if it is a `T`.
    #[must_use]
    pub fn extension<T: Any>(&self) -> Option<&T> {
        self.extension.as_deref().and_then(|ext| ext.downcast_ref())
    }

    /// Returns `true` if the code is one of `codes`.
    #[must_use]
    pub fn is(&self, codes: &[&str]) -> bool {
        codes.iter().any(|code| *code == self.code)
    }
}

impl fmt::Debug for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Violation")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("path", &self.path)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "violation: {}", self.message)
        } else {
            write!(f, "violation at '{}': {}", self.path, self.message)
        }
    }
}

impl std::error::Error for Violation {}

impl PartialEq for Violation {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.template == other.template
            && self.plural_count == other.plural_count
            && self.parameters == other.parameters
            && self.path == other.path
    }
}

impl Eq for Violation {}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.path.is_empty() { 2 } else { 3 };
        let mut state = serializer.serialize_struct("Violation", fields)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("message", &self.message)?;
        if self.path.is_empty() {
            state.skip_field("propertyPath")?;
        } else {
            state.serialize_field("propertyPath", &self.path)?;
        }
        state.end()
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// Everything a [`ViolationFactory`] needs to build a violation.
#[derive(Debug, Clone)]
pub struct NewViolation {
    pub code: Cow<'static, str>,
    pub template: String,
    pub plural_count: usize,
    pub parameters: TemplateParameters,
    pub path: PropertyPath,
    pub language: Language,
}

/// Builds [`Violation`]s from their parts.
///
/// Replace the default through
/// [`ValidatorBuilder::with_violation_factory`](crate::ValidatorBuilder::with_violation_factory)
/// to attach extensions or change rendering.
pub trait ViolationFactory: Send + Sync {
    fn create_violation(&self, new: NewViolation, translator: &dyn Translator) -> Violation;
}

/// Translates the template, selects the plural form and substitutes
/// parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultViolationFactory;

impl ViolationFactory for DefaultViolationFactory {
    fn create_violation(&self, new: NewViolation, translator: &dyn Translator) -> Violation {
        let translated = translator.translate(&new.language, &new.template, new.plural_count);
        let message = render_message(&translated, &new.parameters, &new.language, translator);

        Violation::new(new.code, message)
            .with_template(new.template)
            .with_plural_count(new.plural_count)
            .with_parameters(new.parameters)
            .with_path(new.path)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent construction of a violation inside a scope.
///
/// Obtained from [`Scope::build_violation`]; the path and language start
/// from the scope and can be refined before [`create`](Self::create).
#[must_use = "builder methods must be chained or built"]
pub struct ViolationBuilder<'s> {
    scope: &'s Scope,
    code: Cow<'static, str>,
    template: String,
    plural_count: usize,
    parameters: TemplateParameters,
    path: PropertyPath,
    language: Language,
}

impl<'s> ViolationBuilder<'s> {
    pub(crate) fn new(scope: &'s Scope, code: Cow<'static, str>, template: String) -> Self {
        Self {
            path: scope.path().clone(),
            language: scope.language(),
            scope,
            code,
            template,
            plural_count: 0,
            parameters: SmallVec::new(),
        }
    }

    pub fn with_parameter(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Self {
        self.parameters.push(TemplateParameter::new(key, value));
        self
    }

    pub fn with_translatable_parameter(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Self {
        self.parameters.push(TemplateParameter::translatable(key, value));
        self
    }

    pub fn with_parameters(
        mut self,
        parameters: impl IntoIterator<Item = TemplateParameter>,
    ) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn with_plural_count(mut self, count: usize) -> Self {
        self.plural_count = count;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn at_property(mut self, name: impl Into<String>) -> Self {
        self.path = self.path.with_property(name);
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.path = self.path.with_index(index);
        self
    }

    pub fn at<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PropertyPathElement>,
    {
        self.path = self.path.extend(elements);
        self
    }

    /// Renders the violation through the scope's factory and translator.
    pub fn create(self) -> Violation {
        self.scope.create_violation(NewViolation {
            code: self.code,
            template: self.template,
            plural_count: self.plural_count,
            parameters: self.parameters,
            path: self.path,
            language: self.language,
        })
    }
}
