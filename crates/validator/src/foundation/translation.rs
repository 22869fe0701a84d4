//! Languages and message translation
//!
//! Message templates are English sentences that double as catalog keys.
//! Pluralized templates carry every plural form separated by `|`; the
//! [`Translator`] picks the form that matches the language's plural rule:
//!
//! ```text
//! This collection should contain {{ limit }} element or more.|This collection should contain {{ limit }} elements or more.
//! ```

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// LANGUAGE
// ============================================================================

/// A language tag such as `en`, `ru` or `en-GB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(Cow<'static, str>);

impl Language {
    /// English, the library default.
    pub const ENGLISH: Language = Language(Cow::Borrowed("en"));

    /// Russian.
    pub const RUSSIAN: Language = Language(Cow::Borrowed("ru"));

    /// Creates a language from a tag.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    /// Returns the full tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the primary subtag: `en` for `en-GB`.
    #[must_use]
    pub fn base(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or(&self.0)
    }

    /// Returns the language made of the primary subtag only.
    #[must_use]
    pub fn base_language(&self) -> Language {
        Language::new(self.base().to_owned())
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Language {
    fn from(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// ============================================================================
// PLURAL RULES
// ============================================================================

/// Returns the index of the plural form for `count` in `language`.
#[must_use]
pub fn plural_form_index(language: &Language, count: usize) -> usize {
    match language.base() {
        "ru" | "uk" | "be" => {
            let (rem10, rem100) = (count % 10, count % 100);
            if rem10 == 1 && rem100 != 11 {
                0
            } else if (2..=4).contains(&rem10) && !(12..=14).contains(&rem100) {
                1
            } else {
                2
            }
        }
        "ja" | "zh" | "ko" | "vi" | "th" => 0,
        _ => usize::from(count != 1),
    }
}

/// Picks the plural form of a `|`-separated message.
///
/// Messages without `|` are returned as-is. When the rule asks for a form
/// the message does not have, the last form is used.
#[must_use]
pub fn select_plural_form<'m>(message: &'m str, language: &Language, count: usize) -> &'m str {
    if !message.contains('|') {
        return message;
    }
    let forms: Vec<&str> = message.split('|').collect();
    let index = plural_form_index(language, count).min(forms.len() - 1);
    forms[index]
}

// ============================================================================
// TRANSLATOR
// ============================================================================

/// Translates message templates and translatable parameter values.
///
/// Implementations must fall back to the input when no translation exists.
pub trait Translator: Send + Sync {
    /// Returns `message` translated into `language`, with the plural form
    /// for `plural_count` selected.
    fn translate(&self, language: &Language, message: &str, plural_count: usize) -> String;
}

/// An in-memory, per-language message catalog.
///
/// Lookup tries the exact tag first (`en-GB`), then the primary subtag
/// (`en`). Untranslated messages are returned unchanged with English plural
/// rules applied.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    catalogs: HashMap<Language, HashMap<String, String>>,
}

impl Translations {
    /// Creates an empty catalog: every message renders in English.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog preloaded with translations of the built-in
    /// constraint messages.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new().with_catalog(
            Language::RUSSIAN,
            crate::constraints::message::RUSSIAN.iter().copied(),
        )
    }

    /// Adds a single translation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(
        mut self,
        language: Language,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.catalogs
            .entry(language)
            .or_default()
            .insert(message.into(), translation.into());
        self
    }

    /// Adds every `(message, translation)` pair for a language.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_catalog<I, M, T>(mut self, language: Language, messages: I) -> Self
    where
        I: IntoIterator<Item = (M, T)>,
        M: Into<String>,
        T: Into<String>,
    {
        let catalog = self.catalogs.entry(language).or_default();
        for (message, translation) in messages {
            catalog.insert(message.into(), translation.into());
        }
        self
    }

    /// Returns `true` if a catalog exists for the language or its base.
    #[must_use]
    pub fn supports(&self, language: &Language) -> bool {
        self.catalogs.contains_key(language)
            || self.catalogs.contains_key(&language.base_language())
    }

    /// Looks up the raw (unpluralized) translation of a message.
    #[must_use]
    pub fn lookup(&self, language: &Language, message: &str) -> Option<&str> {
        let exact = self
            .catalogs
            .get(language)
            .and_then(|catalog| catalog.get(message));
        exact
            .or_else(|| {
                self.catalogs
                    .get(&language.base_language())
                    .and_then(|catalog| catalog.get(message))
            })
            .map(String::as_str)
    }
}

impl Translator for Translations {
    fn translate(&self, language: &Language, message: &str, plural_count: usize) -> String {
        match self.lookup(language, message) {
            Some(translation) => select_plural_form(translation, language, plural_count).to_owned(),
            None => select_plural_form(message, &Language::ENGLISH, plural_count).to_owned(),
        }
    }
}
