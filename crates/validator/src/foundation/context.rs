//! Caller-supplied context for a validation run
//!
//! A [`Context`] travels unchanged through every nested scope. It carries:
//!
//! - typed values keyed by name, read back by custom constraints and
//!   [`Validatable`](crate::Validatable) implementations
//! - an optional preferred [`Language`]
//! - a [`CancellationToken`] observed by concurrent validation
//!
//! Contexts are cheap to clone; builder methods copy on write.

use super::translation::Language;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

type Values = HashMap<String, Arc<dyn Any + Send + Sync>>;

#[derive(Clone, Default)]
pub struct Context {
    values: Arc<Values>,
    language: Option<Language>,
    cancellation: CancellationToken,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under `key`, replacing any previous value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        Arc::make_mut(&mut self.values).insert(key.into(), Arc::new(value));
        self
    }

    /// Prefers `language` for messages rendered under this context.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Replaces the cancellation token.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Returns the value stored under `key` if it is a `T`.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|value| value.downcast_ref())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[must_use]
    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Context")
            .field("keys", &keys)
            .field("language", &self.language)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
