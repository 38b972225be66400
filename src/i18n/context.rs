//! Process-wide "current language" with persistence and change notification.

use std::sync::Arc;

use tokio::sync::watch;

use super::document::LocaleTarget;
use super::language::{Language, LanguageError};
use super::store::LanguageStore;

/// Shared internals of a [`LanguageContext`].
struct Inner {
    /// Current selection; receivers are notified on change.
    tx: watch::Sender<Language>,
    /// Durable slot written on every change.
    store: Box<dyn LanguageStore>,
    /// Optional document root that receives the locale tag.
    target: Option<Arc<dyn LocaleTarget>>,
}

/// Single source of truth for the selected display language.
///
/// Cloning is cheap and shares the same selection; construct a new context
/// for an independent one.
#[derive(Clone)]
pub struct LanguageContext {
    /// Shared state.
    inner: Arc<Inner>,
}

impl std::fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language())
            .finish_non_exhaustive()
    }
}

impl LanguageContext {
    /// What: Create a context, restoring the persisted selection.
    ///
    /// Inputs:
    /// - `store`: Durable slot for the selection
    /// - `target`: Optional document root to keep in sync
    ///
    /// Output:
    /// - Context on the stored language, or the base language when nothing
    ///   usable is stored.
    ///
    /// Details:
    /// - An unsupported stored value is logged and ignored (not rewritten).
    /// - The startup language is applied to `target` once.
    pub fn new(store: Box<dyn LanguageStore>, target: Option<Arc<dyn LocaleTarget>>) -> Self {
        let initial = match store.load() {
            Some(id) => Language::from_id(&id).unwrap_or_else(|| {
                tracing::warn!(
                    stored = %id,
                    "[Language] Stored language is not supported; using {}",
                    Language::English
                );
                Language::English
            }),
            None => Language::English,
        };
        if let Some(t) = &target {
            t.apply_locale(initial);
        }
        tracing::info!(language = %initial, "[Language] Context initialized");
        let (tx, _rx) = watch::channel(initial);
        Self {
            inner: Arc::new(Inner { tx, store, target }),
        }
    }

    /// Current selection.
    #[must_use]
    pub fn language(&self) -> Language {
        *self.inner.tx.borrow()
    }

    /// What: Switch the display language.
    ///
    /// Inputs:
    /// - `id`: Language name or tag
    ///
    /// Output:
    /// - `Ok(language)` with the now-active language.
    ///
    /// # Errors
    /// - `LanguageError::Unsupported` when `id` is not a supported language;
    ///   the current selection is kept and nothing is persisted.
    ///
    /// Details:
    /// - Re-selecting the current language is a no-op (no save, no notification).
    /// - A failing store is logged; the in-memory selection still changes.
    pub fn set_language(&self, id: &str) -> Result<Language, LanguageError> {
        let Some(language) = Language::from_id(id) else {
            tracing::warn!(requested = %id, "[Language] Ignoring unsupported language");
            return Err(LanguageError::Unsupported(id.to_string()));
        };
        self.select(language);
        Ok(language)
    }

    /// Typed variant of [`set_language`](Self::set_language).
    pub fn select(&self, language: Language) {
        let changed = self.inner.tx.send_if_modified(|current| {
            if *current == language {
                false
            } else {
                *current = language;
                true
            }
        });
        if !changed {
            return;
        }
        if let Err(e) = self.inner.store.save(language.name()) {
            tracing::warn!(error = %e, "[Language] Failed to persist language");
        }
        if let Some(t) = &self.inner.target {
            t.apply_locale(language);
        }
        tracing::info!(language = %language, "[Language] Language changed");
    }

    /// Receiver that observes every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.inner.tx.subscribe()
    }
}
