//! Durable slot for the selected display language.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::config::{load_settings_from, save_key_at};

/// Settings key holding the selected language.
pub const LANGUAGE_KEY: &str = "language";

/// Storage for the last selected language id.
///
/// Implementations must be cheap to call from the UI thread; the language
/// context calls `load` once at startup and `save` on every change.
pub trait LanguageStore: Send + Sync {
    /// Return the persisted id, if any.
    fn load(&self) -> Option<String>;

    /// Persist `id`.
    ///
    /// # Errors
    /// - Returns `Err` with a message when the value could not be written.
    fn save(&self, id: &str) -> Result<(), String>;
}

/// Stores the language as `language = <Name>` in a `settings.conf` file.
#[derive(Debug, Clone)]
pub struct SettingsLanguageStore {
    /// File that holds the `language` key.
    path: PathBuf,
}

impl SettingsLanguageStore {
    /// Store backed by the given settings file.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store backed by the user's `settings.conf`.
    #[must_use]
    pub fn user() -> Self {
        Self::new(crate::config::settings_path())
    }
}

impl LanguageStore for SettingsLanguageStore {
    fn load(&self) -> Option<String> {
        if !self.path.is_file() {
            return None;
        }
        let language = load_settings_from(&self.path).language;
        if language.trim().is_empty() {
            None
        } else {
            Some(language)
        }
    }

    fn save(&self, id: &str) -> Result<(), String> {
        save_key_at(&self.path, LANGUAGE_KEY, id)
    }
}

/// In-process store for tests and embedders without a config directory.
#[derive(Debug, Default)]
pub struct MemoryLanguageStore {
    /// Current value.
    value: Mutex<Option<String>>,
    /// Number of successful `save` calls.
    saves: Mutex<usize>,
}

impl MemoryLanguageStore {
    /// Store pre-seeded with `id`, as if it had been saved in an earlier session.
    #[must_use]
    pub fn with_value(id: &str) -> Self {
        Self {
            value: Mutex::new(Some(id.to_string())),
            saves: Mutex::new(0),
        }
    }

    /// Number of `save` calls so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.lock().map_or(0, |g| *g)
    }
}

impl LanguageStore for MemoryLanguageStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok().and_then(|g| g.clone())
    }

    fn save(&self, id: &str) -> Result<(), String> {
        let mut value = self
            .value
            .lock()
            .map_err(|_| "language store lock poisoned".to_string())?;
        *value = Some(id.to_string());
        if let Ok(mut saves) = self.saves.lock() {
            *saves += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_store_round_trips_language() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsLanguageStore::new(dir.path().join("settings.conf"));
        assert_eq!(store.load(), None);

        store.save("Marathi").expect("save");
        assert_eq!(store.load().as_deref(), Some("Marathi"));

        store.save("Punjabi").expect("save");
        assert_eq!(store.load().as_deref(), Some("Punjabi"));
    }

    #[test]
    fn memory_store_counts_saves() {
        let store = MemoryLanguageStore::default();
        assert_eq!(store.load(), None);
        store.save("Hindi").expect("save");
        assert_eq!(store.load().as_deref(), Some("Hindi"));
        assert_eq!(store.save_count(), 1);
    }
}
