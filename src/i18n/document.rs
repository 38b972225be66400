//! Locale target that mirrors the active language onto the rendered document.

use std::sync::RwLock;

use super::language::{Language, TextDirection};

/// Receiver of locale changes (the document root in a rendered UI).
pub trait LocaleTarget: Send + Sync {
    /// Apply the locale tag and writing direction of `language`.
    fn apply_locale(&self, language: Language);
}

/// Document root attributes kept in memory (`lang` and `dir`).
#[derive(Debug)]
pub struct DocumentRoot {
    /// Current `(lang, dir)` attribute values.
    attrs: RwLock<(&'static str, TextDirection)>,
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self {
            attrs: RwLock::new((Language::English.tag(), TextDirection::Ltr)),
        }
    }
}

impl DocumentRoot {
    /// Current `lang` attribute.
    #[must_use]
    pub fn lang(&self) -> &'static str {
        self.attrs.read().map_or(Language::English.tag(), |a| a.0)
    }

    /// Current `dir` attribute.
    #[must_use]
    pub fn dir(&self) -> TextDirection {
        self.attrs.read().map_or(TextDirection::Ltr, |a| a.1)
    }
}

impl LocaleTarget for DocumentRoot {
    fn apply_locale(&self, language: Language) {
        if let Ok(mut attrs) = self.attrs.write() {
            *attrs = (language.tag(), language.direction());
        }
        tracing::debug!(
            lang = language.tag(),
            dir = language.direction().as_attr(),
            "[Language] Applied locale to document root"
        );
    }
}
