//! Display language selection for the portal.
//!
//! # Overview
//!
//! - **Languages**: a closed set of supported display languages, with English
//!   as the base (authored) language that never needs translation
//! - **Context**: [`LanguageContext`] holds the current selection, persists it
//!   through a [`LanguageStore`], applies the locale to a [`LocaleTarget`], and
//!   notifies subscribers over a `tokio::sync::watch` channel
//! - **Stores**: [`SettingsLanguageStore`] writes `language = <Name>` into
//!   `settings.conf`; [`MemoryLanguageStore`] keeps it in process
//!
//! # Error Handling
//!
//! - Unsupported selections return [`LanguageError::Unsupported`] and leave the
//!   current language untouched
//! - Persistence failures are logged and never roll back the selection

mod context;
mod document;
mod language;
mod store;

pub use context::LanguageContext;
pub use document::{DocumentRoot, LocaleTarget};
pub use language::{BASE_LANGUAGE_NAME, Language, LanguageError, TextDirection};
pub use store::{LANGUAGE_KEY, LanguageStore, MemoryLanguageStore, SettingsLanguageStore};
