//! Translation cache, pending tracker, and debounced batch dispatcher.
//!
//! # Overview
//!
//! Rendering code asks a [`Translator`] for the translation of a text. A hit
//! is served from the per-language [`TranslationCache`]; a miss queues the
//! text in the [`PendingTracker`] and returns the original. After a quiet
//! period with no new registrations the dispatcher sends every queued text for
//! the current language to the [`TranslationBackend`] as one batch, tagged with
//! that language. The reply is merged by index into the cache for the tagged
//! language and the texts leave the pending set.
//!
//! # Error Handling
//!
//! - Backend failures and misaligned replies resolve the whole batch to the
//!   original texts; nothing is left "translating"
//! - Failures are logged and never reach the caller

mod backend;
mod cache;
mod dispatcher;
mod error;
mod pending;
mod state;
mod translator;

pub use backend::{TranslationBackend, translate_batch, translate_text};
pub use cache::{CacheStats, TranslationCache};
pub use error::TranslateError;
pub use pending::PendingTracker;
pub use state::{Batch, SharedState, TranslationState};
pub use translator::Translator;
