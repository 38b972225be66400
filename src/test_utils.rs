//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#![cfg(test)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;

use crate::i18n::{Language, LanguageContext, MemoryLanguageStore};
use crate::translate::{TranslateError, TranslationBackend};

/// Response function used by [`ScriptedBackend`].
type Responder = dyn Fn(&[String], Language) -> Result<Vec<String>, TranslateError> + Send + Sync;

/// What: Backend double that records every call and answers from a closure.
///
/// Details:
/// - Calls are recorded before the optional delay, so a test can observe a
///   dispatched-but-unanswered batch.
pub struct ScriptedBackend {
    /// Produces the reply for each call.
    respond: Box<Responder>,
    /// Simulated latency (virtual time under `start_paused`).
    delay: Option<Duration>,
    /// Recorded `(texts, target)` pairs.
    calls: Mutex<Vec<(Vec<String>, Language)>>,
}

impl ScriptedBackend {
    /// Backend answering with `respond`.
    pub fn new(
        respond: impl Fn(&[String], Language) -> Result<Vec<String>, TranslateError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Backend that "translates" by upper-casing.
    pub fn uppercase() -> Self {
        Self::new(|texts, _| Ok(texts.iter().map(|t| t.to_uppercase()).collect()))
    }

    /// Backend that always fails.
    pub fn failing() -> Self {
        Self::new(|_, _| {
            Err(TranslateError::BackendUnavailable(
                "service down".to_string(),
            ))
        })
    }

    /// Add simulated latency to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Snapshot of recorded calls.
    pub fn calls(&self) -> Vec<(Vec<String>, Language)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl TranslationBackend for ScriptedBackend {
    fn translate_batch<'a>(
        &'a self,
        texts: &'a [String],
        target: Language,
    ) -> BoxFuture<'a, Result<Vec<String>, TranslateError>> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((texts.to_vec(), target));
        Box::pin(async move {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            (self.respond)(texts, target)
        })
    }
}

/// What: Language context backed by an in-memory store.
///
/// Inputs:
/// - `language`: Initial selection
pub fn context_on(language: Language) -> LanguageContext {
    LanguageContext::new(
        Box::new(MemoryLanguageStore::with_value(language.name())),
        None,
    )
}

/// Shared handle to a scripted backend plus the trait object the translator needs.
pub fn shared(backend: ScriptedBackend) -> (Arc<ScriptedBackend>, Arc<dyn TranslationBackend>) {
    let backend = Arc::new(backend);
    let dyn_backend: Arc<dyn TranslationBackend> = backend.clone();
    (backend, dyn_backend)
}
