//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use vidya_lingo::i18n::{Language, LanguageContext, MemoryLanguageStore};
use vidya_lingo::translate::{TranslateError, TranslationBackend, Translator};

/// Debounce window used by the integration tests.
pub const QUIET: Duration = Duration::from_millis(500);

/// Reply produced for a call.
pub type Reply = Result<Vec<String>, TranslateError>;

/// Backend double with a per-call reply function and optional latency.
pub struct RecordingBackend {
    reply: Box<dyn Fn(&[String], Language) -> Reply + Send + Sync>,
    delay: Mutex<Option<Duration>>,
    calls: Mutex<Vec<(Vec<String>, Language)>>,
}

impl RecordingBackend {
    pub fn new(reply: impl Fn(&[String], Language) -> Reply + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            delay: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Marks every text with the target tag, e.g. `hi:Hello`.
    pub fn tagging() -> Arc<Self> {
        Self::new(|texts, lang| {
            Ok(texts
                .iter()
                .map(|t| format!("{}:{t}", lang.tag()))
                .collect())
        })
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().expect("backend lock") = Some(delay);
    }

    pub fn calls(&self) -> Vec<(Vec<String>, Language)> {
        self.calls.lock().expect("backend lock").clone()
    }
}

impl TranslationBackend for RecordingBackend {
    fn translate_batch<'a>(
        &'a self,
        texts: &'a [String],
        target: Language,
    ) -> BoxFuture<'a, Result<Vec<String>, TranslateError>> {
        self.calls.lock().expect("backend lock").push((texts.to_vec(), target));
        let delay = *self.delay.lock().expect("backend lock");
        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            (self.reply)(texts, target)
        })
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub fn context(language: Language) -> LanguageContext {
    LanguageContext::new(Box::new(MemoryLanguageStore::with_value(language.name())), None)
}

pub fn translator(language: Language, backend: &Arc<RecordingBackend>) -> Translator {
    let dyn_backend: Arc<dyn TranslationBackend> = backend.clone();
    Translator::new(context(language), dyn_backend, QUIET)
}
