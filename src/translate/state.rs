//! Cache and pending state shared between the consumer and the dispatcher.

use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;

use super::cache::TranslationCache;
use super::error::TranslateError;
use super::pending::PendingTracker;
use crate::i18n::Language;

/// Cache plus pending set, mutated together under one lock.
#[derive(Debug, Default)]
pub struct TranslationState {
    /// Resolved translations.
    pub cache: TranslationCache,
    /// Queued and in-flight texts.
    pub pending: PendingTracker,
}

/// A dispatched batch: the exact request list and the language it was sent for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Language captured at flush time; merges use this, never the live selection.
    pub language: Language,
    /// Request list in registration order.
    pub texts: Vec<String>,
}

/// State handle shared by every clone of a translator and its worker.
#[derive(Debug)]
pub struct SharedState {
    /// Cache and pending set. Never held across an `.await`.
    state: Mutex<TranslationState>,
    /// Bumped whenever pending texts resolve, so renderers know to re-read.
    revision: watch::Sender<u64>,
}

impl SharedState {
    /// Fresh, empty state.
    #[must_use]
    pub fn new() -> Self {
        let (revision, _rx) = watch::channel(0);
        Self {
            state: Mutex::new(TranslationState::default()),
            revision,
        }
    }

    /// Lock the state. A poisoned lock is recovered; the data stays consistent
    /// because every mutation completes before the guard is released.
    pub fn lock(&self) -> MutexGuard<'_, TranslationState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Receiver for revision bumps.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Notify renderers that resolved state changed.
    fn bump(&self) {
        self.revision.send_modify(|r| *r = r.wrapping_add(1));
    }

    /// What: Snapshot the queued texts of `language` into a batch.
    ///
    /// Inputs:
    /// - `language`: Language active at flush time
    ///
    /// Output:
    /// - `Some(Batch)` to dispatch, or `None` when there is nothing to send.
    ///
    /// Details:
    /// - Texts resolved concurrently (already cached) are filtered out.
    /// - The batch's texts move to in-flight before the lock is released.
    /// - The base language never produces a batch.
    pub fn take_batch(&self, language: Language) -> Option<Batch> {
        let mut state = self.lock();
        let (queued, dropped) = state.pending.take_queued(language);
        if dropped > 0 {
            tracing::debug!(
                dropped,
                language = %language,
                "[Translate] Discarded texts queued for a previous language"
            );
        }
        let drained = !queued.is_empty() || dropped > 0;
        let texts: Vec<String> = if language.is_base() {
            Vec::new()
        } else {
            queued
                .into_iter()
                .filter(|t| !state.cache.contains(language, t))
                .collect()
        };
        if texts.is_empty() {
            drop(state);
            if drained {
                self.bump();
            }
            return None;
        }
        state.pending.mark_in_flight(language, &texts);
        Some(Batch { language, texts })
    }

    /// What: Merge a batch result into the cache and clear its pending entries.
    ///
    /// Inputs:
    /// - `batch`: The exact batch that was dispatched
    /// - `result`: Backend outcome for that batch
    ///
    /// Details:
    /// - Translations are matched to `batch.texts` by index only when the
    ///   lengths agree; otherwise the batch resolves to the original texts.
    /// - Errors resolve every text to itself so nothing stays "translating".
    pub fn apply(&self, batch: &Batch, result: Result<Vec<String>, TranslateError>) {
        let mut state = self.lock();
        match result {
            Ok(translations) if translations.len() == batch.texts.len() => {
                for (original, translated) in batch.texts.iter().zip(translations) {
                    state
                        .cache
                        .insert_translation(batch.language, original.clone(), translated);
                }
                tracing::debug!(
                    language = %batch.language,
                    count = batch.texts.len(),
                    "[Translate] Batch merged"
                );
            }
            Ok(translations) => {
                tracing::warn!(
                    language = %batch.language,
                    expected = batch.texts.len(),
                    got = translations.len(),
                    "[Translate] Misaligned batch response; using original texts"
                );
                Self::fallback(&mut state, batch);
            }
            Err(e) => {
                tracing::warn!(
                    language = %batch.language,
                    count = batch.texts.len(),
                    error = %e,
                    "[Translate] Batch failed; using original texts"
                );
                Self::fallback(&mut state, batch);
            }
        }
        state.pending.resolve(batch.language, &batch.texts);
        drop(state);
        self.bump();
    }

    /// Resolve every text of `batch` to itself.
    fn fallback(state: &mut TranslationState, batch: &Batch) {
        for original in &batch.texts {
            state.cache.insert_fallback(batch.language, original);
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn take_batch_skips_texts_already_cached() {
        let shared = SharedState::new();
        {
            let mut s = shared.lock();
            s.pending.register(Language::Hindi, "A");
            s.pending.register(Language::Hindi, "B");
            s.cache
                .insert_translation(Language::Hindi, "A".into(), "अ".into());
        }
        let batch = shared.take_batch(Language::Hindi).expect("batch");
        assert_eq!(batch.texts, strings(&["B"]));
        assert!(shared.lock().pending.contains(Language::Hindi, "B"));
    }

    #[test]
    fn base_language_never_produces_a_batch() {
        let shared = SharedState::new();
        shared.lock().pending.register(Language::English, "A");
        let rx = shared.subscribe();
        assert_eq!(shared.take_batch(Language::English), None);
        assert!(shared.lock().pending.is_idle(Language::English));
        assert!(rx.has_changed().expect("sender alive"));
    }

    #[test]
    /// What: A misaligned reply resolves to originals instead of shifted values.
    fn misaligned_reply_falls_back() {
        let shared = SharedState::new();
        for t in ["A", "B", "C"] {
            shared.lock().pending.register(Language::Tamil, t);
        }
        let batch = shared.take_batch(Language::Tamil).expect("batch");
        shared.apply(&batch, Ok(strings(&["X", "Y"])));

        let mut s = shared.lock();
        for t in ["A", "B", "C"] {
            assert_eq!(s.cache.get(Language::Tamil, t), Some(t));
            assert!(!s.pending.contains(Language::Tamil, t));
        }
    }

    #[test]
    fn apply_uses_batch_language_and_bumps_revision() {
        let shared = SharedState::new();
        shared.lock().pending.register(Language::Hindi, "Hello");
        let batch = shared.take_batch(Language::Hindi).expect("batch");
        let mut rx = shared.subscribe();

        shared.apply(&batch, Ok(strings(&["नमस्ते"])));

        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(*rx.borrow_and_update(), 1);
        let mut s = shared.lock();
        assert_eq!(s.cache.get(Language::Hindi, "Hello"), Some("नमस्ते"));
        assert_eq!(s.cache.get(Language::Tamil, "Hello"), None);
    }
}
