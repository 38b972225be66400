use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use super::backend::TranslationBackend;
use super::cache::CacheStats;
use super::dispatcher::spawn_batch_worker;
use super::state::SharedState;
use crate::i18n::{Language, LanguageContext};
use crate::util::is_blank;

/// Translation consumer handed to rendering code.
///
/// Reads are synchronous: a cache hit returns the translation, a miss queues
/// the text and returns it unchanged until the batch resolves. Cloning shares
/// the cache, pending set, and dispatcher; [`Translator::new`] creates an
/// independent instance. Dropping the last clone stops the dispatcher; batches
/// already in flight still complete.
#[derive(Clone)]
pub struct Translator {
    /// Cache, pending set, and revision channel.
    shared: Arc<SharedState>,
    /// Source of the current language.
    context: LanguageContext,
    /// Wakes the dispatcher on new registrations.
    nudge_tx: mpsc::UnboundedSender<()>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("language", &self.context.language())
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// What: Create a translator and start its dispatcher.
    ///
    /// Inputs:
    /// - `context`: Language context to follow
    /// - `backend`: Translation service
    /// - `debounce`: Quiet period before a batch is sent
    ///
    /// Output:
    /// - A translator with an empty cache.
    ///
    /// # Panics
    /// - Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn new(
        context: LanguageContext,
        backend: Arc<dyn TranslationBackend>,
        debounce: Duration,
    ) -> Self {
        let shared = Arc::new(SharedState::new());
        let (nudge_tx, nudge_rx) = mpsc::unbounded_channel();
        spawn_batch_worker(
            nudge_rx,
            Arc::clone(&shared),
            context.clone(),
            backend,
            debounce,
        );
        Self {
            shared,
            context,
            nudge_tx,
        }
    }

    /// Language context this translator follows.
    #[must_use]
    pub const fn context(&self) -> &LanguageContext {
        &self.context
    }

    /// What: Translation of `text` in the current language.
    ///
    /// Inputs:
    /// - `text`: Exact original text
    ///
    /// Output:
    /// - The cached translation, or `text` itself while it is being translated
    ///   (or when no translation applies).
    ///
    /// Details:
    /// - Base language and blank text return immediately without touching the cache.
    /// - A miss registers `text`; repeated misses do not re-register it.
    #[must_use]
    pub fn get_translation(&self, text: &str) -> String {
        let language = self.context.language();
        if language.is_base() || is_blank(text) {
            return text.to_string();
        }
        let mut state = self.shared.lock();
        if let Some(hit) = state.cache.get(language, text).map(str::to_string) {
            return hit;
        }
        let queued = state.pending.register(language, text);
        drop(state);
        if queued {
            self.nudge();
        }
        text.to_string()
    }

    /// `true` while `text` waits for a translation in the current language.
    #[must_use]
    pub fn is_translating(&self, text: &str) -> bool {
        let language = self.context.language();
        if language.is_base() {
            return false;
        }
        let state = self.shared.lock();
        state.pending.contains(language, text) && !state.cache.contains(language, text)
    }

    /// What: Register texts discovered during rendering.
    ///
    /// Inputs:
    /// - `texts`: Texts to translate into the current language
    ///
    /// Details:
    /// - Blank, cached, queued, and in-flight texts are skipped, so calling this
    ///   repeatedly never produces duplicate requests.
    /// - No-op under the base language.
    pub fn register_keys<I, S>(&self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let language = self.context.language();
        if language.is_base() {
            return;
        }
        let mut state = self.shared.lock();
        let mut queued = 0usize;
        for text in texts {
            let text = text.as_ref();
            if is_blank(text) || state.cache.contains(language, text) {
                continue;
            }
            if state.pending.register(language, text) {
                queued += 1;
            }
        }
        drop(state);
        if queued > 0 {
            tracing::trace!(queued, language = %language, "[Translate] Registered keys");
            self.nudge();
        }
    }

    /// `true` when nothing is pending for the current language.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        let language = self.context.language();
        language.is_base() || self.shared.lock().pending.is_idle(language)
    }

    /// Receiver bumped each time pending texts resolve; re-render on change.
    #[must_use]
    pub fn updates(&self) -> watch::Receiver<u64> {
        self.shared.subscribe()
    }

    /// What: Wait until nothing is pending for the current language.
    ///
    /// Details:
    /// - Wakes on every resolution and every language change.
    pub async fn wait_idle(&self) {
        let mut revisions = self.shared.subscribe();
        let mut languages = self.context.subscribe();
        loop {
            if self.is_idle() {
                return;
            }
            tokio::select! {
                r = revisions.changed() => if r.is_err() { return; },
                l = languages.changed() => if l.is_err() { return; },
            }
        }
    }

    /// Number of texts pending for `language`.
    #[must_use]
    pub fn pending_len(&self, language: Language) -> usize {
        self.shared.lock().pending.len(language)
    }

    /// Number of translations cached for `language`.
    #[must_use]
    pub fn cached_len(&self, language: Language) -> usize {
        self.shared.lock().cache.len(language)
    }

    /// Number of texts under `language` that resolved to their original after a failure.
    #[must_use]
    pub fn fallback_len(&self, language: Language) -> usize {
        self.shared.lock().cache.fallback_count(language)
    }

    /// Cache hit/miss counters.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.shared.lock().cache.stats()
    }

    /// Wake the dispatcher; restarts its quiet period.
    fn nudge(&self) {
        if self.nudge_tx.send(()).is_err() {
            tracing::warn!("[Translate] Batch worker is gone; texts stay untranslated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ScriptedBackend, context_on, shared};

    const QUIET: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    /// What: Base language returns text as-is with no pending state or calls.
    async fn base_language_bypasses_everything() {
        let (backend, dyn_backend) = shared(ScriptedBackend::uppercase());
        let tr = Translator::new(context_on(Language::English), dyn_backend, QUIET);

        assert_eq!(tr.get_translation("Hello"), "Hello");
        tr.register_keys(["Bye"]);
        assert!(!tr.is_translating("Hello"));
        assert_eq!(tr.pending_len(Language::English), 0);

        tokio::time::sleep(QUIET * 2).await;
        assert!(backend.calls().is_empty());
        assert_eq!(tr.cache_stats().misses, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn miss_returns_original_then_cached_translation() {
        let (backend, dyn_backend) = shared(ScriptedBackend::uppercase());
        let tr = Translator::new(context_on(Language::Hindi), dyn_backend, QUIET);

        assert_eq!(tr.get_translation("Lesson"), "Lesson");
        assert!(tr.is_translating("Lesson"));

        tr.wait_idle().await;

        assert!(!tr.is_translating("Lesson"));
        assert_eq!(tr.get_translation("Lesson"), "LESSON");
        assert_eq!(tr.get_translation("Lesson"), "LESSON");
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_text_is_never_registered() {
        let (backend, dyn_backend) = shared(ScriptedBackend::uppercase());
        let tr = Translator::new(context_on(Language::Tamil), dyn_backend, QUIET);

        assert_eq!(tr.get_translation("   "), "   ");
        tr.register_keys(["", "\t\n"]);
        assert_eq!(tr.pending_len(Language::Tamil), 0);

        tokio::time::sleep(QUIET * 2).await;
        assert!(backend.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    /// What: Re-registering an in-flight text after the quiet period does not re-send it.
    async fn in_flight_text_is_not_dispatched_twice() {
        let (backend, dyn_backend) =
            shared(ScriptedBackend::uppercase().with_delay(Duration::from_secs(5)));
        let tr = Translator::new(context_on(Language::Hindi), dyn_backend, QUIET);

        tr.register_keys(["Quiz"]);
        tokio::time::sleep(QUIET + Duration::from_millis(10)).await;
        assert_eq!(backend.calls().len(), 1);
        assert!(tr.is_translating("Quiz"));

        tr.register_keys(["Quiz"]);
        assert_eq!(tr.get_translation("Quiz"), "Quiz");
        tokio::time::sleep(QUIET * 2).await;
        assert_eq!(backend.calls().len(), 1);

        tr.wait_idle().await;
        assert_eq!(tr.get_translation("Quiz"), "QUIZ");
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn updates_channel_bumps_on_resolution() {
        let (_backend, dyn_backend) = shared(ScriptedBackend::uppercase());
        let tr = Translator::new(context_on(Language::Bengali), dyn_backend, QUIET);
        let mut updates = tr.updates();

        tr.register_keys(["Badge"]);
        updates.changed().await.expect("translator alive");
        assert_eq!(tr.get_translation("Badge"), "BADGE");
    }

    #[tokio::test(start_paused = true)]
    async fn failed_batch_is_counted_as_fallback() {
        let (_backend, dyn_backend) = shared(ScriptedBackend::failing());
        let tr = Translator::new(context_on(Language::Kannada), dyn_backend, QUIET);

        tr.register_keys(["Streak", "Badge"]);
        tr.wait_idle().await;

        assert_eq!(tr.get_translation("Streak"), "Streak");
        assert_eq!(tr.cached_len(Language::Kannada), 2);
        assert_eq!(tr.fallback_len(Language::Kannada), 2);
        assert_eq!(tr.fallback_len(Language::Hindi), 0);
    }
}
