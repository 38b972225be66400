use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use super::backend::{TranslationBackend, translate_batch};
use super::state::{Batch, SharedState};
use crate::i18n::LanguageContext;

/// What: Spawn the debounced batch dispatcher.
///
/// Inputs:
/// - `nudge_rx`: One message per newly queued text
/// - `shared`: Cache and pending state
/// - `context`: Language context read at flush time
/// - `backend`: Translation service
/// - `debounce`: Quiet period
///
/// Details:
/// - Trailing-edge debounce: every nudge restarts the quiet period.
/// - Each flush snapshots the queued texts of the current language by value
///   and dispatches them as one batch on its own task, so a slow backend never
///   delays later flushes or readers.
/// - The worker exits once every nudge sender (every translator handle) is dropped.
pub(super) fn spawn_batch_worker(
    mut nudge_rx: mpsc::UnboundedReceiver<()>,
    shared: Arc<SharedState>,
    context: LanguageContext,
    backend: Arc<dyn TranslationBackend>,
    debounce: Duration,
) {
    tokio::spawn(async move {
        loop {
            if nudge_rx.recv().await.is_none() {
                break;
            }
            loop {
                select! { Some(()) = nudge_rx.recv() => {} () = sleep(debounce) => { break; } }
            }
            let language = context.language();
            let Some(batch) = shared.take_batch(language) else {
                continue;
            };
            tracing::debug!(
                language = %batch.language,
                count = batch.texts.len(),
                "[Translate] Dispatching batch"
            );
            let shared = Arc::clone(&shared);
            let backend = Arc::clone(&backend);
            tokio::spawn(async move {
                run_batch(&shared, backend.as_ref(), &batch).await;
            });
        }
        tracing::debug!("[Translate] Batch worker stopped");
    });
}

/// What: Send one batch and merge its outcome.
///
/// Inputs:
/// - `shared`: State to merge into
/// - `backend`: Translation service
/// - `batch`: The exact request, carrying its own language tag
async fn run_batch(shared: &SharedState, backend: &dyn TranslationBackend, batch: &Batch) {
    let result = translate_batch(backend, &batch.texts, batch.language.name()).await;
    shared.apply(batch, result);
}
