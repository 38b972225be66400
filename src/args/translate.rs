//! Command-line translation through the cache and batch dispatcher.

use std::sync::Arc;
use std::time::Duration;

use vidya_lingo::config::Settings;
use vidya_lingo::i18n::{Language, LanguageContext};
use vidya_lingo::sources::GenAiBackend;
use vidya_lingo::translate::{TranslationBackend, Translator, translate_text};

/// Extra time allowed beyond debounce and request timeout before giving up.
const WAIT_SLACK: Duration = Duration::from_secs(5);

/// What: Build the generative backend, reporting setup failures.
///
/// Output:
/// - `Some(backend)`, or `None` after printing why it is unavailable.
fn backend(settings: &Settings) -> Option<Arc<dyn TranslationBackend>> {
    match GenAiBackend::from_settings(settings) {
        Ok(b) => Some(Arc::new(b)),
        Err(e) => {
            tracing::error!(error = %e, "[GenAI] Backend unavailable");
            eprintln!("{e}");
            None
        }
    }
}

/// What: Translate texts the way rendering code does and print the results.
///
/// Inputs:
/// - `texts`: Texts to translate
/// - `context`: Language context to translate into
/// - `settings`: Debounce and backend settings
///
/// Output:
/// - `true` unless the backend could not be created.
///
/// Details:
/// - Registers every text, waits for the dispatcher to settle, then prints
///   `original => translation` per line (original text where translation failed).
pub async fn handle_translate(texts: &[String], context: LanguageContext, settings: &Settings) -> bool {
    let language = context.language();
    if language.is_base() {
        for text in texts {
            println!("{text} => {text}");
        }
        return true;
    }
    let Some(backend) = backend(settings) else {
        return false;
    };

    let translator = Translator::new(context, backend, settings.debounce());
    translator.register_keys(texts);

    let budget = settings.debounce() + settings.genai_timeout() + WAIT_SLACK;
    if tokio::time::timeout(budget, translator.wait_idle()).await.is_err() {
        tracing::warn!(language = %language, "[Translate] Gave up waiting for translations");
    }

    for text in texts {
        println!("{text} => {}", translator.get_translation(text));
    }
    let stats = translator.cache_stats();
    tracing::debug!(
        hits = stats.hits,
        misses = stats.misses,
        entries = stats.entries,
        fallbacks = translator.fallback_len(language),
        "[Translate] Cache stats"
    );
    true
}

/// What: Translate one text with a single direct request.
///
/// Output:
/// - `true` unless the backend could not be created.
pub async fn handle_translate_one(text: &str, language: Language, settings: &Settings) -> bool {
    if language.is_base() {
        println!("{text}");
        return true;
    }
    let Some(backend) = backend(settings) else {
        return false;
    };
    println!("{}", translate_text(backend.as_ref(), text, language.name()).await);
    true
}
