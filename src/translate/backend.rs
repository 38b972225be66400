//! Boundary to the external translation service.

use futures::future::BoxFuture;

use super::error::TranslateError;
use crate::i18n::{BASE_LANGUAGE_NAME, Language};

/// Asynchronous translation service.
///
/// Implementations receive only distinct, non-blank texts and a non-base
/// target; callers go through [`translate_batch`] / [`translate_text`], which
/// handle the short-circuits and the length contract.
pub trait TranslationBackend: Send + Sync {
    /// What: Translate `texts` into `target`, preserving order.
    ///
    /// Output:
    /// - One translation per input, in input order.
    ///
    /// # Errors
    /// - `BackendUnavailable` on transport or service failure
    /// - `MalformedResponse` when the reply cannot be interpreted
    fn translate_batch<'a>(
        &'a self,
        texts: &'a [String],
        target: Language,
    ) -> BoxFuture<'a, Result<Vec<String>, TranslateError>>;

    /// Translate a single text. Defaults to a one-element batch.
    ///
    /// # Errors
    /// - Same as [`translate_batch`](Self::translate_batch), plus
    ///   `MalformedResponse` when the batch does not yield exactly one item.
    fn translate_text<'a>(
        &'a self,
        text: &'a str,
        target: Language,
    ) -> BoxFuture<'a, Result<String, TranslateError>> {
        Box::pin(async move {
            let texts = [text.to_string()];
            let mut out = self.translate_batch(&texts, target).await?;
            match (out.pop(), out.is_empty()) {
                (Some(translation), true) => Ok(translation),
                _ => Err(TranslateError::MalformedResponse(
                    "expected exactly one translation".to_string(),
                )),
            }
        })
    }
}

/// What: Decide whether `target_language` needs a backend call at all.
///
/// Output:
/// - `Some(language)` for a supported non-base language; `None` to short-circuit.
///
/// Details:
/// - Unsupported names should be rejected upstream; reaching here they are
///   treated like the base language and logged.
fn resolve_target(target_language: &str) -> Option<Language> {
    if target_language.trim().eq_ignore_ascii_case(BASE_LANGUAGE_NAME) {
        return None;
    }
    match Language::from_id(target_language) {
        Some(language) if !language.is_base() => Some(language),
        Some(_) => None,
        None => {
            tracing::warn!(
                target = %target_language,
                "[Translate] Unsupported target language; returning text untranslated"
            );
            None
        }
    }
}

/// What: Translate an ordered batch through `backend`.
///
/// Inputs:
/// - `backend`: Translation service
/// - `texts`: Distinct non-empty texts, in order
/// - `target_language`: Target language name
///
/// Output:
/// - Translations in the same order and of the same length as `texts`.
///
/// # Errors
/// - Propagates backend errors.
/// - `MalformedResponse` when the backend returns a different number of items.
///
/// Details:
/// - Base language (case-insensitive), unsupported targets, and empty input
///   return `texts` unchanged without calling the backend.
pub async fn translate_batch(
    backend: &dyn TranslationBackend,
    texts: &[String],
    target_language: &str,
) -> Result<Vec<String>, TranslateError> {
    if texts.is_empty() {
        return Ok(Vec::new());
    }
    let Some(target) = resolve_target(target_language) else {
        return Ok(texts.to_vec());
    };
    let translations = backend.translate_batch(texts, target).await?;
    if translations.len() != texts.len() {
        return Err(TranslateError::MalformedResponse(format!(
            "expected {} translations, got {}",
            texts.len(),
            translations.len()
        )));
    }
    Ok(translations)
}

/// What: Translate one text, falling back to the original on any failure.
///
/// Inputs:
/// - `backend`: Translation service
/// - `text`: Text to translate
/// - `target_language`: Target language name
///
/// Output:
/// - The translation, or `text` itself when no translation is needed or the
///   backend fails.
pub async fn translate_text(
    backend: &dyn TranslationBackend,
    text: &str,
    target_language: &str,
) -> String {
    if crate::util::is_blank(text) {
        return text.to_string();
    }
    let Some(target) = resolve_target(target_language) else {
        return text.to_string();
    };
    match backend.translate_text(text, target).await {
        Ok(translation) => translation,
        Err(e) => {
            tracing::warn!(
                language = %target,
                error = %e,
                "[Translate] Single-text translation failed; using original"
            );
            text.to_string()
        }
    }
}
