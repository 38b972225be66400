//! Command-line language selection.

use std::sync::Arc;

use vidya_lingo::i18n::{
    DocumentRoot, Language, LanguageContext, LanguageError, LocaleTarget, MemoryLanguageStore,
    SettingsLanguageStore,
};

/// Language context backed by the user's `settings.conf`.
pub fn user_context() -> LanguageContext {
    let root: Arc<dyn LocaleTarget> = Arc::new(DocumentRoot::default());
    LanguageContext::new(Box::new(SettingsLanguageStore::user()), Some(root))
}

/// What: Context used for translation commands.
///
/// Inputs:
/// - `user`: Persisted context
/// - `to`: Optional one-off target
///
/// Output:
/// - `user` itself, or an in-memory context on `to` that leaves settings untouched.
///
/// # Errors
/// - Returns `LanguageError::Unsupported` when `to` is not a supported language.
pub fn target_context(
    user: &LanguageContext,
    to: Option<&str>,
) -> Result<LanguageContext, LanguageError> {
    let Some(id) = to else {
        return Ok(user.clone());
    };
    let language = Language::from_id(id).ok_or_else(|| LanguageError::Unsupported(id.to_string()))?;
    Ok(LanguageContext::new(
        Box::new(MemoryLanguageStore::with_value(language.name())),
        None,
    ))
}

/// What: Select and persist a language.
///
/// Output:
/// - `true` when the language is now active.
pub fn handle_set_language(context: &LanguageContext, id: &str) -> bool {
    match context.set_language(id) {
        Ok(language) => {
            println!("Language set to {language} ({})", language.tag());
            true
        }
        Err(e) => {
            eprintln!("{e}");
            let names: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
            eprintln!("Supported: {}", names.join(", "));
            false
        }
    }
}

/// Print every supported language; the current one is marked with `*`.
pub fn handle_list_languages(context: &LanguageContext) {
    let current = context.language();
    for language in Language::ALL {
        let mark = if language == current { '*' } else { ' ' };
        println!(
            "{mark} {:<10} {:<3} {}",
            language.name(),
            language.tag(),
            language.direction().as_attr()
        );
    }
}
