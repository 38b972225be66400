//! Language selection persisted through `settings.conf` across sessions.

use std::sync::Arc;

use vidya_lingo::i18n::{
    DocumentRoot, Language, LanguageContext, LanguageError, LocaleTarget, SettingsLanguageStore,
    TextDirection,
};

fn session(path: &std::path::Path) -> (LanguageContext, Arc<DocumentRoot>) {
    let root = Arc::new(DocumentRoot::default());
    let target: Arc<dyn LocaleTarget> = root.clone();
    let ctx = LanguageContext::new(
        Box::new(SettingsLanguageStore::new(path.to_path_buf())),
        Some(target),
    );
    (ctx, root)
}

#[test]
fn selection_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.conf");

    let (first, _) = session(&path);
    assert_eq!(first.language(), Language::English);
    first.set_language("ur").expect("supported");
    drop(first);

    let (second, root) = session(&path);
    assert_eq!(second.language(), Language::Urdu);
    assert_eq!(root.lang(), "ur");
    assert_eq!(root.dir(), TextDirection::Rtl);
}

#[test]
fn saving_keeps_unrelated_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.conf");
    std::fs::write(
        &path,
        "# my settings\ntranslate_debounce_ms = 250\nlanguage = Hindi\n",
    )
    .expect("seed");

    let (ctx, _) = session(&path);
    assert_eq!(ctx.language(), Language::Hindi);
    ctx.select(Language::Kannada);

    let content = std::fs::read_to_string(&path).expect("read back");
    assert!(content.contains("# my settings"));
    assert!(content.contains("translate_debounce_ms = 250"));
    assert!(content.contains("Kannada"));
    assert!(!content.contains("Hindi"));
    assert_eq!(vidya_lingo::config::load_settings_from(&path).translate_debounce_ms, 250);
}

#[test]
fn unsupported_requests_leave_file_and_selection_alone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.conf");
    std::fs::write(&path, "language = Tamil\n").expect("seed");

    let (ctx, root) = session(&path);
    let err = ctx.set_language("Klingon").expect_err("unsupported");
    assert_eq!(err, LanguageError::Unsupported("Klingon".into()));
    assert_eq!(ctx.language(), Language::Tamil);
    assert_eq!(root.lang(), "ta");
    assert_eq!(
        std::fs::read_to_string(&path).expect("read back"),
        "language = Tamil\n"
    );
}

#[test]
fn unknown_stored_value_starts_on_base_language() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.conf");
    std::fs::write(&path, "language = Esperanto\n").expect("seed");

    let (ctx, root) = session(&path);
    assert_eq!(ctx.language(), Language::English);
    assert_eq!(root.lang(), "en");
    assert_eq!(root.dir(), TextDirection::Ltr);
}
