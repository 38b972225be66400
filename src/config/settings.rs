//! Settings model and `settings.conf` parser.

use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::i18n::Language;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Default quiet period for the batch dispatcher.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
/// Default generative model.
pub const DEFAULT_GENAI_MODEL: &str = "gemini-2.0-flash";
/// Default API base for the generative language service.
pub const DEFAULT_GENAI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default per-request timeout.
pub const DEFAULT_GENAI_TIMEOUT_SECS: u64 = 30;

/// User-tunable settings read from `settings.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Raw persisted language id; validated by the language context.
    pub language: String,
    /// Trailing-edge debounce window for batch dispatch, in milliseconds.
    pub translate_debounce_ms: u64,
    /// Model name appended to the endpoint.
    pub genai_model: String,
    /// API base without trailing slash.
    pub genai_endpoint: String,
    /// Per-request timeout in seconds.
    pub genai_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::English.name().to_string(),
            translate_debounce_ms: DEFAULT_DEBOUNCE_MS,
            genai_model: DEFAULT_GENAI_MODEL.to_string(),
            genai_endpoint: DEFAULT_GENAI_ENDPOINT.to_string(),
            genai_timeout_secs: DEFAULT_GENAI_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Debounce window as a `Duration`.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.translate_debounce_ms)
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn genai_timeout(&self) -> Duration {
        Duration::from_secs(self.genai_timeout_secs)
    }
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to update in place
///
/// Details:
/// - Unknown keys are ignored; unparsable numbers keep the current value.
/// - A zero timeout is rejected since it would fail every request.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "language" | "lang" => {
                settings.language = val;
            }
            "translate_debounce_ms" | "debounce_ms" => match val.parse::<u64>() {
                Ok(v) => settings.translate_debounce_ms = v,
                Err(_) => warn!(value = %val, "[Settings] Ignoring invalid translate_debounce_ms"),
            },
            "genai_model" | "model" => {
                if !val.is_empty() {
                    settings.genai_model = val;
                }
            }
            "genai_endpoint" | "endpoint" => {
                if !val.is_empty() {
                    settings.genai_endpoint = val.trim_end_matches('/').to_string();
                }
            }
            "genai_timeout_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.genai_timeout_secs = v,
                _ => warn!(value = %val, "[Settings] Ignoring invalid genai_timeout_secs"),
            },
            _ => {}
        }
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Path to `settings.conf`
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            debug!(path = %path.display(), "[Settings] Loaded settings");
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "[Settings] Using defaults");
        }
    }
    settings
}

/// Load settings from the user's `settings.conf`.
#[must_use]
pub fn settings() -> Settings {
    load_settings_from(&super::paths::settings_path())
}
