//! Prompt templates for the generative translation backend.

use serde_json::{Value, json};

use crate::i18n::Language;

/// What: Build the batch translation prompt.
///
/// Inputs:
/// - `texts`: Ordered source texts
/// - `target`: Target language
///
/// Output:
/// - Prompt asking for `{"translations": [...]}` of the same length and order.
#[must_use]
pub fn batch_prompt(texts: &[String], target: Language) -> String {
    let input = serde_json::to_string(texts).unwrap_or_else(|_| "[]".to_string());
    format!(
        "You translate interface text for a learning portal used by school students.\n\
         Translate each string in the JSON array below from English into {lang}.\n\
         Rules:\n\
         - Reply with a JSON object {{\"translations\": [...]}} holding exactly {n} strings, \
         in the same order as the input.\n\
         - Keep placeholders such as {{name}}, numbers, emoji, URLs, and markdown unchanged.\n\
         - Return a string unchanged if it is a proper noun or already in {lang}.\n\
         Input:\n{input}",
        lang = target.name(),
        n = texts.len(),
    )
}

/// Build the single-text prompt asking for `{"translation": "..."}`.
#[must_use]
pub fn text_prompt(text: &str, target: Language) -> String {
    let input = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "Translate the following text from English into {lang} for a student audience.\n\
         Keep placeholders, numbers, emoji, URLs, and markdown unchanged.\n\
         Reply with a JSON object {{\"translation\": \"...\"}}.\n\
         Text: {input}",
        lang = target.name(),
    )
}

/// Response schema for batch replies.
#[must_use]
pub fn batch_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "translations": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["translations"]
    })
}

/// Response schema for single-text replies.
#[must_use]
pub fn text_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": { "translation": { "type": "STRING" } },
        "required": ["translation"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_prompt_embeds_count_language_and_json_input() {
        let texts = vec!["Start quiz".to_string(), "Say \"hi\"".to_string()];
        let prompt = batch_prompt(&texts, Language::Marathi);
        assert!(prompt.contains("into Marathi"));
        assert!(prompt.contains("exactly 2 strings"));
        assert!(prompt.contains(r#"["Start quiz","Say \"hi\""]"#));
    }

    #[test]
    fn text_prompt_quotes_input() {
        let prompt = text_prompt("Well done!", Language::Kannada);
        assert!(prompt.contains("into Kannada"));
        assert!(prompt.ends_with("Text: \"Well done!\""));
    }
}
