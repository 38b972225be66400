//! Translation backend over the hosted generative language API.

use std::time::Duration;

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use zeroize::Zeroizing;

use super::prompt::{batch_prompt, batch_schema, text_prompt, text_schema};
use crate::config::Settings;
use crate::i18n::Language;
use crate::translate::{TranslateError, TranslationBackend};

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    /// Conversation turns; a single user turn here.
    contents: Vec<Content>,
    /// Output constraints.
    generation_config: GenerationConfig,
}

/// One conversation turn.
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    /// Author role (`user` on requests).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Content parts.
    #[serde(default)]
    parts: Vec<Part>,
}

/// A text part.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    /// Part text; absent for non-text parts.
    #[serde(default)]
    text: Option<String>,
}

/// Output constraints forcing schema-conforming JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    /// Always `application/json`.
    response_mime_type: &'static str,
    /// Schema the reply must satisfy.
    response_schema: Value,
    /// Low temperature keeps translations literal.
    temperature: f32,
}

/// `generateContent` response body (only the fields used here).
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    /// Candidate replies.
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One candidate reply.
#[derive(Debug, Deserialize)]
struct Candidate {
    /// Reply content.
    #[serde(default)]
    content: Option<Content>,
}

/// Validated batch reply.
#[derive(Debug, Deserialize)]
struct BatchReply {
    /// Translations in request order.
    translations: Vec<String>,
}

/// Validated single-text reply.
#[derive(Debug, Deserialize)]
struct TextReply {
    /// The translation.
    translation: String,
}

/// Generative-model translation backend.
pub struct GenAiBackend {
    /// Pooled HTTP client with timeouts.
    client: reqwest::Client,
    /// API base without trailing slash.
    endpoint: String,
    /// Model name.
    model: String,
    /// API key, wiped on drop.
    api_key: Zeroizing<String>,
}

impl std::fmt::Debug for GenAiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiBackend")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GenAiBackend {
    /// What: Build a backend.
    ///
    /// Inputs:
    /// - `endpoint`: API base (e.g. `https://generativelanguage.googleapis.com/v1beta`)
    /// - `model`: Model name
    /// - `api_key`: API key
    /// - `timeout`: Per-request timeout
    ///
    /// # Errors
    /// - Returns `Err` when the HTTP client cannot be created.
    pub fn new(
        endpoint: &str,
        model: &str,
        api_key: Zeroizing<String>,
        timeout: Duration,
    ) -> super::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .timeout(timeout)
            .user_agent(format!("vidya-lingo/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    /// What: Build a backend from settings and the API key environment variables.
    ///
    /// # Errors
    /// - Returns `Err` when no API key variable is set
    /// - Returns `Err` when the HTTP client cannot be created
    pub fn from_settings(settings: &Settings) -> super::Result<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .map(Zeroizing::new)
            .ok_or_else(|| format!("No API key: set {}", API_KEY_VARS.join(" or ")))?;
        Self::new(
            &settings.genai_endpoint,
            &settings.genai_model,
            api_key,
            settings.genai_timeout(),
        )
    }

    /// Full `generateContent` URL for the configured model.
    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// What: Send a prompt and decode the schema-constrained JSON reply.
    ///
    /// # Errors
    /// - `BackendUnavailable` on transport errors, timeouts, and non-success statuses
    /// - `MalformedResponse` when the body or its JSON payload does not decode
    async fn generate<T: DeserializeOwned>(
        &self,
        prompt: String,
        schema: Value,
    ) -> Result<T, TranslateError> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
                temperature: 0.2,
            },
        };
        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslateError::BackendUnavailable(format!("request failed: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = %status, model = %self.model, "[GenAI] Non-success status");
            return Err(TranslateError::BackendUnavailable(format!("HTTP {status}")));
        }
        let text = resp
            .text()
            .await
            .map_err(|e| TranslateError::BackendUnavailable(format!("failed to read body: {e}")))?;
        decode_reply(&text)
    }
}

impl TranslationBackend for GenAiBackend {
    fn translate_batch<'a>(
        &'a self,
        texts: &'a [String],
        target: Language,
    ) -> BoxFuture<'a, Result<Vec<String>, TranslateError>> {
        Box::pin(async move {
            tracing::debug!(count = texts.len(), language = %target, "[GenAI] Batch request");
            let reply: BatchReply = self
                .generate(batch_prompt(texts, target), batch_schema())
                .await?;
            Ok(reply.translations)
        })
    }

    fn translate_text<'a>(
        &'a self,
        text: &'a str,
        target: Language,
    ) -> BoxFuture<'a, Result<String, TranslateError>> {
        Box::pin(async move {
            let reply: TextReply = self
                .generate(text_prompt(text, target), text_schema())
                .await?;
            Ok(reply.translation)
        })
    }
}

/// What: Decode a `generateContent` body into the typed reply.
///
/// Inputs:
/// - `body`: Raw response body
///
/// Output:
/// - The reply parsed from the first candidate's text part.
///
/// # Errors
/// - `MalformedResponse` when the envelope is invalid, has no text, or the
///   text is not JSON of the expected shape.
///
/// Details:
/// - Tolerates a Markdown code fence around the JSON payload.
fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<T, TranslateError> {
    let envelope: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(format!("invalid envelope: {e}")))?;
    let payload = envelope
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .ok_or_else(|| TranslateError::MalformedResponse("no text candidate".to_string()))?;
    serde_json::from_str(strip_code_fence(&payload))
        .map_err(|e| TranslateError::MalformedResponse(format!("unexpected payload: {e}")))
}

/// Remove a surrounding ```` ```json ```` fence, if present.
fn strip_code_fence(s: &str) -> &str {
    let trimmed = s.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
