//! Network-backed translation sources.

mod genai;
mod prompt;

/// Boxed error for setup failures in this module.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use genai::{API_KEY_VARS, GenAiBackend};
pub use prompt::{batch_prompt, text_prompt};
