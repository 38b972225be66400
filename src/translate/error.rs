use std::fmt;

/// Failure of a translation backend call.
///
/// Both variants are absorbed by the dispatcher and degrade to showing the
/// original text; they only ever surface in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The service could not be reached, errored, or timed out.
    BackendUnavailable(String),
    /// The service answered with the wrong shape or the wrong number of items.
    MalformedResponse(String),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackendUnavailable(msg) => write!(f, "translation backend unavailable: {msg}"),
            Self::MalformedResponse(msg) => write!(f, "malformed translation response: {msg}"),
        }
    }
}

impl std::error::Error for TranslateError {}
