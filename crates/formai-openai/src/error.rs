use formai_core::error::FormAiError;
use reqwest::StatusCode;

/// Failure of one round trip to an OpenAI-compatible chat-completions
/// endpoint.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// Connection, TLS, timeout or body read failure.
    #[error("chat completion transport failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat completion body is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    /// Non-2xx answer; `body` is the raw response text.
    #[error("chat completion endpoint answered {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// A well-formed answer that carries no usable message.
    #[error("unusable chat completion: {0}")]
    Format(String),
}

impl From<OpenAiError> for FormAiError {
    fn from(value: OpenAiError) -> Self {
        FormAiError::Backend(Box::new(value))
    }
}
