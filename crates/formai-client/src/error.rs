use reqwest::StatusCode;

/// Failure of a single field generation round trip. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum GenerationFailure {
    /// The field service answered with a non-success status.
    #[error("formai service error: {text}")]
    Status { status: StatusCode, text: String },

    /// The service could not be reached or the body could not be read.
    #[error("failed to contact the formai service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a field configuration.
    #[error("failed to decode the field configuration: {0}")]
    Decode(#[from] serde_json::Error),
}
