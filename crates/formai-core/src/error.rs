//! Unified error type exposed by **`formai-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before bubbling them up to the field service. This keeps the public API
//! small while still conveying rich diagnostic information.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FormAiError>;

#[derive(Debug, Error)]
pub enum FormAiError {
    /// No credential is available for the generation backend. The string
    /// names the environment variable that was expected to hold it.
    #[error("backend credential `{0}` is not configured")]
    BackendNotConfigured(String),

    /// The selected backend is present but does not recognise or support the
    /// requested `model`.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported { provider: &'static str, model: String },

    /// Failure while serialising or deserialising JSON payloads sent to / received
    /// from the generation backend.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}
