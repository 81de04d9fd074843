use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formai_core::error::FormAiError;
use serde_json::json;
use thiserror::Error;

/// Everything that can end a generation request. Each variant is terminal
/// for the request; nothing is retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("request body has no usable `userPrompt`")]
    MissingPrompt,

    /// Holds the name of the environment variable that should carry the
    /// backend credential.
    #[error("backend credential `{0}` is not configured")]
    MissingCredential(String),

    #[error("malformed request body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("generation backend failed: {0}")]
    Backend(#[from] FormAiError),

    #[error("generation backend returned an empty completion")]
    EmptyCompletion,
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServiceError::MissingPrompt => StatusCode::BAD_REQUEST,
            ServiceError::MissingCredential(_)
            | ServiceError::MalformedBody(_)
            | ServiceError::Backend(_)
            | ServiceError::EmptyCompletion => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller. Backend causes stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::MethodNotAllowed => "Method not allowed".to_owned(),
            ServiceError::MissingPrompt => {
                "\"userPrompt\" is required in the request body".to_owned()
            }
            ServiceError::MissingCredential(var) => {
                format!("{var} is not configured on the server")
            }
            ServiceError::MalformedBody(_)
            | ServiceError::Backend(_)
            | ServiceError::EmptyCompletion => "Failed to process the AI request".to_owned(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "field generation failed");
        } else {
            tracing::debug!(error = %self, %status, "field generation rejected");
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
