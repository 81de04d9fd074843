use formai_core::{FieldConfig, FieldOptions, MaskPatterns};
use reqwest::Client as HttpClient;
use serde::Serialize;

use crate::error::GenerationFailure;

/// Endpoint of a field service running locally with default settings.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/generate";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequestBody<'a> {
    user_prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    mask_patterns: Option<&'a MaskPatterns>,
}

/// Issues generation requests against a field service endpoint.
///
/// Cloning is cheap; the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct FieldConfigGenerator {
    http: HttpClient,
    endpoint: String,
}

impl Default for FieldConfigGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl FieldConfigGenerator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http(HttpClient::new(), endpoint)
    }

    /// Reuse an existing `reqwest::Client` (proxies, timeouts, TLS, …).
    pub fn with_http(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the service to turn `prompt` into a [`FieldConfig`].
    ///
    /// The body is decoded as-is; its shape is not re-checked beyond what
    /// deserialisation requires.
    pub async fn get_field_config(
        &self,
        prompt: &str,
        options: Option<&FieldOptions>,
    ) -> Result<FieldConfig, GenerationFailure> {
        let result = self.request(prompt, options).await;
        if let Err(err) = &result {
            tracing::warn!(endpoint = %self.endpoint, error = %err, "field generation failed");
        }
        result
    }

    async fn request(
        &self,
        prompt: &str,
        options: Option<&FieldOptions>,
    ) -> Result<FieldConfig, GenerationFailure> {
        let body = GenerateRequestBody {
            user_prompt: prompt,
            mask_patterns: options.and_then(|o| o.mask_patterns.as_ref()),
        };

        let resp = self.http.post(&self.endpoint).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = status
                .canonical_reason()
                .map(str::to_owned)
                .unwrap_or_else(|| status.as_str().to_owned());
            return Err(GenerationFailure::Status { status, text });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// One-shot helper: build a generator for `endpoint` (or
/// [`DEFAULT_ENDPOINT`]) and fetch a configuration.
pub async fn get_field_config(
    prompt: &str,
    options: Option<&FieldOptions>,
    endpoint: Option<&str>,
) -> Result<FieldConfig, GenerationFailure> {
    FieldConfigGenerator::new(endpoint.unwrap_or(DEFAULT_ENDPOINT))
        .get_field_config(prompt, options)
        .await
}
