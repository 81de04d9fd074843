//! The field configuration service: validates an inbound request, builds the
//! backend instruction, consults the cache and calls the generation backend
//! at most once per request.

use std::sync::Arc;

use formai_core::{
    MaskPatterns, MaskPlaceholders,
    generic::{GenericMessage, GenericRole},
    model::{Model, OpenAiModel},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use formai_prompt::chain::PromptChain;
use formai_types::fragments::{FieldInstructionFragment, StaticFragment};
use serde::{Deserialize, de::Error as _};
use serde_json::Value;

use crate::{
    cache::{ResponseCache, cache_key},
    error::ServiceError,
};

/// How the backend is asked for a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: Model,
    /// Kept low so identical descriptions produce near-identical fields.
    pub temperature: f64,
    /// Name of the environment variable expected to hold the backend
    /// credential. Only used in error reporting.
    pub api_key_env: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: Model::OpenAi(OpenAiModel::Gpt35Turbo),
            temperature: 0.1,
            api_key_env: "OPENAI_API_KEY".to_owned(),
        }
    }
}

/// Inbound request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub user_prompt: Option<String>,
    #[serde(default)]
    pub mask_patterns: Option<MaskPatterns>,
}

pub struct FieldConfigService<B> {
    backend: Option<B>,
    cache: Arc<dyn ResponseCache>,
    settings: GenerationSettings,
}

impl<B> FieldConfigService<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    /// `backend` is `None` when no credential was found at startup; every
    /// request is then answered with [`ServiceError::MissingCredential`].
    pub fn new(
        backend: Option<B>,
        cache: Arc<dyn ResponseCache>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            backend,
            cache,
            settings,
        }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Handle one raw request body and return the backend's JSON text.
    pub async fn generate(&self, body: &[u8]) -> Result<String, ServiceError> {
        let value: Value = serde_json::from_slice(body).map_err(ServiceError::MalformedBody)?;
        check_shape(&value).map_err(ServiceError::MalformedBody)?;
        let request = GenerateRequest::deserialize(&value).map_err(ServiceError::MalformedBody)?;

        let prompt = request
            .user_prompt
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(ServiceError::MissingPrompt)?;

        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| ServiceError::MissingCredential(self.settings.api_key_env.clone()))?;

        let key = cache_key(&value);
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(%key, "field configuration served from cache");
            return Ok(cached);
        }
        tracing::debug!(%key, "cache miss, calling generation backend");

        let placeholders = request
            .mask_patterns
            .as_ref()
            .map(MaskPatterns::resolve)
            .unwrap_or_default();
        let messages = instruction_messages(prompt, placeholders)?;

        let params = ChatCompleteParameters::new(messages, self.settings.model.clone())
            .with_temperature(self.settings.temperature)
            .with_json_object_response();

        let response = backend.chat_complete(params).await?;
        if let Some(usage) = &response.usage {
            tracing::debug!(total_tokens = usage.total_tokens, "generation backend answered");
        }

        let content = response
            .content
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or(ServiceError::EmptyCompletion)?;

        self.cache.set(key, content.clone());
        Ok(content)
    }
}

/// Serde accepts a JSON array for a struct, so the body and `maskPatterns`
/// must be rejected here when they are not objects.
fn check_shape(value: &Value) -> Result<(), serde_json::Error> {
    let Value::Object(body) = value else {
        return Err(serde_json::Error::custom("request body must be a JSON object"));
    };
    match body.get("maskPatterns") {
        None | Some(Value::Null | Value::Object(_)) => Ok(()),
        Some(_) => Err(serde_json::Error::custom("maskPatterns must be a JSON object")),
    }
}

/// The messages sent to the backend for `prompt`: the system instruction
/// followed by the prompt as the user turn.
pub fn instruction_messages(
    prompt: &str,
    placeholders: MaskPlaceholders,
) -> Result<Vec<GenericMessage>, ServiceError> {
    Ok(PromptChain::new()
        .with(FieldInstructionFragment::new(placeholders)?)
        .with(StaticFragment::new(prompt, GenericRole::User))
        .build())
}
