use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    model::Model,
};

/// Boxed future returned by [`ChatCompletionProvider::chat_complete`].
pub type ChatCompleteFuture<'p> =
    Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>>;

/// A **backend** turns a chat prompt into a network call to a concrete provider
/// (OpenAI, a self-hosted compatible server, a test double, …) and hands back
/// the first answer message.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One async-ish method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip. There is no retry at this layer.
///
/// The method returns a boxed future so we stay free of `async_trait`.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute the chat prompt and return the provider's reply.
    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompleteFuture<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub response_format: Option<serde_json::Value>,
}

impl<M: Clone> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            response_format: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_response_format(mut self, response_format: serde_json::Value) -> Self {
        self.response_format = Some(response_format);
        self
    }

    /// Ask for a bare JSON object answer (`{"type": "json_object"}`).
    pub fn with_json_object_response(self) -> Self {
        self.with_response_format(serde_json::json!({ "type": "json_object" }))
    }
}
