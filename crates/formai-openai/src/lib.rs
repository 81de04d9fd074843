//! OpenAI backend for the formai field service.
//!
//! [`OpenAiAdapter`] implements
//! [`ChatCompletionProvider`](formai_core::provider::ChatCompletionProvider)
//! on top of the `/chat/completions` endpoint. Build it with
//! [`OpenAiAdapterBuilder`]; a missing API key surfaces from `build()`.
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{DEFAULT_API_KEY_ENV, OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::OpenAiClient;
pub mod api_v1;
mod client;
pub mod error;
