//! Model identifiers used throughout the **formai** workspace.
//!
//! Well-known models get an enum variant so application code never has to
//! spell `"gpt-4o-mini"`; anything else travels as [`Model::Custom`] and is
//! forwarded to the provider verbatim. Each provider crate maps the variants
//! onto its own naming scheme.
//!
//! # Example
//!
//! ```rust
//! use formai_core::model::{Model, OpenAiModel};
//!
//! assert_eq!(Model::parse("gpt-4o-mini"), Model::OpenAi(OpenAiModel::Gpt4oMini));
//! assert_eq!(Model::parse("my-finetune"), Model::Custom("my-finetune".into()));
//! ```

use std::fmt::Display;

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in OpenAI models (chat completion API).
    OpenAi(OpenAiModel),
    /// Any model name not covered by a dedicated enum, e.g. a self-hosted
    /// model behind an OpenAI-compatible endpoint.
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt35Turbo,
    Gpt4o,
    Gpt4oMini,
    Gpt41Mini,
}

impl OpenAiModel {
    pub const ALL: [OpenAiModel; 4] = [
        OpenAiModel::Gpt35Turbo,
        OpenAiModel::Gpt4o,
        OpenAiModel::Gpt4oMini,
        OpenAiModel::Gpt41Mini,
    ];

    /// Canonical API name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenAiModel::Gpt35Turbo => "gpt-3.5-turbo",
            OpenAiModel::Gpt4o => "gpt-4o",
            OpenAiModel::Gpt4oMini => "gpt-4o-mini",
            OpenAiModel::Gpt41Mini => "gpt-4.1-mini",
        }
    }
}

impl Model {
    /// Map a configured model name onto a [`Model`]. Never fails: unknown
    /// names become [`Model::Custom`].
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        OpenAiModel::ALL
            .into_iter()
            .find(|m| m.as_str() == name)
            .map(Model::OpenAi)
            .unwrap_or_else(|| Model::Custom(name.to_owned()))
    }
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Model::OpenAi(model) => f.write_str(model.as_str()),
            Model::Custom(name) => f.write_str(name),
        }
    }
}
