use std::{path::Path, time::Duration};

use config::{Config, ConfigError, Environment, File};
use formai_core::model::Model;
use formai_openai::OpenAiAdapterBuilder;
use serde::Deserialize;

use crate::{cli::Cli, service::GenerationSettings};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "formai.toml";

/// Service configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file,
/// `FORMAI__SECTION__KEY` environment variables, CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Path the generation endpoint is mounted on.
    pub route: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub model: String,
    pub temperature: f64,
    /// Environment variable holding the backend API key.
    pub api_key_env: String,
    /// OpenAI-compatible base URL, e.g. `http://localhost:11434/v1`.
    #[serde(default)]
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load from `path` (optional), then apply CLI overrides.
    pub fn new_with_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = Self::load(&cli.config)?;

        if let Some(host) = &cli.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            settings.server.port = port;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Load defaults, the optional file at `path` and the environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.route", "/api/generate")?
            .set_default("backend.model", "gpt-3.5-turbo")?
            .set_default("backend.temperature", 0.1)?
            .set_default("backend.api_key_env", "OPENAI_API_KEY")?
            .set_default("backend.timeout_seconds", 30)?
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("FORMAI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !self.server.route.starts_with('/') {
            errors.push(format!("server.route must start with '/': {:?}", self.server.route));
        }
        if !(0.0..=2.0).contains(&self.backend.temperature) {
            errors.push(format!(
                "backend.temperature must be between 0 and 2: {}",
                self.backend.temperature
            ));
        }
        if self.backend.model.trim().is_empty() {
            errors.push("backend.model must not be empty".to_owned());
        }
        if self.backend.api_key_env.trim().is_empty() {
            errors.push("backend.api_key_env must not be empty".to_owned());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(format!(
                "configuration validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }

    pub fn generation(&self) -> GenerationSettings {
        GenerationSettings {
            model: Model::parse(&self.backend.model),
            temperature: self.backend.temperature,
            api_key_env: self.backend.api_key_env.clone(),
        }
    }
}

impl BackendSettings {
    /// Adapter builder reading the key from [`Self::api_key_env`].
    pub fn adapter_builder(&self) -> OpenAiAdapterBuilder {
        let builder = OpenAiAdapterBuilder::from_env_var(&self.api_key_env)
            .with_timeout(Duration::from_secs(self.timeout_seconds));

        match &self.base_url {
            Some(base_url) => builder.with_base_url(base_url),
            None => builder,
        }
    }
}
