use std::{env, sync::Arc, time::Duration};

use formai_core::error::{FormAiError, Result};
use reqwest::Client as HttpClient;

use crate::client::{DEFAULT_TIMEOUT, OpenAiClient};
use crate::error::OpenAiError;

/// Environment variable read by [`OpenAiAdapterBuilder::new_from_env`].
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`formai_core::provider::ChatCompletionProvider`].
///
/// * stores the API key and base URL,
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * is built through [`OpenAiAdapterBuilder`] so callers don’t have to
///   juggle `Option<String>` manually.
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn client(&self) -> &OpenAiClient {
        &self.client
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use formai_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Debug)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) api_key_env: String,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Duration,
}

impl Default for OpenAiAdapterBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_owned(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the key from `OPENAI_API_KEY`.
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self::from_env_var(DEFAULT_API_KEY_ENV)
    }

    /// Load the key from an arbitrary environment variable. Empty values
    /// count as missing.
    pub fn from_env_var(name: impl Into<String>) -> Self {
        let api_key_env = name.into();
        Self {
            api_key: env::var(&api_key_env).ok().filter(|key| !key.trim().is_empty()),
            api_key_env,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at an OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Transport-level timeout applied by the `reqwest` client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`FormAiError::BackendNotConfigured`] – if the API key is missing.
    /// * [`FormAiError::Backend`] – if the HTTP client cannot be created.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .ok_or(FormAiError::BackendNotConfigured(self.api_key_env))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .build()
            .map_err(OpenAiError::from)?;

        Ok(OpenAiAdapter {
            client: Arc::new(OpenAiClient::with_http(api_key, http, self.base_url)),
        })
    }
}
