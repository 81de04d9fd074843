//! HTTP service turning a natural-language field description into a
//! field configuration.
//!
//! The service exposes a single generation endpoint. Each request is
//! validated, looked up in an injected [`ResponseCache`] and, on a miss,
//! forwarded once to an OpenAI-compatible backend together with an
//! instruction describing the field configuration schema and the caller's
//! mask placeholders. Successful answers are cached and returned verbatim.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use formai_openai::OpenAiAdapterBuilder;
//! use formai_proxy::{FieldConfigService, GenerationSettings, InMemoryCache, router};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let backend = OpenAiAdapterBuilder::new_from_env().build().ok();
//! let service = FieldConfigService::new(
//!     backend,
//!     Arc::new(InMemoryCache::new()),
//!     GenerationSettings::default(),
//! );
//!
//! let app = router(Arc::new(service), "/api/generate");
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod error;
pub mod http;
pub mod service;
pub mod settings;

pub use cache::{InMemoryCache, ResponseCache};
pub use error::ServiceError;
pub use http::router;
pub use service::{FieldConfigService, GenerationSettings};
pub use settings::Settings;
