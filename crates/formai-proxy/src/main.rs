use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use formai_proxy::{FieldConfigService, InMemoryCache, Settings, cli::Cli, router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    let backend = match settings.backend.adapter_builder().build() {
        Ok(adapter) => Some(adapter),
        Err(err) => {
            warn!(
                error = %err,
                "generation backend unavailable, requests will fail until {} is set",
                settings.backend.api_key_env
            );
            None
        }
    };

    let service = FieldConfigService::new(
        backend,
        Arc::new(InMemoryCache::new()),
        settings.generation(),
    );
    info!(
        model = %service.settings().model,
        route = %settings.server.route,
        "field service ready"
    );

    let app = router(Arc::new(service), &settings.server.route);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
