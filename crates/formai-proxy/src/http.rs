use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use formai_core::{generic::GenericMessage, provider::ChatCompletionProvider};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::ServiceError, service::FieldConfigService};

/// Build the HTTP surface of the field service.
///
/// * `POST {route}` – generate (or serve from cache) a field configuration,
/// * `OPTIONS {route}` – empty `200`, CORS pre-flights are answered by the
///   CORS layer,
/// * any other verb on `{route}` – `405` with a JSON error envelope,
/// * `GET /health` – liveness check.
///
/// `route` must start with `/`.
pub fn router<B>(service: Arc<FieldConfigService<B>>, route: &str) -> Router
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    Router::new()
        .route(
            route,
            post(generate::<B>)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .with_state(service)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

async fn generate<B>(
    State(service): State<Arc<FieldConfigService<B>>>,
    body: Bytes,
) -> Result<Response, ServiceError>
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let config = service.generate(&body).await?;
    Ok(([(CONTENT_TYPE, "application/json")], config).into_response())
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> ServiceError {
    ServiceError::MethodNotAllowed
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
