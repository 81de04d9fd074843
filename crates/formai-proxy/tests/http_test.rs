mod common;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{EMAIL_JSON, MockBackend, Reply, service};
use formai_proxy::router;
use serde_json::{Value, json};
use tower::util::ServiceExt;

const ROUTE: &str = "/api/generate";

fn app(backend: Option<MockBackend>) -> Router {
    router(Arc::new(service(backend)), ROUTE)
}

fn post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri(ROUTE)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn post_returns_backend_json_verbatim() {
    let app = app(Some(MockBackend::replying(EMAIL_JSON)));

    let response = app
        .oneshot(post(json!({ "userPrompt": "a required email field" }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_text(response).await, EMAIL_JSON);
}

#[tokio::test]
async fn cached_answer_is_byte_identical() {
    let backend = MockBackend::replying(EMAIL_JSON);
    let app = app(Some(backend.clone()));
    let body = r#"{"userPrompt":"email"}"#;

    let first = body_text(app.clone().oneshot(post(body)).await.unwrap()).await;
    let second = body_text(app.oneshot(post(body)).await.unwrap()).await;

    assert_eq!(first, second);
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn other_methods_are_rejected() {
    for method in ["GET", "PUT", "DELETE", "PATCH"] {
        let backend = MockBackend::replying(EMAIL_JSON);
        let app = app(Some(backend.clone()));

        let request = Request::builder()
            .uri(ROUTE)
            .method(method)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
        assert_eq!(backend.calls(), 0);
    }
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let app = app(Some(MockBackend::replying(EMAIL_JSON)));

    let request = Request::builder()
        .uri(ROUTE)
        .method("OPTIONS")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("OPTIONS"));
    let allowed = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allowed.eq_ignore_ascii_case("content-type"));
}

#[tokio::test]
async fn plain_options_is_ok() {
    let app = app(Some(MockBackend::replying(EMAIL_JSON)));

    let request = Request::builder()
        .uri(ROUTE)
        .method("OPTIONS")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn cross_origin_post_carries_allow_origin() {
    let app = app(Some(MockBackend::replying(EMAIL_JSON)));

    let request = Request::builder()
        .uri(ROUTE)
        .method("POST")
        .header(header::ORIGIN, "http://localhost:5173")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"userPrompt":"email"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn missing_prompt_is_a_bad_request() {
    let backend = MockBackend::replying(EMAIL_JSON);
    let app = app(Some(backend.clone()));

    let response = app.oneshot(post("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "\"userPrompt\" is required in the request body" })
    );
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn missing_credential_names_the_variable() {
    let app = app(None);

    let response = app.oneshot(post(r#"{"userPrompt":"CEP"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "OPENAI_API_KEY is not configured on the server" })
    );
}

#[tokio::test]
async fn backend_failure_is_a_generic_server_error() {
    let app = app(Some(MockBackend::with_reply(Reply::Fail)));

    let response = app.oneshot(post(r#"{"userPrompt":"CEP"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = body_text(response).await;
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!({ "error": "Failed to process the AI request" })
    );
    assert!(!text.contains("upstream"));
}

#[tokio::test]
async fn malformed_body_is_a_server_error() {
    let app = app(Some(MockBackend::replying(EMAIL_JSON)));

    let response = app.oneshot(post("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to process the AI request" })
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app(None);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
