//! Integration tests for the fact-check server

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use factlens_channel::{embed_result, InMemoryResultStore, ResultChannel};
use factlens_domain::{FactCheckResult, Rating};
use factlens_extractor::FactChecker;
use factlens_gatekeeper::Gatekeeper;
use factlens_llm::{MockProvider, PROMPT_VERSION};
use factlens_server::handlers::{create_router, AppState, ErrorResponse, HealthCheckResponse};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot
use url::Url;

const WELL_FORMED: &str = r#"{"rating":"False","explanation":"The moon is rock.","analyzedText":"**The moon is made of cheese.**","verificationSources":["https://nasa.gov/moon"]}"#;

/// Helper to create test application state
fn create_test_state(provider: MockProvider) -> AppState<MockProvider> {
    AppState {
        checker: Arc::new(FactChecker::new(provider, Gatekeeper::new())),
        channel: ResultChannel::new(Arc::new(InMemoryResultStore::new())),
        public_url: Url::parse("http://localhost:3000").unwrap(),
    }
}

fn post_fact_check(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/fact-check")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_router(create_test_state(MockProvider::default()));

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthCheckResponse = body_json(response).await;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.model, "mock");
    assert_eq!(health.prompt_version, PROMPT_VERSION);
}

#[tokio::test]
async fn test_fact_check_well_formed() {
    let app = create_router(create_test_state(MockProvider::new(WELL_FORMED)));

    let response = send(&app, post_fact_check(r#"{"text": "The moon is made of cheese."}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let result: FactCheckResult = body_json(response).await;
    assert_eq!(result.rating, Rating::False);
    assert_eq!(result.explanation, "The moon is rock.");
    assert_eq!(result.verification_sources, vec!["https://nasa.gov/moon"]);
}

#[tokio::test]
async fn test_fact_check_publishes_to_results() {
    let app = create_router(create_test_state(MockProvider::new(WELL_FORMED)));

    let response = send(&app, post_fact_check(r#"{"text": "The moon is made of cheese."}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get("/results")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let stored: FactCheckResult = body_json(response).await;
    assert_eq!(stored.rating, Rating::False);
}

#[tokio::test]
async fn test_fact_check_fenced_response() {
    let raw = format!("Here is my analysis:\n```json\n{}\n```\nThanks!", WELL_FORMED);
    let app = create_router(create_test_state(MockProvider::new(raw)));

    let response = send(&app, post_fact_check(r#"{"url": "https://example.com/moon"}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let result: FactCheckResult = body_json(response).await;
    assert_eq!(result.rating, Rating::False);
}

#[tokio::test]
async fn test_fact_check_unparseable_response_falls_back() {
    let app = create_router(create_test_state(MockProvider::new("I cannot help with that.")));

    let response = send(&app, post_fact_check(r#"{"text": "The moon is made of cheese."}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let result: FactCheckResult = body_json(response).await;
    assert_eq!(result.rating, Rating::Unverifiable);
    assert_eq!(result.analyzed_text, "The moon is made of cheese.");
    assert!(result.verification_sources.is_empty());
}

#[tokio::test]
async fn test_fact_check_empty_request() {
    let state = create_test_state(MockProvider::new(WELL_FORMED));
    let checker = Arc::clone(&state.checker);
    let app = create_router(state);

    for body in [
        r#"{}"#,
        r#"{"text": "", "images": []}"#,
        r#"{"text": "   "}"#,
    ] {
        let response = send(&app, post_fact_check(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);

        let error: ErrorResponse = body_json(response).await;
        assert_eq!(
            error.error,
            "Either text, URL, or images must be provided for fact-checking"
        );
        assert!(error.details.is_none());
    }

    assert_eq!(checker.provider().call_count(), 0);
}

#[tokio::test]
async fn test_fact_check_upstream_failure() {
    let app = create_router(create_test_state(MockProvider::failing("HTTP 503: overloaded")));

    let response = send(&app, post_fact_check(r#"{"text": "claim"}"#)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorResponse = body_json(response).await;
    assert!(error.error.contains("overloaded"));
    assert_eq!(
        error.details.as_deref(),
        Some("Failed to process fact-check request")
    );

    let response = send(&app, get("/results")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_preflight_with_origin() {
    let app = create_router(create_test_state(MockProvider::default()));

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/fact-check")
        .header("origin", "chrome-extension://abcdef")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type"
    );
}

#[tokio::test]
async fn test_results_link_is_absorbed_and_stripped() {
    let app = create_router(create_test_state(MockProvider::default()));

    let result = FactCheckResult {
        rating: Rating::Misleading,
        explanation: "Partly true & partly not.".to_string(),
        analyzed_text: "**Prices doubled** in 2024".to_string(),
        verification_sources: vec!["https://example.com/a?x=1&y=2".to_string()],
    };
    let link = Url::parse(&embed_result("http://localhost:3000/results?tab=1", &result).unwrap()).unwrap();
    let path_and_query = format!("{}?{}", link.path(), link.query().unwrap());

    let response = send(&app, get(&path_and_query)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/results?tab=1");

    let response = send(&app, get("/results")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let stored: FactCheckResult = body_json(response).await;
    assert_eq!(stored, result);
}

#[tokio::test]
async fn test_results_unreadable_link_is_dropped() {
    let app = create_router(create_test_state(MockProvider::default()));

    let response = send(&app, get("/results?extensionData=%7Bnot-json")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/results");

    let response = send(&app, get("/results")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.error, "No fact-check result available");
}

#[tokio::test]
async fn test_clear_results() {
    let app = create_router(create_test_state(MockProvider::new(WELL_FORMED)));

    send(&app, post_fact_check(r#"{"text": "The moon is made of cheese."}"#)).await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/results")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get("/results")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_last_write_wins() {
    let mut provider = MockProvider::new(WELL_FORMED);
    provider.add_response(
        "Water is wet.",
        r#"{"rating":"True","explanation":"It is.","analyzedText":"**Water is wet.**"}"#,
    );
    let app = create_router(create_test_state(provider));

    send(&app, post_fact_check(r#"{"text": "The moon is made of cheese."}"#)).await;
    send(&app, post_fact_check(r#"{"text": "Water is wet."}"#)).await;

    let stored: FactCheckResult = body_json(send(&app, get("/results")).await).await;
    assert_eq!(stored.rating, Rating::True);
}
