use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use numclass::config::CorsOrigin;
use numclass::facts::StaticFactProvider;
use numclass::http::{create_router, AppState};

fn test_app() -> Router {
    let state = AppState::new(Arc::new(StaticFactProvider::new("A fixed test fact.")));
    create_router(state, CorsOrigin::Any)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_classify_armstrong_number() {
    let (status, body) = get_json(test_app(), "/api/classify-number?number=153").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "number": 153,
            "is_prime": false,
            "is_perfect": false,
            "properties": ["armstrong", "odd"],
            "digit_sum": 9,
            "fun_fact": "A fixed test fact."
        })
    );
}

#[tokio::test]
async fn test_classify_even_number() {
    let (status, body) = get_json(test_app(), "/api/classify-number?number=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["properties"], serde_json::json!(["even"]));
    assert_eq!(body["is_prime"], false);
    assert_eq!(body["digit_sum"], 4);
}

#[tokio::test]
async fn test_classify_prime_and_perfect_fields() {
    let (_, body) = get_json(test_app(), "/api/classify-number?number=7").await;
    assert_eq!(body["is_prime"], true);
    assert_eq!(body["is_perfect"], false);

    let (_, body) = get_json(test_app(), "/api/classify-number?number=28").await;
    assert_eq!(body["is_prime"], false);
    assert_eq!(body["is_perfect"], true);
}

#[tokio::test]
async fn test_classify_negative_number() {
    let (status, body) = get_json(test_app(), "/api/classify-number?number=-7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], -7);
    assert_eq!(body["is_prime"], false);
    assert_eq!(body["is_perfect"], false);
    assert_eq!(body["properties"], serde_json::json!(["armstrong", "odd"]));
    assert_eq!(body["digit_sum"], 7);
}

#[tokio::test]
async fn test_classify_non_integer_returns_400() {
    let (status, body) = get_json(test_app(), "/api/classify-number?number=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"number": "abc", "error": true}));
}

#[tokio::test]
async fn test_classify_float_returns_400() {
    let (status, body) = get_json(test_app(), "/api/classify-number?number=3.5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["number"], "3.5");
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_classify_missing_parameter_returns_400() {
    let (status, body) = get_json(test_app(), "/api/classify-number").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"number": null, "error": true}));
}

#[tokio::test]
async fn test_classify_trims_whitespace() {
    let (status, body) = get_json(test_app(), "/api/classify-number?number=%20153%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 153);
}

#[tokio::test]
async fn test_fun_fact_always_non_empty() {
    let (_, body) = get_json(test_app(), "/api/classify-number?number=0").await;
    assert!(!body["fun_fact"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get_json(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
