// Router-level tests: full axum stack with mock-backed analyzer.
// No network, no provider account.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use reviewgauge_api::analyzer::ReviewAnalyzer;
use reviewgauge_api::rest::{router, AppState};
use reviewgauge_api::testing::{FetchFailure, MockFetcher, MockGenerator};

fn app(generator: MockGenerator, fetcher: MockFetcher) -> axum::Router {
    let analyzer = ReviewAnalyzer::new(Arc::new(generator), Arc::new(fetcher));
    router(Arc::new(AppState { analyzer }))
}

async fn post_json(app: axum::Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn health_is_unconditionally_ok() {
    let app = app(MockGenerator::new(), MockFetcher::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, json!({"status": "ok"}));
}

#[tokio::test]
async fn index_serves_the_ui_page() {
    let app = app(MockGenerator::new(), MockFetcher::new());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("<title>ReviewGauge</title>"));
}

#[tokio::test]
async fn analyze_returns_the_parsed_analysis() {
    let generator = MockGenerator::new()
        .with_response("```json\n{\"Sentiment\":\"positive\",\"Score\":8}\n```");
    let app = app(generator, MockFetcher::new());

    let (status, body) =
        post_json(app, "/analyze", json!({"review": "Great battery life"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Sentiment": "positive", "Score": 8}));
}

#[tokio::test]
async fn analyze_rejects_empty_review_without_calling_the_model() {
    let generator = MockGenerator::new();
    let calls = generator.call_log();
    let app = app(generator, MockFetcher::new());

    let (status, body) = post_json(app, "/analyze", json!({"review": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No review text provided"}));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn analyze_treats_missing_field_as_empty() {
    let app = app(MockGenerator::new(), MockFetcher::new());

    let (status, _) = post_json(app, "/analyze", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analyze_surfaces_unparseable_responses_with_the_raw_text() {
    let prose = "Here is my analysis: the review seems fine.";
    let generator = MockGenerator::new().with_response(prose);
    let app = app(generator, MockFetcher::new());

    let (status, body) = post_json(app, "/analyze", json!({"review": "ok product"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["raw_response"], json!(prose));
    assert_eq!(
        body["error"],
        json!("Failed to parse the response from the Gemini API")
    );
}

#[tokio::test]
async fn analyze_maps_provider_failures_to_500() {
    let generator = MockGenerator::new().with_error("model overloaded");
    let app = app(generator, MockFetcher::new());

    let (status, body) = post_json(app, "/analyze", json!({"review": "ok product"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("model overloaded"));
}

#[tokio::test]
async fn scrape_runs_the_two_stage_pipeline() {
    let generator = MockGenerator::new()
        .with_response("A thorough review of the Aurora X2.")
        .with_response(
            "```json\n{\"ProductName\":\"Aurora X2\",\"Score\":7,\"Review\":\"A thorough review of the Aurora X2.\"}\n```",
        );
    let fetcher = MockFetcher::new().on_page("http://example.com/p", "Aurora X2 product page");
    let app = app(generator, fetcher);

    let (status, body) = post_json(app, "/scrape", json!({"url": "http://example.com/p"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ProductName"], json!("Aurora X2"));
    assert_eq!(body["Review"], json!("A thorough review of the Aurora X2."));
}

#[tokio::test]
async fn scrape_classifies_bot_protection_as_429() {
    let fetcher = MockFetcher::new()
        .failing("http://example-shop.flipkart.com/x", FetchFailure::BotProtected);
    let app = app(MockGenerator::new(), fetcher);

    let (status, body) = post_json(
        app,
        "/scrape",
        json!({"url": "http://example-shop.flipkart.com/x"}),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["error"].as_str().unwrap().contains("bot protection"));
}

#[tokio::test]
async fn scrape_maps_invalid_url_to_400() {
    let fetcher = MockFetcher::new().failing("amazon", FetchFailure::InvalidUrl);
    let app = app(MockGenerator::new(), fetcher);

    let (status, body) = post_json(app, "/scrape", json!({"url": "amazon"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid URL format"}));
}

#[tokio::test]
async fn scrape_maps_fetch_failure_to_400() {
    let fetcher =
        MockFetcher::new().failing("http://example.com/gone", FetchFailure::FetchFailed);
    let app = app(MockGenerator::new(), fetcher);

    let (status, body) =
        post_json(app, "/scrape", json!({"url": "http://example.com/gone"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Failed to access"));
}

#[tokio::test]
async fn scrape_maps_insufficient_content_to_400() {
    let fetcher =
        MockFetcher::new().failing("http://example.com/thin", FetchFailure::InsufficientContent);
    let app = app(MockGenerator::new(), fetcher);

    let (status, body) =
        post_json(app, "/scrape", json!({"url": "http://example.com/thin"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Could not extract readable content"));
}
