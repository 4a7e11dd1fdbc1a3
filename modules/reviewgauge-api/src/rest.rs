use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use reviewgauge_common::AnalysisError;

use crate::analyzer::ReviewAnalyzer;

pub struct AppState {
    pub analyzer: ReviewAnalyzer,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .route("/scrape", post(scrape))
        .route("/health", get(health))
        .with_state(state)
}

const INDEX_HTML: &str = include_str!("../static/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Liveness only; does not reflect model-selection health.
async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

// --- Request bodies ---

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    review: String,
}

#[derive(Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    url: String,
}

// --- Handlers ---

async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Response {
    match state.analyzer.analyze_review(&body.review).await {
        Ok(analysis) => Json(analysis).into_response(),
        Err(e) => error_response(e),
    }
}

async fn scrape(State(state): State<Arc<AppState>>, Json(body): Json<ScrapeRequest>) -> Response {
    match state.analyzer.scrape_and_review(&body.url).await {
        Ok(analysis) => Json(analysis).into_response(),
        Err(e) => error_response(e),
    }
}

// --- Error mapping ---

fn error_response(err: AnalysisError) -> Response {
    let (status, body) = match &err {
        AnalysisError::EmptyInput => (
            StatusCode::BAD_REQUEST,
            json!({"error": "No review text provided"}),
        ),
        AnalysisError::InvalidUrl => (
            StatusCode::BAD_REQUEST,
            json!({"error": "Invalid URL format"}),
        ),
        AnalysisError::BotProtected { host } => {
            warn!(%host, "Bot protection encountered");
            (
                StatusCode::TOO_MANY_REQUESTS,
                json!({"error": "This e-commerce website has bot protection that prevents scraping. Please try one of our sample URLs or another non-e-commerce website."}),
            )
        }
        AnalysisError::FetchFailed => (
            StatusCode::BAD_REQUEST,
            json!({"error": "Failed to access this URL. Please try one of our sample URLs like Firefox Privacy, Smartphone Wiki, or Sony Headphones."}),
        ),
        AnalysisError::InsufficientContent => (
            StatusCode::BAD_REQUEST,
            json!({"error": "Could not extract readable content from this URL. The page might not have enough text content or might be protected."}),
        ),
        AnalysisError::ResponseParse { raw, extracted } => {
            warn!(
                raw_chars = raw.chars().count(),
                extracted_chars = extracted.chars().count(),
                "Returning raw model response for diagnosis"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to parse the response from the Gemini API",
                    "raw_response": raw,
                }),
            )
        }
        AnalysisError::ModelUnavailable(message) => {
            warn!(error = %message, "Model call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": format!("An error occurred: {message}")}),
            )
        }
        AnalysisError::Unexpected(e) => {
            warn!(error = %e, "Unexpected failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": format!("An error occurred: {e}")}),
            )
        }
    };

    (status, Json(body)).into_response()
}
