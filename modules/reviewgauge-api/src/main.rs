use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reviewgauge_api::analyzer::ReviewAnalyzer;
use reviewgauge_api::fetcher::HttpFetcher;
use reviewgauge_api::rest::{self, AppState};
use reviewgauge_common::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("reviewgauge_api=info".parse()?)
                .add_directive("gemini_client=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    // Model selection happens once, here. Request handlers receive the
    // committed handle through the shared state; nothing re-probes later.
    let model =
        gemini_client::select_model(&config.gemini_api_key, config.gemini_base_url.as_deref())
            .await;
    info!(model = model.model(), "Using Gemini model");

    let analyzer = ReviewAnalyzer::new(Arc::new(model), Arc::new(HttpFetcher::new()));
    let state = Arc::new(AppState { analyzer });

    let app = rest::router(state).layer(
        tower_http::trace::TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            },
        ),
    );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("ReviewGauge API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
