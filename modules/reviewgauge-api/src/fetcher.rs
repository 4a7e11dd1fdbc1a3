use std::time::Duration;

use async_trait::async_trait;
use spider_transformations::transformation::content::{
    transform_content_input, ReturnFormat, TransformConfig, TransformInput,
};
use tracing::{info, warn};
use url::Url;

use reviewgauge_common::AnalysisError;

use crate::traits::PageFetcher;

/// Extracted text is cut at this many characters before prompt embedding,
/// to stay inside the provider's input-size limits.
pub const MAX_CONTENT_CHARS: usize = 8000;

/// Extractions shorter than this are treated as unusable.
const MIN_CONTENT_CHARS: usize = 100;

/// E-commerce domains known to serve bot-protection pages. An empty
/// download from one of these is classified as bot protection rather than
/// a generic fetch failure.
const BOT_PROTECTED_DOMAINS: &[&str] =
    &["flipkart", "amazon", "meesho", "myntra", "ebay", "walmart"];

/// Reject URLs without an http/https scheme and a host before any network
/// access happens.
pub fn validate_url(url: &str) -> Result<Url, AnalysisError> {
    let parsed = Url::parse(url).map_err(|_| AnalysisError::InvalidUrl)?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AnalysisError::InvalidUrl);
    }
    if parsed.host_str().is_none() {
        return Err(AnalysisError::InvalidUrl);
    }
    Ok(parsed)
}

fn is_bot_protected_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host.split('.')
        .any(|label| BOT_PROTECTED_DOMAINS.contains(&label))
}

fn classify_download_failure(parsed: &Url) -> AnalysisError {
    let host = parsed.host_str().unwrap_or_default();
    if is_bot_protected_host(host) {
        AnalysisError::BotProtected {
            host: host.to_string(),
        }
    } else {
        AnalysisError::FetchFailed
    }
}

/// Truncate to at most `max_chars` characters, never splitting a scalar.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// --- Reqwest + Readability fetcher ---

/// Fetcher that downloads raw HTML with reqwest, then runs
/// spider_transformations Readability extraction for clean main content.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { http }
    }

    async fn download(&self, parsed: &Url) -> Result<String, AnalysisError> {
        let response = match self.http.get(parsed.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(url = %parsed, error = %e, "Download failed");
                return Err(classify_download_failure(parsed));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = %parsed, status = status.as_u16(), "Download returned error status");
            return Err(classify_download_failure(parsed));
        }

        let html = response.text().await.unwrap_or_default();
        if html.trim().is_empty() {
            warn!(url = %parsed, "Download returned empty body");
            return Err(classify_download_failure(parsed));
        }

        Ok(html)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, AnalysisError> {
        let parsed = validate_url(url)?;

        info!(url, fetcher = "http", "Fetching URL");

        let html = self.download(&parsed).await?;

        let config = TransformConfig {
            readability: true,
            main_content: true,
            return_format: ReturnFormat::Markdown,
            filter_images: true,
            filter_svg: true,
            clean_html: true,
        };
        let input = TransformInput {
            url: Some(&parsed),
            content: html.as_bytes(),
            screenshot_bytes: None,
            encoding: None,
            selector_config: None,
            ignore_tags: None,
        };

        let text = transform_content_input(input, &config);
        let text = text.trim();

        if text.chars().count() < MIN_CONTENT_CHARS {
            warn!(url, chars = text.chars().count(), "Insufficient content after extraction");
            return Err(AnalysisError::InsufficientContent);
        }

        let truncated = truncate_chars(text, MAX_CONTENT_CHARS);
        info!(url, chars = truncated.chars().count(), "Extracted content");

        Ok(truncated.to_string())
    }

    fn name(&self) -> &str {
        "http"
    }
}
