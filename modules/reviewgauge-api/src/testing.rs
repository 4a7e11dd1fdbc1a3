// Test mocks for the analysis pipeline.
//
// Two mocks matching the two trait boundaries:
// - MockGenerator (TextGenerator) — scripted response queue, records every
//   prompt it receives
// - MockFetcher (PageFetcher) — HashMap-based URL→text, with scripted
//   failure classifications
//
// No network, no provider account. `cargo test` in seconds.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;

use reviewgauge_common::AnalysisError;

use crate::traits::{PageFetcher, TextGenerator};

// ---------------------------------------------------------------------------
// MockGenerator
// ---------------------------------------------------------------------------

/// Scripted text generator. Responses are consumed in order; running out of
/// script is an error. Every prompt is recorded in the shared call log.
pub struct MockGenerator {
    responses: Mutex<VecDeque<Result<String, String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Handle to the prompt log, usable after the mock moves into an Arc.
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => bail!(message),
            None => bail!("MockGenerator ran out of scripted responses"),
        }
    }
}

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Which classified failure a scripted fetch should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    InvalidUrl,
    BotProtected,
    FetchFailed,
    InsufficientContent,
}

/// HashMap-based page fetcher. Returns `Unexpected` for unregistered URLs.
/// Builder pattern: `.on_page()`, `.failing()`.
pub struct MockFetcher {
    pages: HashMap<String, String>,
    failures: HashMap<String, FetchFailure>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            failures: HashMap::new(),
        }
    }

    pub fn on_page(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.insert(url.into(), text.into());
        self
    }

    pub fn failing(mut self, url: impl Into<String>, failure: FetchFailure) -> Self {
        self.failures.insert(url.into(), failure);
        self
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, AnalysisError> {
        if let Some(failure) = self.failures.get(url) {
            let host = url::Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| "unknown".to_string());

            return Err(match failure {
                FetchFailure::InvalidUrl => AnalysisError::InvalidUrl,
                FetchFailure::BotProtected => AnalysisError::BotProtected { host },
                FetchFailure::FetchFailed => AnalysisError::FetchFailed,
                FetchFailure::InsufficientContent => AnalysisError::InsufficientContent,
            });
        }

        if let Some(text) = self.pages.get(url) {
            return Ok(text.clone());
        }

        Err(AnalysisError::Unexpected(anyhow!(
            "MockFetcher has no scripted page for {url}"
        )))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
