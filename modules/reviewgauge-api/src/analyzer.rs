use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use gemini_client::normalize;
use reviewgauge_common::AnalysisError;

use crate::prompts;
use crate::traits::{PageFetcher, TextGenerator};

/// Review text generated from scraped page content; the typed hand-off
/// between the two LLM calls of the scrape pipeline.
pub struct SynthesizedReview(pub String);

/// Orchestrates the two user-facing operations. Holds its dependencies as
/// trait objects: constructed once at startup, shared read-only across
/// requests.
pub struct ReviewAnalyzer {
    generator: Arc<dyn TextGenerator>,
    fetcher: Arc<dyn PageFetcher>,
}

impl ReviewAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { generator, fetcher }
    }

    /// Analyze user-supplied review text: one LLM call, then JSON
    /// normalization. The result is passed through unvalidated beyond
    /// being well-formed JSON.
    pub async fn analyze_review(&self, review: &str) -> Result<Value, AnalysisError> {
        if review.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        info!(chars = review.chars().count(), "Analyzing review");

        let prompt = prompts::analysis_prompt(review);
        let response = self.generate(&prompt).await?;

        self.parse_response(&response)
    }

    /// Scrape a product page, synthesize a review from the extracted text,
    /// then analyze that review. Two sequential LLM calls; a failure at
    /// either stage aborts with no partial result.
    pub async fn scrape_and_review(&self, url: &str) -> Result<Value, AnalysisError> {
        let content = self.fetcher.fetch_text(url).await?;
        let review = self.synthesize_review(&content).await?;

        let prompt = prompts::scrape_analysis_prompt(&review.0);
        let response = self.generate(&prompt).await?;

        self.parse_response(&response)
    }

    async fn synthesize_review(
        &self,
        content: &str,
    ) -> Result<SynthesizedReview, AnalysisError> {
        let prompt = prompts::synthesis_prompt(content);
        let review = self.generate(&prompt).await?;

        info!(chars = review.chars().count(), "Synthesized review");
        Ok(SynthesizedReview(review))
    }

    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        self.generator
            .generate(prompt)
            .await
            .map_err(|e| AnalysisError::ModelUnavailable(e.to_string()))
    }

    fn parse_response(&self, response: &str) -> Result<Value, AnalysisError> {
        normalize::normalize(response).map_err(|e| {
            warn!(
                raw_chars = e.raw.chars().count(),
                extracted = %e.extracted,
                "Model response was not valid JSON"
            );
            AnalysisError::ResponseParse {
                raw: e.raw,
                extracted: e.extracted,
            }
        })
    }
}
