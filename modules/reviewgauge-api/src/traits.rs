// Trait abstractions for the analysis pipeline dependencies.
//
// TextGenerator — one prompt in, one response text out. Implemented by
//   GeminiClient in production and by MockGenerator in tests.
// PageFetcher — URL in, extracted readable text out, with fetch failures
//   already classified into the AnalysisError taxonomy.

use anyhow::Result;
use async_trait::async_trait;

use gemini_client::GeminiClient;
use reviewgauge_common::AnalysisError;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one prompt through the model and return the response text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(GeminiClient::generate(self, prompt).await?)
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page and return its extracted readable text, truncated to
    /// the prompt-embedding limit.
    async fn fetch_text(&self, url: &str) -> Result<String, AnalysisError>;

    fn name(&self) -> &str;
}
