use std::time::Duration;

use tracing::debug;

use crate::error::{GeminiError, Result};
use crate::types::*;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

pub(crate) struct GeminiHttp {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
}

impl GeminiHttp {
    pub fn new(api_key: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            http,
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// POST {base}/v1beta/{model}:generateContent. The model identifier
    /// already carries its "models/" prefix.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse> {
        let url = format!(
            "{}/v1beta/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        debug!(model, "Gemini generateContent request");

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
