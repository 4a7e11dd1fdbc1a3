mod client;
pub mod error;
pub mod normalize;
pub mod selector;
pub(crate) mod types;

pub use error::{GeminiError, Result};
pub use selector::{select_model, FALLBACK_MODEL, MODEL_CANDIDATES};

use client::GeminiHttp;
use types::GenerateRequest;

/// Handle to one Gemini model. Cheap to clone; the underlying HTTP client
/// is rebuilt per call.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    /// Point the client at a different API root. Used by tests and by the
    /// GEMINI_BASE_URL override.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn http(&self) -> GeminiHttp {
        let http = GeminiHttp::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            http.with_base_url(url)
        } else {
            http
        }
    }

    /// Run one prompt through the model and return the response text.
    pub async fn generate(&self, prompt: impl Into<String>) -> Result<String> {
        let request = GenerateRequest::user(prompt);
        let response = self.http().generate_content(&self.model, &request).await?;

        response.text().ok_or(GeminiError::EmptyResponse)
    }
}
