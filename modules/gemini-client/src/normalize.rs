//! Normalization of model output into JSON.
//!
//! Gemini inconsistently wraps structured output in Markdown code fences.
//! The classifier below handles the three shapes seen in practice (a
//! json-tagged fence, a generic fence, bare text) without a full Markdown
//! parser.

use thiserror::Error;

const TAGGED_FENCE: &str = "```json";
const FENCE: &str = "```";

/// The model's response could not be parsed as JSON. Carries both the
/// original response and the post-extraction string so callers can surface
/// a diagnostic instead of a bare failure.
#[derive(Debug, Error)]
#[error("Failed to parse model response as JSON")]
pub struct NormalizeError {
    pub raw: String,
    pub extracted: String,
}

/// Which part of a model response should be fed to the JSON parser.
/// First match wins: a tagged fence beats a generic fence beats raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FencedPayload<'a> {
    /// Interior of a ```json fenced block.
    Tagged(&'a str),
    /// Interior of the first generic ``` fence pair.
    Generic(&'a str),
    /// No fences; the whole text.
    Raw(&'a str),
}

impl<'a> FencedPayload<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            FencedPayload::Tagged(s) | FencedPayload::Generic(s) | FencedPayload::Raw(s) => s,
        }
    }
}

pub fn classify(text: &str) -> FencedPayload<'_> {
    if let Some(start) = text.find(TAGGED_FENCE) {
        let rest = &text[start + TAGGED_FENCE.len()..];
        let end = rest.find(FENCE).unwrap_or(rest.len());
        return FencedPayload::Tagged(&rest[..end]);
    }
    if let Some(start) = text.find(FENCE) {
        let rest = &text[start + FENCE.len()..];
        let end = rest.find(FENCE).unwrap_or(rest.len());
        return FencedPayload::Generic(&rest[..end]);
    }
    FencedPayload::Raw(text)
}

/// Strip fences, collapse newlines to spaces, trim, and parse as JSON.
pub fn normalize(raw: &str) -> Result<serde_json::Value, NormalizeError> {
    let extracted = classify(raw).as_str().replace('\n', " ");
    let extracted = extracted.trim();

    serde_json::from_str(extracted).map_err(|_| NormalizeError {
        raw: raw.to_string(),
        extracted: extracted.to_string(),
    })
}
