//! Startup model selection.
//!
//! Gemini model availability shifts between API revisions, so the service
//! probes a fixed preference-ordered list at startup and commits to the
//! first identifier that answers a trivial prompt. Selection happens once
//! per process; there is no re-probe or health check after startup, so a
//! transient failure here downgrades the process until restart.

use tracing::{error, info, warn};

use crate::GeminiClient;

/// Candidate model identifiers, in order of preference.
pub const MODEL_CANDIDATES: &[&str] = &[
    "models/gemini-1.5-flash",
    "models/chat-bison-001",
    "models/text-bison-001",
];

/// Committed unverified when every candidate fails its smoke test.
pub const FALLBACK_MODEL: &str = "models/gemini-1.5-flash-latest";

const SMOKE_PROMPT: &str = "Hello";

fn build(api_key: &str, model: &str, base_url: Option<&str>) -> GeminiClient {
    let client = GeminiClient::new(api_key, model);
    match base_url {
        Some(url) => client.with_base_url(url),
        None => client,
    }
}

/// Probe each candidate with one smoke prompt and commit to the first that
/// answers. Each candidate gets exactly one attempt, no backoff. If all
/// fail, the fallback identifier is committed without verification and
/// later calls may fail at call time.
pub async fn select_model(api_key: &str, base_url: Option<&str>) -> GeminiClient {
    for &candidate in MODEL_CANDIDATES {
        info!(model = candidate, "Probing model candidate");
        let client = build(api_key, candidate, base_url);

        match client.generate(SMOKE_PROMPT).await {
            Ok(_) => {
                info!(model = candidate, "Committed model");
                return client;
            }
            Err(e) => {
                warn!(model = candidate, error = %e, "Model candidate failed smoke test");
            }
        }
    }

    error!(
        model = FALLBACK_MODEL,
        "All model candidates failed, committing fallback unverified"
    );
    build(api_key, FALLBACK_MODEL, base_url)
}
