use thiserror::Error;

/// Everything that can go wrong between accepting a request and returning
/// an analysis. Each variant maps to one user-facing message and HTTP
/// status in the web layer; none are retried automatically.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No review text provided")]
    EmptyInput,

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Bot protection detected on {host}")]
    BotProtected { host: String },

    #[error("Failed to access this URL")]
    FetchFailed,

    #[error("Could not extract readable content from this URL")]
    InsufficientContent,

    #[error("Failed to parse the response from the Gemini API")]
    ResponseParse {
        /// The provider's original response text, surfaced for diagnosis.
        raw: String,
        /// What was left after fence stripping, i.e. what the parser saw.
        extracted: String,
    },

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
