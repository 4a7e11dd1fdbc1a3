use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Gemini
    pub gemini_api_key: String,
    /// Override for the Gemini API root; mainly for tests.
    pub gemini_base_url: Option<String>,

    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Session cookie signing
    pub session_secret: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing — the
    /// service refuses to start with no API key or session secret.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: required_env("GEMINI_API_KEY"),
            gemini_base_url: env::var("GEMINI_BASE_URL").ok(),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
            session_secret: required_env("SESSION_SECRET"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
