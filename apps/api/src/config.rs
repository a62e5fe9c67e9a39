use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Path to the candidate profile JSON (fixed facts; never invented by the LLM).
    pub profile_path: String,
    pub port: u16,
    pub rust_log: String,
    /// Timeout for the JD page fetch. One attempt per request, no retries.
    pub fetch_timeout_secs: u64,
    /// Upper bound on grey-hat skill expansion per request.
    pub max_expanded_skills: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            profile_path: std::env::var("PROFILE_PATH")
                .unwrap_or_else(|_| "profile.json".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "20".to_string())
                .parse::<u64>()
                .context("FETCH_TIMEOUT_SECS must be a number of seconds")?,
            max_expanded_skills: std::env::var("MAX_EXPANDED_SKILLS")
                .unwrap_or_else(|_| "8".to_string())
                .parse::<usize>()
                .context("MAX_EXPANDED_SKILLS must be a non-negative integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
