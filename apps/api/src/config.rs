use std::path::PathBuf;

use anyhow::{Context, Result};

/// Request bodies are accepted up to this ceiling so long resumes and job
/// descriptions survive the JSON extractor.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Application configuration loaded from environment variables once at
/// startup and passed into components by parameter. Business logic never
/// reads ambient process state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the completion service. Empty in mock mode.
    pub openai_api_key: String,
    pub port: u16,
    /// When set, the completion backend is the canned stub: no API calls,
    /// no billing.
    pub mock_mode: bool,
    /// Override for the headless browser executable.
    pub chrome_path: Option<PathBuf>,
    /// Override for the headless browser's profile/cache directory.
    pub chrome_user_data_dir: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mock_mode = env_flag("MOCK_MODE")?;

        let openai_api_key = if mock_mode {
            std::env::var("OPENAI_API_KEY").unwrap_or_default()
        } else {
            require_env("OPENAI_API_KEY")?
        };

        Ok(Config {
            openai_api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            mock_mode,
            chrome_path: std::env::var("CHROME_PATH").ok().map(PathBuf::from),
            chrome_user_data_dir: std::env::var("CHROME_USER_DATA_DIR")
                .ok()
                .map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses an optional boolean flag: absent means false, otherwise "true"/"1"
/// and "false"/"0" (case-insensitive) are accepted.
fn env_flag(key: &str) -> Result<bool> {
    match std::env::var(key) {
        Err(_) => Ok(false),
        Ok(raw) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            _ => anyhow::bail!("{key} must be one of: true, false, 1, 0"),
        },
    }
}
