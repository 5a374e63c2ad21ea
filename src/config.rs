use anyhow::Result;

use crate::oracle::DEFAULT_MODEL;

/// Oracle configuration loaded from environment variables.
///
/// Only the API key is required; base URL and model have sensible defaults
/// so local development needs a single variable.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub openai_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_api_base: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    use anyhow::Context;
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
