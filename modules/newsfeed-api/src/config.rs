use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_TAVILY_BASE_URL: &str = "https://api.tavily.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Upstream credentials. Absence is reported per request, not at startup.
    pub tavily_api_key: Option<String>,
    pub gemini_api_key: Option<String>,

    // Upstream endpoints
    pub gemini_model: String,
    pub tavily_base_url: String,

    // Web server
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            tavily_api_key: optional_env("TAVILY_API_KEY"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            tavily_base_url: optional_env("TAVILY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TAVILY_BASE_URL.to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("API_PORT must be a number")?,
        })
    }

    /// Config with both credentials set and default endpoints.
    pub fn with_keys(tavily_api_key: &str, gemini_api_key: &str) -> Self {
        Self {
            tavily_api_key: Some(tavily_api_key.to_string()),
            gemini_api_key: Some(gemini_api_key.to_string()),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            tavily_base_url: DEFAULT_TAVILY_BASE_URL.to_string(),
            api_host: "127.0.0.1".to_string(),
            api_port: 8000,
        }
    }

    /// Both upstream credentials are present.
    pub fn has_api_keys(&self) -> bool {
        self.tavily_api_key.is_some() && self.gemini_api_key.is_some()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

/// Unset and empty variables are both treated as missing.
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_api_keys_requires_both() {
        let mut config = Config::with_keys("tvly", "gm");
        assert!(config.has_api_keys());

        config.gemini_api_key = None;
        assert!(!config.has_api_keys());

        config.gemini_api_key = Some("gm".to_string());
        config.tavily_api_key = None;
        assert!(!config.has_api_keys());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let mut config = Config::with_keys("tvly", "gm");
        config.api_host = "0.0.0.0".to_string();
        config.api_port = 9000;
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }
}
