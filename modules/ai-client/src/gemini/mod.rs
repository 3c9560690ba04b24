mod client;
pub mod prompt_builder;
pub(crate) mod types;

pub use prompt_builder::GeminiPromptBuilder;

use crate::traits::{Agent, PromptBuilder};
use anyhow::Result;

use client::GeminiClient;

// =============================================================================
// Gemini Agent
// =============================================================================

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    pub(crate) model: String,
    base_url: Option<String>,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    /// Single-prompt generation with no system instruction or history.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompt(prompt).send().await
    }
}

// =============================================================================
// Agent Implementation
// =============================================================================

impl Agent for Gemini {
    type PromptBuilder = GeminiPromptBuilder;

    fn prompt(&self, input: impl Into<String>) -> GeminiPromptBuilder {
        GeminiPromptBuilder::new(self.clone(), input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_new() {
        let ai = Gemini::new("gm-test", "gemini-1.5-flash-latest");
        assert_eq!(ai.model(), "gemini-1.5-flash-latest");
        assert_eq!(ai.api_key, "gm-test");
    }

    #[test]
    fn test_gemini_with_base_url() {
        let ai = Gemini::new("gm-test", "gemini-1.5-flash-latest")
            .with_base_url("https://custom.api.com");
        assert_eq!(ai.base_url, Some("https://custom.api.com".to_string()));
    }

    #[tokio::test]
    async fn test_complete_surfaces_transport_errors() {
        // Nothing listens on port 9 of the loopback address.
        let ai = Gemini::new("gm-test", "m").with_base_url("http://127.0.0.1:9");
        let err = ai.complete("hello").await.unwrap_err();
        assert!(err.to_string().contains("Network error"));
    }
}
