// Trait seams for the two upstream providers.
//
// NewsSearcher wraps the search provider, TextGenerator the language model.
// Production wiring uses TavilyClient and Gemini; tests swap in the mocks
// from `crate::testing` so no request ever leaves the process.

use anyhow::Result;
use async_trait::async_trait;

use ai_client::Gemini;
use tavily_client::{SearchResult, TavilyClient};

// ---------------------------------------------------------------------------
// NewsSearcher
// ---------------------------------------------------------------------------

#[async_trait]
pub trait NewsSearcher: Send + Sync {
    /// One provider call for `query`, excluding `exclude_urls` provider-side.
    async fn search(&self, query: &str, exclude_urls: &[String]) -> Result<Vec<SearchResult>>;
}

#[async_trait]
impl NewsSearcher for TavilyClient {
    async fn search(&self, query: &str, exclude_urls: &[String]) -> Result<Vec<SearchResult>> {
        Ok(TavilyClient::search(self, query, exclude_urls).await?)
    }
}

// ---------------------------------------------------------------------------
// TextGenerator
// ---------------------------------------------------------------------------

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Free-form completion for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl TextGenerator for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }
}
