pub mod error;
pub mod types;

pub use error::{Result, TavilyError};
pub use types::{SearchRequest, SearchResponse, SearchResult};

const BASE_URL: &str = "https://api.tavily.com";

pub struct TavilyClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TavilyClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a news search, letting the provider drop `exclude_urls`. Hits
    /// without a URL are skipped.
    pub async fn search(&self, query: &str, exclude_urls: &[String]) -> Result<Vec<SearchResult>> {
        let request = SearchRequest::news(&self.api_key, query, exclude_urls);
        let results = self.send(&request).await?.results;

        let total = results.len();
        let results: Vec<SearchResult> =
            results.into_iter().filter(|r| !r.url.is_empty()).collect();
        if results.len() < total {
            tracing::debug!(skipped = total - results.len(), "Skipped search hits without a URL");
        }
        Ok(results)
    }

    /// Send an arbitrary search request.
    pub async fn send(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = format!("{}/search", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TavilyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response: SearchResponse = resp.json().await?;
        tracing::debug!(
            query = %request.query,
            results = response.results.len(),
            "Tavily search complete"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = TavilyClient::new("k").with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn api_error_display_carries_provider_text() {
        let err = TavilyError::Api {
            status: 503,
            message: "service overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 503): service overloaded");
    }

    #[test]
    fn decode_error_is_not_reported_as_network() {
        let err = TavilyError::Decode("expected value at line 1 column 1".to_string());
        assert_eq!(err.to_string(), "Decode error: expected value at line 1 column 1");
    }
}
