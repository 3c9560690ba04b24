use serde::{Deserialize, Deserializer, Serialize};

/// Search depth accepted by `/search`.
pub const SEARCH_DEPTH_ADVANCED: &str = "advanced";

/// Upper bound on results requested for a news query.
pub const NEWS_MAX_RESULTS: u32 = 10;

/// Body of `POST /search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub api_key: String,
    pub query: String,
    pub search_depth: String,
    pub include_raw_content: bool,
    pub max_results: u32,
    pub exclude_urls: Vec<String>,
}

impl SearchRequest {
    /// Advanced-depth query with raw page content, capped at ten results.
    pub fn news(api_key: &str, query: &str, exclude_urls: &[String]) -> Self {
        Self {
            api_key: api_key.to_string(),
            query: query.to_string(),
            search_depth: SEARCH_DEPTH_ADVANCED.to_string(),
            include_raw_content: true,
            max_results: NEWS_MAX_RESULTS,
            exclude_urls: exclude_urls.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A single hit. Any field may be missing or `null`; a hit without a `url`
/// is dropped by [`crate::TavilyClient::search`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    /// Short excerpt.
    #[serde(default)]
    pub content: Option<String>,
    /// Full extracted page text; absent when the provider could not fetch it.
    #[serde(default)]
    pub raw_content: Option<String>,
}

/// `null` decodes the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_request_wire_shape() {
        let request = SearchRequest::news(
            "tvly-key",
            "electric vehicles",
            &["https://a.example/1".to_string()],
        );
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["api_key"], "tvly-key");
        assert_eq!(value["query"], "electric vehicles");
        assert_eq!(value["search_depth"], "advanced");
        assert_eq!(value["include_raw_content"], true);
        assert_eq!(value["max_results"], 10);
        assert_eq!(value["exclude_urls"][0], "https://a.example/1");
    }

    #[test]
    fn news_request_keeps_empty_exclusions() {
        let value = serde_json::to_value(SearchRequest::news("k", "q", &[])).unwrap();
        assert_eq!(value["exclude_urls"], serde_json::json!([]));
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"query": "q", "results": [
                {"url": "https://a.example", "title": "A", "content": "excerpt",
                 "raw_content": null},
                {"url": "https://b.example", "source": "B News", "raw_content": "full text"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].raw_content, None);
        assert_eq!(response.results[0].source, None);
        assert_eq!(response.results[1].title, "");
        assert_eq!(response.results[1].content, None);
        assert_eq!(response.results[1].raw_content.as_deref(), Some("full text"));
    }

    #[test]
    fn null_title_and_url_decode_as_empty() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"results": [
                {"url": "https://a.example", "title": null, "raw_content": "text a"},
                {"url": null, "title": "No link", "raw_content": "text b"},
                {"url": "https://c.example", "title": "C", "source": null}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.results.len(), 3);
        assert_eq!(response.results[0].title, "");
        assert_eq!(response.results[0].raw_content.as_deref(), Some("text a"));
        assert_eq!(response.results[1].url, "");
        assert_eq!(response.results[1].title, "No link");
        assert_eq!(response.results[2].title, "C");
        assert_eq!(response.results[2].source, None);
    }

    #[test]
    fn response_without_results_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"query": "q"}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
