use serde::{Deserialize, Serialize};

/// An enriched search hit as returned by `GET /news`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Same as `url`.
    pub id: String,
    pub title: String,
    pub url: String,
    pub summary: String,
    pub source: Option<String>,
    pub tags: Vec<String>,
    /// ISO-8601 instant the record was produced, not the article's own date.
    pub published_at: String,
}
