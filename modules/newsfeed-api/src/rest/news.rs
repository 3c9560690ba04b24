use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use tracing::{info, warn};

use crate::cache::cache_key;
use crate::error::ApiError;
use crate::types::ArticleRecord;
use crate::AppState;

pub const DEFAULT_TAGS: &str = "latest world news";
pub const MIN_TAGS_LEN: usize = 3;
pub const MAX_TAGS_LEN: usize = 100;

#[derive(Debug, PartialEq)]
pub struct NewsQuery {
    tags: String,
    exclude_urls: Option<String>,
}

impl NewsQuery {
    /// A repeated parameter takes its last value. Unknown parameters are
    /// ignored.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = NewsQuery {
            tags: DEFAULT_TAGS.to_string(),
            exclude_urls: None,
        };
        for (name, value) in pairs {
            match name.as_str() {
                "tags" => query.tags = value,
                "exclude_urls" => query.exclude_urls = Some(value),
                _ => {}
            }
        }
        query
    }
}

fn validate_tags(tags: &str) -> Result<(), ApiError> {
    let len = tags.chars().count();
    if !(MIN_TAGS_LEN..=MAX_TAGS_LEN).contains(&len) {
        return Err(ApiError::InvalidTags {
            min: MIN_TAGS_LEN,
            max: MAX_TAGS_LEN,
        });
    }
    Ok(())
}

/// Comma-split exclusion list. Entries are kept verbatim; an absent or empty
/// parameter excludes nothing.
fn parse_exclude_urls(exclude_urls: Option<&str>) -> Vec<String> {
    match exclude_urls {
        Some(urls) if !urls.is_empty() => urls.split(',').map(String::from).collect(),
        _ => Vec::new(),
    }
}

pub async fn api_news(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<ArticleRecord>>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let params = NewsQuery::from_pairs(pairs);
    let articles = fetch_news(&state, &params.tags, params.exclude_urls.as_deref()).await?;
    Ok(Json(articles))
}

/// Search, enrich, and cache. Requests carrying `exclude_urls` (even an
/// empty one) neither read nor write the cache.
pub async fn fetch_news(
    state: &AppState,
    tags: &str,
    exclude_urls: Option<&str>,
) -> Result<Vec<ArticleRecord>, ApiError> {
    validate_tags(tags)?;

    let key = cache_key(tags, exclude_urls);
    let cacheable = exclude_urls.is_none();

    if cacheable {
        if let Some(cached) = state.cache.get(&key).await {
            info!(tags, "Cache hit");
            return Ok(cached);
        }
    }
    info!(tags, "Cache miss");

    if !state.config.has_api_keys() {
        warn!("Search or generation API key missing");
        return Err(ApiError::MissingApiKeys);
    }

    let excluded = parse_exclude_urls(exclude_urls);
    let results = state
        .searcher
        .search(tags, &excluded)
        .await
        .map_err(|e| {
            warn!(tags, error = %e, "News search failed");
            ApiError::UpstreamSearch(e.to_string())
        })?;

    info!(tags, results = results.len(), "News search complete");
    if results.is_empty() {
        return Ok(Vec::new());
    }

    let query_words: Vec<String> = tags.split_whitespace().map(String::from).collect();
    let articles = state.enricher.enrich_all(&results, &query_words).await;

    if cacheable {
        state.cache.put(key, articles.clone()).await;
    }

    Ok(articles)
}
