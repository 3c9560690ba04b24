//! Per-article enrichment: one language-model call turns a raw search hit
//! into an `ArticleRecord` with a one-sentence summary and topic tags.
//!
//! Model failures never escape. A failed call, unparseable output, or an
//! output of the wrong shape degrades to a deterministic summary and tag
//! list derived from the search excerpt and the query.

use std::sync::Arc;

use ai_client::{strip_json_noise, truncate_chars};
use anyhow::Result;
use chrono::SecondsFormat;
use futures::future::join_all;
use serde::Deserialize;
use serde_json::{Map, Value};
use tavily_client::SearchResult;
use tracing::warn;

use crate::clock::Clock;
use crate::traits::TextGenerator;
use crate::types::ArticleRecord;

/// Tags kept from a successful model answer.
pub const MAX_TAGS: usize = 4;
/// Query words turned into tags on the fallback path.
pub const FALLBACK_TAG_COUNT: usize = 2;
/// Excerpt characters kept in a fallback summary.
pub const FALLBACK_SUMMARY_CHARS: usize = 150;

const SUMMARY_NOT_AVAILABLE: &str = "Summary not available.";
const SUMMARY_NOT_GENERATED: &str = "Summary could not be generated.";

/// The two fields the model is asked to return. Both may be missing; any
/// other deviation (wrong types, non-object payload) is a parse failure.
#[derive(Debug, Deserialize)]
struct ModelEnrichment {
    summary: Option<String>,
    tags: Option<Vec<String>>,
}

fn build_prompt(content: &str) -> String {
    format!(
        "Analyze the following news article. Article: \"{content}\"\n\
         Perform two tasks:\n\
         1. Summarize the article in one engaging sentence for a news feed.\n\
         2. Extract up to 4 relevant tags (like locations, people, organizations, or topics). \
         Format them as a comma-separated list.\n\
         Return your response as a single JSON object with two keys: \"summary\" and \"tags\".\n\
         Example: {{\"summary\": \"A summary sentence.\", \"tags\": [\"Tag1\", \"Tag2\", \"Tag3\"]}}\n"
    )
}

fn parse_enrichment(text: &str) -> Result<ModelEnrichment> {
    let cleaned = strip_json_noise(text);
    let object: Map<String, Value> = serde_json::from_str(&cleaned)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Summary used when the model could not be consulted.
pub fn fallback_summary(excerpt: Option<&str>) -> String {
    let text = excerpt.unwrap_or(SUMMARY_NOT_GENERATED);
    format!("{}...", truncate_chars(text, FALLBACK_SUMMARY_CHARS))
}

/// Tags used when the model could not be consulted: the first two query
/// words, capitalized. Later words are dropped.
pub fn fallback_tags(query_words: &[String]) -> Vec<String> {
    query_words
        .iter()
        .take(FALLBACK_TAG_COUNT)
        .map(|w| capitalize(w))
        .collect()
}

pub struct ArticleEnricher {
    generator: Arc<dyn TextGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleEnricher {
    pub fn new(generator: Arc<dyn TextGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    /// Enrich one hit. `None` when the hit has no raw content, in which
    /// case the model is not called.
    pub async fn enrich(
        &self,
        result: &SearchResult,
        query_words: &[String],
    ) -> Option<ArticleRecord> {
        let content = result.raw_content.as_deref().filter(|c| !c.is_empty())?;

        let (summary, tags) = match self.ask_model(content).await {
            Ok(enrichment) => {
                let summary = enrichment.summary.unwrap_or_else(|| {
                    result
                        .content
                        .clone()
                        .unwrap_or_else(|| SUMMARY_NOT_AVAILABLE.to_string())
                });
                let tags = enrichment
                    .tags
                    .unwrap_or_default()
                    .into_iter()
                    .take(MAX_TAGS)
                    .collect();
                (summary, tags)
            }
            Err(e) => {
                warn!(url = %result.url, error = %e, "Enrichment failed, using fallback");
                (
                    fallback_summary(result.content.as_deref()),
                    fallback_tags(query_words),
                )
            }
        };

        Some(ArticleRecord {
            id: result.url.clone(),
            title: result.title.clone(),
            url: result.url.clone(),
            summary,
            source: result.source.clone(),
            tags,
            published_at: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Micros, false),
        })
    }

    /// Enrich every hit concurrently. Output keeps input order; hits without
    /// raw content are dropped.
    pub async fn enrich_all(
        &self,
        results: &[SearchResult],
        query_words: &[String],
    ) -> Vec<ArticleRecord> {
        let tasks = results.iter().map(|r| self.enrich(r, query_words));
        join_all(tasks).await.into_iter().flatten().collect()
    }

    async fn ask_model(&self, content: &str) -> Result<ModelEnrichment> {
        let text = self.generator.generate(&build_prompt(content)).await?;
        parse_enrichment(&text)
    }
}
