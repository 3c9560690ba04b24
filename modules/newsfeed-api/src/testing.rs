// Test mocks for the news pipeline.
//
// Three mocks matching the three seams:
// - MockSearcher (NewsSearcher): canned results or a canned provider error
// - MockGenerator (TextGenerator): prompt-substring → reply, optional delay
// - ManualClock (Clock): time only moves when the test says so
//
// Plus builders for SearchResult and ArticleRecord fixtures.

use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tavily_client::{SearchResult, TavilyError};

use crate::clock::Clock;
use crate::traits::{NewsSearcher, TextGenerator};
use crate::types::ArticleRecord;

// ---------------------------------------------------------------------------
// MockSearcher
// ---------------------------------------------------------------------------

enum SearchOutcome {
    Results(Vec<SearchResult>),
    Status { status: u16, message: String },
}

/// Records every call. Returns the same outcome each time.
pub struct MockSearcher {
    outcome: SearchOutcome,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockSearcher {
    /// Searcher that finds nothing.
    pub fn new() -> Self {
        Self::with_results(Vec::new())
    }

    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            outcome: SearchOutcome::Results(results),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Searcher whose provider answers with a non-success status.
    pub fn failing_with_status(status: u16, message: &str) -> Self {
        Self {
            outcome: SearchOutcome::Status {
                status,
                message: message.to_string(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// `(query, exclude_urls)` for each call, in call order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSearcher for MockSearcher {
    async fn search(&self, query: &str, exclude_urls: &[String]) -> Result<Vec<SearchResult>> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), exclude_urls.to_vec()));

        match &self.outcome {
            SearchOutcome::Results(results) => Ok(results.clone()),
            SearchOutcome::Status { status, message } => Err(TavilyError::Api {
                status: *status,
                message: message.clone(),
            }
            .into()),
        }
    }
}

// ---------------------------------------------------------------------------
// MockGenerator
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum Reply {
    Text { text: String, delay: Duration },
    Fail(String),
}

/// Replies by the first registered substring found in the prompt, else the
/// default reply. `new()` fails unmatched prompts.
pub struct MockGenerator {
    rules: Vec<(String, Reply)>,
    default: Reply,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            default: Reply::Fail("MockGenerator: no reply registered for prompt".to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Generator answering every prompt with `text`.
    pub fn replying(text: &str) -> Self {
        Self {
            default: Reply::Text {
                text: text.to_string(),
                delay: Duration::ZERO,
            },
            ..Self::new()
        }
    }

    pub fn on_prompt(self, needle: &str, text: &str) -> Self {
        self.on_prompt_delayed(needle, text, Duration::ZERO)
    }

    /// Reply only after `delay`, to force out-of-order completion.
    pub fn on_prompt_delayed(mut self, needle: &str, text: &str, delay: Duration) -> Self {
        self.rules.push((
            needle.to_string(),
            Reply::Text {
                text: text.to_string(),
                delay,
            },
        ));
        self
    }

    pub fn failing_on(mut self, needle: &str, message: &str) -> Self {
        self.rules
            .push((needle.to_string(), Reply::Fail(message.to_string())));
        self
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let reply = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| self.default.clone());

        match reply {
            Reply::Text { text, delay } => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(text)
            }
            Reply::Fail(message) => Err(anyhow!(message)),
        }
    }
}

// ---------------------------------------------------------------------------
// ManualClock
// ---------------------------------------------------------------------------

/// 2025-01-01T00:00:00Z.
const MANUAL_CLOCK_START: i64 = 1_735_689_600;

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::from_timestamp(MANUAL_CLOCK_START, 0).unwrap_or_default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A search hit with a title, excerpt, and source derived from `url`.
pub fn search_result(url: &str, raw_content: Option<&str>) -> SearchResult {
    SearchResult {
        url: url.to_string(),
        title: format!("Title for {url}"),
        source: Some("Example News".to_string()),
        content: Some(format!("Excerpt for {url}")),
        raw_content: raw_content.map(String::from),
    }
}

/// An already-enriched article for `url`.
pub fn article(url: &str) -> ArticleRecord {
    ArticleRecord {
        id: url.to_string(),
        title: format!("Title for {url}"),
        url: url.to_string(),
        summary: "A summary sentence.".to_string(),
        source: Some("Example News".to_string()),
        tags: vec!["Tag1".to_string()],
        published_at: "2025-01-01T00:00:00.000000+00:00".to_string(),
    }
}
