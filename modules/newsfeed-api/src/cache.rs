//! Time-bounded in-memory cache of enriched article lists.
//!
//! Entries are never evicted. A stale entry stays in the map, ignored by
//! `get`, until a `put` for the same key replaces it. Key growth is bounded
//! only by the number of distinct queries seen during the process lifetime.
//!
//! A single `RwLock` guards the map so a reader never observes a half-written
//! entry. Concurrent misses for the same key still each run the full pipeline
//! and the last `put` wins.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;

use crate::clock::Clock;
use crate::types::ArticleRecord;

pub const CACHE_TTL_SECONDS: i64 = 300;

/// Key for a `(tags, exclude_urls)` pair. An absent exclusion list renders
/// as the literal `None`.
pub fn cache_key(tags: &str, exclude_urls: Option<&str>) -> String {
    format!("{}:{}", tags, exclude_urls.unwrap_or("None"))
}

struct CacheEntry {
    timestamp: DateTime<Utc>,
    data: Vec<ArticleRecord>,
}

pub struct ArticleCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl ArticleCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_ttl(clock, TimeDelta::seconds(CACHE_TTL_SECONDS))
    }

    pub fn with_ttl(clock: Arc<dyn Clock>, ttl: TimeDelta) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Fresh data for `key`, or `None` if absent or at least `ttl` old.
    pub async fn get(&self, key: &str) -> Option<Vec<ArticleRecord>> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if self.clock.now() - entry.timestamp >= self.ttl {
            return None;
        }
        Some(entry.data.clone())
    }

    /// Store `data` under `key`, stamped with the current time.
    pub async fn put(&self, key: String, data: Vec<ArticleRecord>) {
        let entry = CacheEntry {
            timestamp: self.clock.now(),
            data,
        };
        self.entries.write().await.insert(key, entry);
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
