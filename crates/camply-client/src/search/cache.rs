//! Time-bounded cache of search results keyed by trimmed query.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::dto::SearchResult;

struct Entry {
    stored_at: Instant,
    results: Vec<SearchResult>,
}

/// Results remembered per query until `ttl` has passed.
pub struct SearchCache {
    ttl: Duration,
    entries: HashMap<String, Entry>,
}

impl SearchCache {
    /// Empty cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Fresh results for `query`, if any.
    #[must_use]
    pub fn get(&self, query: &str, now: Instant) -> Option<&[SearchResult]> {
        self.entries
            .get(query)
            .filter(|entry| now.saturating_duration_since(entry.stored_at) < self.ttl)
            .map(|entry| entry.results.as_slice())
    }

    /// Store results and drop expired entries.
    pub fn insert(&mut self, query: &str, results: Vec<SearchResult>, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) < ttl);
        self.entries.insert(
            query.to_owned(),
            Entry {
                stored_at: now,
                results,
            },
        );
    }

    /// Stored queries, expired ones included until the next insert.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
