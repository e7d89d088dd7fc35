//! Recent and popular query suggestions.
//!
//! Recency is the only state that survives a session. It lives behind the
//! [`RecentStore`] port so embedders pick the medium; the engine only ever
//! sees `get`/`set` on an opaque string value. Store trouble is never an
//! error up here: a missing or unreadable value means "no history yet".

use std::collections::HashMap;

/// Key the recent-query list is stored under.
pub const RECENT_KEY: &str = "wayfinder.recent-searches";

/// Maximum number of recent queries kept and persisted.
pub const RECENT_CAP: usize = 5;

/// Minimal key-value persistence port for the recency list.
///
/// Implementations swallow their own failures: `get` answers `None` for
/// anything unreadable and `set` is best-effort.
pub trait RecentStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`RecentStore`] for tests and storeless embedders.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Where a suggestion row came from, for section labels and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    Recent,
    Popular,
}

/// One suggestion row offered while the query is blank.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub text: String,
    pub source: SuggestionSource,
}

/// Bounded recent-query history plus the curated popular list.
pub struct Suggestions {
    store: Box<dyn RecentStore>,
    recent: Vec<String>,
    popular: Vec<String>,
}

impl std::fmt::Debug for Suggestions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suggestions")
            .field("recent", &self.recent)
            .field("popular", &self.popular)
            .finish_non_exhaustive()
    }
}

impl Suggestions {
    /// Load history from the store; anything unreadable starts empty.
    /// Blank entries in the curated popular list are dropped.
    #[must_use]
    pub fn new(store: Box<dyn RecentStore>, popular: Vec<String>) -> Self {
        let recent = load_recent(store.as_ref());
        let popular = popular
            .into_iter()
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self {
            store,
            recent,
            popular,
        }
    }

    /// Most recent first, at most [`RECENT_CAP`] entries.
    #[must_use]
    pub fn recent(&self) -> &[String] {
        &self.recent
    }

    #[must_use]
    pub fn popular(&self) -> &[String] {
        &self.popular
    }

    /// Recent entries followed by the popular list, with source tags. An
    /// entry on both lists shows in both sections.
    #[must_use]
    pub fn combined(&self) -> Vec<Suggestion> {
        let recent = self.recent.iter().map(|text| Suggestion {
            text: text.clone(),
            source: SuggestionSource::Recent,
        });
        let popular = self.popular.iter().map(|text| Suggestion {
            text: text.clone(),
            source: SuggestionSource::Popular,
        });
        recent.chain(popular).collect()
    }

    /// Total suggestion rows [`combined`](Self::combined) would yield.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recent.len() + self.popular.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty() && self.popular.is_empty()
    }

    /// Remember a committed query: move-to-front with exact-match dedup,
    /// truncated to [`RECENT_CAP`], persisted immediately. Blank queries are
    /// ignored.
    pub fn record(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }
        self.recent.retain(|entry| entry != trimmed);
        self.recent.insert(0, trimmed.to_string());
        self.recent.truncate(RECENT_CAP);
        self.persist();
    }

    /// Forget all recent queries, in memory and in the store.
    pub fn clear_recent(&mut self) {
        if self.recent.is_empty() {
            return;
        }
        self.recent.clear();
        self.persist();
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.recent) {
            Ok(payload) => self.store.set(RECENT_KEY, &payload),
            Err(err) => tracing::warn!(%err, "could not encode recent searches"),
        }
    }
}

fn load_recent(store: &dyn RecentStore) -> Vec<String> {
    let Some(raw) = store.get(RECENT_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(list) => sanitize(list),
        Err(err) => {
            tracing::warn!(%err, "discarding unreadable recent-search history");
            Vec::new()
        }
    }
}

/// Enforce the list invariants on whatever came out of the store: no
/// blanks, no duplicates, capped length.
fn sanitize(list: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for entry in list {
        let trimmed = entry.trim();
        if trimmed.is_empty() || kept.iter().any(|k| k == trimmed) {
            continue;
        }
        kept.push(trimmed.to_string());
        if kept.len() == RECENT_CAP {
            break;
        }
    }
    kept
}
