//! Path-keyed cache of raw JSON responses.
//!
//! Keys are logical resource paths such as `/api/playlists/3`. Invalidating a
//! path drops the key itself and every key nested below it, so mutations can
//! mark a collection stale together with its members.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

/// Shared cache; clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl QueryCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `path`, if present.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<Value> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    /// Store `value` under `path`, replacing any previous entry.
    pub fn insert(&self, path: impl Into<String>, value: Value) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), value);
    }

    /// `true` when `path` has a cached value.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }

    /// Drop `path` and every key below it; returns how many entries went.
    pub fn invalidate(&self, path: &str) -> usize {
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|key, _| key != path && !key.starts_with(&prefix));
        let removed = before - entries.len();
        tracing::debug!(path, removed, "cache invalidated");
        removed
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// `true` when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalidate_drops_key_and_descendants_only() {
        let cache = QueryCache::new();
        cache.insert("/api/playlists", json!([]));
        cache.insert("/api/playlists/3", json!({"id": 3}));
        cache.insert("/api/playlists/3/tracks", json!([]));
        cache.insert("/api/playlists-archive", json!([]));
        cache.insert("/api/tracks", json!([]));

        assert_eq!(cache.invalidate("/api/playlists"), 3);
        assert!(!cache.contains("/api/playlists/3"));
        assert!(cache.contains("/api/playlists-archive"));
        assert!(cache.contains("/api/tracks"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clones_share_entries() {
        let cache = QueryCache::new();
        let clone = cache.clone();
        clone.insert("/api/users/me", json!({"id": 1}));
        assert_eq!(cache.get("/api/users/me"), Some(json!({"id": 1})));
        assert_eq!(cache.invalidate("/api/unknown"), 0);
        assert!(!cache.is_empty());
    }
}
