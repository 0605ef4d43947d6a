//! In-memory response cache for `/analyze`, keyed by sanitized input.
//!
//! Entries expire after a fixed TTL. Expired entries are evicted lazily on
//! lookup, and swept in bulk once the map grows past `SWEEP_THRESHOLD`.
//! The map never holds more than `max_entries`; when full after a sweep,
//! the oldest entry makes room.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::pipeline::AnalysisResult;

/// Default time-to-live for cached analyses (1 hour).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Default upper bound on cached analyses.
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

const SWEEP_THRESHOLD: usize = 1000;

pub struct ResponseCache {
    entries: HashMap<String, (AnalysisResult, Instant)>,
    ttl: Duration,
    max_entries: usize,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_max_entries(ttl, DEFAULT_CACHE_MAX_ENTRIES)
    }

    /// Cache holding at most `max_entries` results (minimum 1).
    pub fn with_max_entries(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    /// Cached result for `key` if it is still fresh.
    pub fn get(&mut self, key: &str) -> Option<AnalysisResult> {
        let fresh = match self.entries.get(key) {
            Some((_, stored_at)) => stored_at.elapsed() < self.ttl,
            None => return None,
        };

        if !fresh {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|(result, _)| result.clone())
    }

    pub fn insert(&mut self, key: &str, result: AnalysisResult) {
        if self.entries.len() > SWEEP_THRESHOLD || self.entries.len() >= self.max_entries {
            self.sweep();
        }
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(key) {
            self.evict_oldest();
        }
        self.entries
            .insert(key.to_string(), (result, Instant::now()));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sweep(&mut self) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, (_, stored_at)| stored_at.elapsed() < ttl);
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, (_, stored_at))| *stored_at)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            tracing::debug!(max_entries = self.max_entries, "Response cache full, evicting oldest");
            self.entries.remove(&key);
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::pipeline::SymptomAnalyzer;
    use std::sync::Arc;

    fn sample() -> AnalysisResult {
        SymptomAnalyzer::new(Arc::new(KnowledgeBase::builtin().unwrap()))
            .analyze("runny nose and sneezing")
            .unwrap()
    }

    #[test]
    fn miss_on_empty_cache() {
        let mut cache = ResponseCache::default();
        assert!(cache.get("anything").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn hit_returns_stored_result() {
        let mut cache = ResponseCache::default();
        let result = sample();
        cache.insert("runny nose and sneezing", result.clone());

        assert_eq!(cache.get("runny nose and sneezing"), Some(result));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_are_exact() {
        let mut cache = ResponseCache::default();
        cache.insert("runny nose and sneezing", sample());
        assert!(cache.get("Runny nose and sneezing").is_none());
    }

    #[test]
    fn expired_entry_evicted_on_get() {
        let mut cache = ResponseCache::new(Duration::ZERO);
        cache.insert("key", sample());
        assert_eq!(cache.len(), 1);

        assert!(cache.get("key").is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn insert_overwrites_existing_key() {
        let mut cache = ResponseCache::default();
        let mut first = sample();
        first.disclaimer = "old".into();
        cache.insert("key", first);
        cache.insert("key", sample());

        assert_eq!(cache.len(), 1);
        assert_ne!(cache.get("key").unwrap().disclaimer, "old");
    }

    #[test]
    fn sweep_drops_expired_entries_when_large() {
        let mut cache = ResponseCache::new(Duration::ZERO);
        let result = sample();
        for i in 0..=SWEEP_THRESHOLD {
            cache.insert(&format!("key-{i}"), result.clone());
        }
        // Next insert crosses the threshold and sweeps everything expired
        cache.insert("fresh", result);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn full_cache_evicts_oldest() {
        let mut cache = ResponseCache::with_max_entries(DEFAULT_CACHE_TTL, 2);
        let result = sample();
        cache.insert("first", result.clone());
        std::thread::sleep(Duration::from_millis(2));
        cache.insert("second", result.clone());
        std::thread::sleep(Duration::from_millis(2));
        cache.insert("third", result.clone());

        assert_eq!(cache.len(), 2);
        assert!(cache.get("first").is_none());
        assert!(cache.get("second").is_some());
        assert!(cache.get("third").is_some());
    }

    #[test]
    fn refreshing_existing_key_keeps_others_when_full() {
        let mut cache = ResponseCache::with_max_entries(DEFAULT_CACHE_TTL, 2);
        let result = sample();
        cache.insert("a", result.clone());
        cache.insert("b", result.clone());
        cache.insert("a", result);

        assert_eq!(cache.len(), 2);
        assert!(cache.get("b").is_some());
    }

    #[test]
    fn full_cache_prefers_dropping_expired_entries() {
        let mut cache = ResponseCache::with_max_entries(Duration::ZERO, 3);
        let result = sample();
        for key in ["a", "b", "c", "d"] {
            cache.insert(key, result.clone());
        }
        // Reaching capacity sweeps the expired entries before evicting
        assert_eq!(cache.len(), 1);
        assert!(cache.entries.contains_key("d"));
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = ResponseCache::default();
        cache.insert("a", sample());
        cache.insert("b", sample());
        cache.clear();
        assert!(cache.is_empty());
    }
}
