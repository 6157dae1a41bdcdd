//! Cache Store Module
//!
//! Look-aside TTL cache for assembled lookup results. Expiry only: there is
//! no capacity bound and no eviction policy beyond stale removal; entries
//! accumulate until overwritten or the process restarts.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};
use crate::models::WordInfo;

// == Word Cache ==
/// TTL cache keyed by the caller-supplied word, used verbatim.
#[derive(Debug)]
pub struct WordCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds applied to every entry
    ttl_secs: u64,
    /// Time source, injected so tests control expiry
    clock: Arc<dyn Clock>,
}

impl WordCache {
    // == Constructors ==
    /// Creates a new WordCache with the given TTL, on wall-clock time.
    pub fn new(ttl_secs: u64) -> Self {
        Self::with_clock(ttl_secs, Arc::new(SystemClock))
    }

    /// Creates a new WordCache reading time from the given clock.
    pub fn with_clock(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_secs,
            clock,
        }
    }

    // == Get ==
    /// Retrieves the cached result for `key` if present and fresh.
    ///
    /// An entry past its expiry is treated as absent: it is removed as a side
    /// effect and the access counts as a miss.
    pub fn get(&mut self, key: &str) -> Option<WordInfo> {
        let now = self.clock.now_ms();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(now) {
                // Remove stale entry
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Set ==
    /// Stores a result for `key` with a fresh TTL, unconditionally replacing
    /// any existing entry.
    pub fn set(&mut self, key: String, value: WordInfo) {
        let entry = CacheEntry::new(value, self.ttl_secs, self.clock.now_ms());
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::models::WordInfo;

    fn sample_info(synonym: &str) -> WordInfo {
        WordInfo {
            definition: None,
            synonyms: vec![synonym.to_string()],
            antonyms: Vec::new(),
            images: Vec::new(),
        }
    }

    fn cache_with_manual_clock(ttl_secs: u64) -> (WordCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(0));
        let cache = WordCache::with_clock(ttl_secs, clock.clone());
        (cache, clock)
    }

    #[test]
    fn test_store_new() {
        let cache = WordCache::new(1800);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_and_get_within_ttl() {
        let (mut cache, clock) = cache_with_manual_clock(30);

        cache.set("test".to_string(), sample_info("trial"));
        clock.advance_secs(29);

        let value = cache.get("test").expect("entry should still be fresh");
        assert_eq!(value.synonyms, vec!["trial"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_nonexistent() {
        let (mut cache, _clock) = cache_with_manual_clock(30);
        assert!(cache.get("nonexistent").is_none());
    }

    #[test]
    fn test_expired_entry_absent_and_removed() {
        // TTL of 1, advance past it: the entry must read as absent and be
        // physically removed.
        let (mut cache, clock) = cache_with_manual_clock(1);

        cache.set("cat".to_string(), sample_info("feline"));
        clock.advance_secs(2);

        assert!(cache.get("cat").is_none());
        assert!(cache.is_empty(), "stale entry should be removed on get");
    }

    #[test]
    fn test_overwrite_resets_ttl() {
        let (mut cache, clock) = cache_with_manual_clock(30);

        cache.set("test".to_string(), sample_info("old"));
        clock.advance_secs(20);
        cache.set("test".to_string(), sample_info("new"));
        clock.advance_secs(20);

        // 40s after the first write, 20s after the refresh: still fresh.
        let value = cache.get("test").expect("refreshed entry should be fresh");
        assert_eq!(value.synonyms, vec!["new"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cleanup_expired() {
        let (mut cache, clock) = cache_with_manual_clock(30);

        cache.set("old".to_string(), sample_info("a"));
        clock.advance_secs(31);
        cache.set("fresh".to_string(), sample_info("b"));

        let removed = cache.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("fresh").is_some());
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let (mut cache, clock) = cache_with_manual_clock(30);

        cache.set("test".to_string(), sample_info("trial"));
        assert!(cache.get("test").is_some()); // hit
        assert!(cache.get("other").is_none()); // miss
        clock.advance_secs(31);
        assert!(cache.get("test").is_none()); // expired: miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.total_entries, 0);
    }
}
