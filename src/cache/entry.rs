//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.
//! Entries are immutable once stored; a refresh replaces the whole entry.

use crate::models::WordInfo;

// == Cache Entry ==
/// A cached lookup result with its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The assembled lookup result
    pub value: WordInfo,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_secs` after `now_ms`.
    pub fn new(value: WordInfo, ttl_secs: u64, now_ms: u64) -> Self {
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms + ttl_secs * 1000,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now_ms`.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to its expiration time.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}
