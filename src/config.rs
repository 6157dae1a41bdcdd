//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The Unsplash access key is optional; without it the image category degrades
/// to empty results instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached lookup results
    pub cache_ttl_secs: u64,
    /// Per-upstream-call timeout in seconds
    pub fetch_timeout_secs: u64,
    /// Outer timeout in seconds for a whole lookup (cache miss path)
    pub lookup_timeout_secs: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval_secs: u64,
    /// Free Dictionary API base URL (primary definition source)
    pub dictionary_api_url: String,
    /// Datamuse base URL (synonyms, antonyms, backup definitions)
    pub datamuse_api_url: String,
    /// Unsplash photo search base URL
    pub unsplash_api_url: String,
    /// Unsplash API access key; `None` disables the image category
    pub unsplash_access_key: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_TTL_SECS` - Lookup result TTL in seconds (default: 1800)
    /// - `FETCH_TIMEOUT_SECS` - Per-upstream-call timeout (default: 5)
    /// - `LOOKUP_TIMEOUT_SECS` - Whole-lookup timeout (default: 20)
    /// - `CLEANUP_INTERVAL_SECS` - Cleanup frequency in seconds (default: 60)
    /// - `DICTIONARY_API_URL` - Primary definition upstream
    /// - `DATAMUSE_API_URL` - Synonym/antonym/backup-definition upstream
    /// - `UNSPLASH_API_URL` - Image search upstream
    /// - `UNSPLASH_ACCESS_KEY` - Image provider API key (optional)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            lookup_timeout_secs: env::var("LOOKUP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            cleanup_interval_secs: env::var("CLEANUP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            dictionary_api_url: env::var("DICTIONARY_API_URL")
                .unwrap_or_else(|_| "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()),
            datamuse_api_url: env::var("DATAMUSE_API_URL")
                .unwrap_or_else(|_| "https://api.datamuse.com/words".to_string()),
            unsplash_api_url: env::var("UNSPLASH_API_URL")
                .unwrap_or_else(|_| "https://api.unsplash.com/search/photos".to_string()),
            unsplash_access_key: env::var("UNSPLASH_ACCESS_KEY").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            cache_ttl_secs: 1800,
            fetch_timeout_secs: 5,
            lookup_timeout_secs: 20,
            cleanup_interval_secs: 60,
            dictionary_api_url: "https://api.dictionaryapi.dev/api/v2/entries/en".to_string(),
            datamuse_api_url: "https://api.datamuse.com/words".to_string(),
            unsplash_api_url: "https://api.unsplash.com/search/photos".to_string(),
            unsplash_access_key: None,
        }
    }
}
