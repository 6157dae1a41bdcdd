//! API Handlers
//!
//! HTTP request handlers for the lookup server endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::aggregate::Aggregator;
use crate::cache::WordCache;
use crate::config::Config;
use crate::error::{LookupError, Result};
use crate::models::{HealthResponse, StatsResponse, WordInfo};

/// Minimal landing page served at `/`.
const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>wordhub</title></head>
<body>
  <h1>wordhub</h1>
  <p>Word lookup aggregation service. Try <code>GET /api/word/example</code>.</p>
</body>
</html>
"#;

/// Application state shared across all handlers.
///
/// The cache is whole-map locked; the lock is never held across a network
/// call. Two concurrent misses for the same word may both aggregate and both
/// write; the later write replaces the earlier (last-write-wins, accepted).
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe lookup cache
    pub cache: Arc<RwLock<WordCache>>,
    /// Aggregation engine for cache misses
    pub aggregator: Arc<Aggregator>,
    /// Outer deadline for a whole cache-miss lookup
    pub lookup_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: WordCache, aggregator: Aggregator, lookup_timeout: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            aggregator: Arc::new(aggregator),
            lookup_timeout,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            WordCache::new(config.cache_ttl_secs),
            Aggregator::from_config(config),
            Duration::from_secs(config.lookup_timeout_secs),
        )
    }
}

/// Handler for GET /api/word/:word
///
/// Cache look-aside in front of the aggregator: a fresh cached result is
/// returned as-is; on miss the aggregator runs under the outer deadline and
/// the assembled result is stored before being returned. Upstream failures
/// never fail the request; they surface as absent categories in the body.
pub async fn word_handler(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<WordInfo>> {
    // Check cache first; write lock because stale removal mutates
    {
        let mut cache = state.cache.write().await;
        if let Some(info) = cache.get(&word) {
            debug!(%word, "cache hit");
            return Ok(Json(info));
        }
    }

    debug!(%word, "cache miss, aggregating");
    let info = tokio::time::timeout(state.lookup_timeout, state.aggregator.aggregate(&word))
        .await
        .map_err(|_| LookupError::Timeout)??;

    let mut cache = state.cache.write().await;
    cache.set(word, info.clone());

    Ok(Json(info))
}

/// Handler for GET /
///
/// Serves the static landing page.
pub async fn index_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
