//! Cache Module
//!
//! In-memory TTL caching for assembled lookup results, with an injected
//! clock for deterministic expiry in tests.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::WordCache;
