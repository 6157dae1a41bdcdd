//! Wordhub - a word-lookup aggregation server
//!
//! Fans a word out to several third-party APIs, merges their results into one
//! canonical response, and caches the merged result for a short time.

pub mod aggregate;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod sources;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
