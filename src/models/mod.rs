//! Data models
//!
//! Canonical result shapes, per-fetch outcome tagging, and response DTOs.

mod outcome;
mod responses;
mod word_info;

pub use outcome::FetchOutcome;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use word_info::{Definition, DefinitionText, Meaning, WordInfo, MAX_IMAGES};
