//! Source Clients
//!
//! One client per upstream, each wrapping a single outbound request bounded by
//! the shared `reqwest::Client` timeout. Contract: a client never raises to
//! its caller; every transport error, non-success status, and malformed body
//! is absorbed into a [`FetchOutcome`] here at the leaf.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{Definition, FetchOutcome};

mod dictionary_api;
mod datamuse;
mod unsplash;

pub use datamuse::DatamuseClient;
pub use dictionary_api::DictionaryApiClient;
pub use unsplash::UnsplashClient;

// == Definition Source Trait ==
/// A definition-capable upstream, usable as one slot in the fallback chain.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Short source name used in logs.
    fn name(&self) -> &'static str;

    /// Fetches and normalizes a definition for `word`. Never fails; all
    /// failure modes are folded into the outcome.
    async fn fetch_definition(&self, word: &str) -> FetchOutcome<Definition>;
}

// == Outcome Absorption ==
/// Folds a raw fetch result into a tagged outcome.
///
/// `Empty` and `Error` are treated alike downstream but logged distinctly:
/// a successful call with no data is expected traffic, a failed call is not.
pub(crate) fn absorb<T>(
    source: &'static str,
    word: &str,
    result: Result<Option<T>, FetchError>,
) -> FetchOutcome<T> {
    match result {
        Ok(Some(value)) => FetchOutcome::Ok(value),
        Ok(None) => {
            debug!(source, word, "upstream returned no data");
            FetchOutcome::Empty
        }
        Err(err) => {
            warn!(source, word, error = %err, "upstream fetch failed");
            FetchOutcome::Error(err)
        }
    }
}
