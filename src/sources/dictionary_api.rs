//! Free Dictionary API client
//!
//! Primary definition source. The upstream serves an array of entries at
//! `GET {base}/{word}` and answers 404 for unknown words, which this client
//! reports as `Empty` rather than `Error`.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::FetchError;
use crate::models::{Definition, FetchOutcome};
use crate::normalize::{self, DictApiEntry};
use crate::sources::{absorb, DefinitionSource};

/// Client for the Free Dictionary API (api.dictionaryapi.dev).
#[derive(Debug, Clone)]
pub struct DictionaryApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl DictionaryApiClient {
    /// Creates a new client sharing the given HTTP client.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn try_fetch(&self, word: &str) -> Result<Option<Definition>, FetchError> {
        let url = format!("{}/{}", self.base_url, word);
        let response = self.client.get(&url).send().await?;

        // The upstream signals "word not found" with a 404 body, not an
        // empty array.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(FetchError::Upstream(response.status().as_u16()));
        }

        let entries = response.json::<Vec<DictApiEntry>>().await?;
        Ok(normalize::definition_from_dictionary_api(entries))
    }
}

#[async_trait]
impl DefinitionSource for DictionaryApiClient {
    fn name(&self) -> &'static str {
        "dictionary-api"
    }

    async fn fetch_definition(&self, word: &str) -> FetchOutcome<Definition> {
        absorb(self.name(), word, self.try_fetch(word).await)
    }
}
