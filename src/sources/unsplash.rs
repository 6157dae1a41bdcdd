//! Unsplash client
//!
//! Image search. Requires an access key; when none is configured the category
//! degrades to `Empty` instead of failing startup or erroring per request.
//! Results are truncated to the first ten display URLs during normalization.

use tracing::debug;

use crate::error::FetchError;
use crate::models::FetchOutcome;
use crate::normalize::{self, UnsplashSearchResponse};
use crate::sources::absorb;

/// Client for the Unsplash photo search API (api.unsplash.com).
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
}

impl UnsplashClient {
    /// Creates a new client sharing the given HTTP client.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_key,
        }
    }

    /// Fetches up to ten image URLs for `word`.
    pub async fn fetch_images(&self, word: &str) -> FetchOutcome<Vec<String>> {
        let Some(key) = self.access_key.as_deref() else {
            debug!(word, "no image API key configured, skipping image search");
            return FetchOutcome::Empty;
        };

        absorb("unsplash", word, self.try_fetch(word, key).await)
    }

    async fn try_fetch(&self, word: &str, key: &str) -> Result<Option<Vec<String>>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("query", word), ("per_page", "10"), ("client_id", key)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Upstream(response.status().as_u16()));
        }

        let body = response.json::<UnsplashSearchResponse>().await?;
        let images = normalize::images_from_unsplash(body);
        Ok(if images.is_empty() { None } else { Some(images) })
    }
}
