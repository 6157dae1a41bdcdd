//! Aggregation engine
//!
//! Two composable stages: a sequential first-success-wins resolver over the
//! ordered definition sources, feeding one slot of a concurrent four-way
//! fan-out. Partial data is the expected steady state; an aggregate call
//! fails only on an internal fault, never because an upstream did.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{LookupError, Result};
use crate::models::{Definition, FetchOutcome, WordInfo};
use crate::sources::{DatamuseClient, DefinitionSource, DictionaryApiClient, UnsplashClient};

// == Fallback Resolver ==
/// Ordered fallback over definition-capable sources.
///
/// Sources are tried strictly in sequence; each is invoked only if the
/// previous yielded `Empty` or `Error`, and the first `Ok` short-circuits.
/// Worst-case latency is bounded by sources × per-call timeout.
#[derive(Clone)]
pub struct FallbackResolver {
    sources: Vec<Arc<dyn DefinitionSource>>,
}

impl FallbackResolver {
    /// Creates a resolver over the given sources, in fallback order.
    pub fn new(sources: Vec<Arc<dyn DefinitionSource>>) -> Self {
        Self { sources }
    }

    /// Resolves a definition, first success wins. Returns `Empty` when every
    /// source came up short.
    pub async fn resolve(&self, word: &str) -> FetchOutcome<Definition> {
        for source in &self.sources {
            match source.fetch_definition(word).await {
                FetchOutcome::Ok(definition) => {
                    debug!(source = source.name(), word, "definition resolved");
                    return FetchOutcome::Ok(definition);
                }
                FetchOutcome::Empty => {
                    debug!(source = source.name(), word, "no definition, trying next source");
                }
                FetchOutcome::Error(err) => {
                    warn!(source = source.name(), word, error = %err, "definition source failed, trying next");
                }
            }
        }
        FetchOutcome::Empty
    }
}

// == Aggregator ==
/// Runs the four fetch categories concurrently and assembles the canonical
/// result.
pub struct Aggregator {
    resolver: FallbackResolver,
    datamuse: DatamuseClient,
    images: UnsplashClient,
}

impl Aggregator {
    /// Creates an aggregator from explicit stages. The resolver order is the
    /// caller's fallback policy.
    pub fn new(resolver: FallbackResolver, datamuse: DatamuseClient, images: UnsplashClient) -> Self {
        Self {
            resolver,
            datamuse,
            images,
        }
    }

    /// Builds the production wiring from configuration: one HTTP client with
    /// the per-call timeout, shared by every source; Free Dictionary API
    /// first in the fallback order, Datamuse as backup.
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        let dictionary = DictionaryApiClient::new(client.clone(), config.dictionary_api_url.clone());
        let datamuse = DatamuseClient::new(client.clone(), config.datamuse_api_url.clone());
        let images = UnsplashClient::new(
            client,
            config.unsplash_api_url.clone(),
            config.unsplash_access_key.clone(),
        );

        let resolver = FallbackResolver::new(vec![
            Arc::new(dictionary) as Arc<dyn DefinitionSource>,
            Arc::new(datamuse.clone()) as Arc<dyn DefinitionSource>,
        ]);

        Self::new(resolver, datamuse, images)
    }

    /// Looks up `word` against all categories and assembles a `WordInfo`.
    ///
    /// Exactly four fetches are in flight: definition-via-fallback, synonyms,
    /// antonyms, images. All four are awaited regardless of individual
    /// outcome; `Empty`/`Error` categories are substituted with their
    /// documented defaults. Errors here mean an internal fault (a category
    /// task died), never an upstream failure.
    pub async fn aggregate(&self, word: &str) -> Result<WordInfo> {
        let definition = tokio::spawn({
            let resolver = self.resolver.clone();
            let word = word.to_string();
            async move { resolver.resolve(&word).await }
        });
        let synonyms = tokio::spawn({
            let datamuse = self.datamuse.clone();
            let word = word.to_string();
            async move { datamuse.synonyms(&word).await }
        });
        let antonyms = tokio::spawn({
            let datamuse = self.datamuse.clone();
            let word = word.to_string();
            async move { datamuse.antonyms(&word).await }
        });
        let images = tokio::spawn({
            let images = self.images.clone();
            let word = word.to_string();
            async move { images.fetch_images(&word).await }
        });

        // Await all four; no short-circuit on category failure.
        let (definition, synonyms, antonyms, images) =
            tokio::join!(definition, synonyms, antonyms, images);

        Ok(WordInfo {
            definition: join_category("definition", definition)?.into_option(),
            synonyms: join_category("synonyms", synonyms)?
                .into_option()
                .unwrap_or_default(),
            antonyms: join_category("antonyms", antonyms)?
                .into_option()
                .unwrap_or_default(),
            images: join_category("images", images)?
                .into_option()
                .unwrap_or_default(),
        })
    }
}

/// Maps a dead category task (panic or runtime shutdown) to an internal
/// aggregation fault. Upstream failures never take this path; they arrive as
/// well-formed outcomes.
fn join_category<T>(
    category: &'static str,
    joined: std::result::Result<FetchOutcome<T>, JoinError>,
) -> Result<FetchOutcome<T>> {
    joined.map_err(|err| LookupError::Aggregation(format!("{category} task failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::FetchError;
    use crate::models::Meaning;

    struct MockSource {
        name: &'static str,
        outcome: fn() -> FetchOutcome<Definition>,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn new(name: &'static str, outcome: fn() -> FetchOutcome<Definition>) -> Arc<Self> {
            Arc::new(Self {
                name,
                outcome,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DefinitionSource for MockSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn fetch_definition(&self, _word: &str) -> FetchOutcome<Definition> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    fn sample_definition() -> FetchOutcome<Definition> {
        FetchOutcome::Ok(Definition {
            word: "test".to_string(),
            phonetic: None,
            meanings: vec![Meaning {
                part_of_speech: "noun".to_string(),
                definitions: Vec::new(),
            }],
        })
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let primary = MockSource::new("primary", sample_definition);
        let backup = MockSource::new("backup", sample_definition);
        let resolver = FallbackResolver::new(vec![
            primary.clone() as Arc<dyn DefinitionSource>,
            backup.clone() as Arc<dyn DefinitionSource>,
        ]);

        let outcome = resolver.resolve("test").await;
        assert!(outcome.is_ok());
        assert_eq!(primary.calls(), 1);
        assert_eq!(backup.calls(), 0);
    }

    #[tokio::test]
    async fn test_error_falls_through_to_backup() {
        let primary = MockSource::new("primary", || {
            FetchOutcome::Error(FetchError::Transport("connection refused".to_string()))
        });
        let backup = MockSource::new("backup", sample_definition);
        let resolver = FallbackResolver::new(vec![
            primary.clone() as Arc<dyn DefinitionSource>,
            backup.clone() as Arc<dyn DefinitionSource>,
        ]);

        let outcome = resolver.resolve("test").await;
        assert!(outcome.is_ok());
        assert_eq!(primary.calls(), 1);
        assert_eq!(backup.calls(), 1);
    }

    #[tokio::test]
    async fn test_all_sources_fail_yields_empty() {
        let primary = MockSource::new("primary", || FetchOutcome::Empty);
        let backup = MockSource::new("backup", || {
            FetchOutcome::Error(FetchError::Upstream(503))
        });
        let resolver = FallbackResolver::new(vec![
            primary.clone() as Arc<dyn DefinitionSource>,
            backup.clone() as Arc<dyn DefinitionSource>,
        ]);

        let outcome = resolver.resolve("test").await;
        assert!(matches!(outcome, FetchOutcome::Empty));
        assert_eq!(primary.calls(), 1);
        assert_eq!(backup.calls(), 1);
    }

    #[tokio::test]
    async fn test_no_sources_yields_empty() {
        let resolver = FallbackResolver::new(Vec::new());
        assert!(matches!(resolver.resolve("test").await, FetchOutcome::Empty));
    }
}
