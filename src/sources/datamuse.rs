//! Datamuse client
//!
//! Serves three categories from one upstream: synonyms (`rel_syn`), antonyms
//! (`rel_ant`), and backup definitions (`sp` + `md=dp`). Datamuse needs no
//! API key and answers 200 with an empty array for unknown words.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{Definition, FetchOutcome};
use crate::normalize::{self, DatamuseEntry};
use crate::sources::{absorb, DefinitionSource};

/// Client for the Datamuse word-finding API (api.datamuse.com).
#[derive(Debug, Clone)]
pub struct DatamuseClient {
    client: reqwest::Client,
    base_url: String,
}

impl DatamuseClient {
    /// Creates a new client sharing the given HTTP client.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches synonyms for `word`, upstream order preserved.
    pub async fn synonyms(&self, word: &str) -> FetchOutcome<Vec<String>> {
        absorb("datamuse-synonyms", word, self.related("rel_syn", word).await)
    }

    /// Fetches antonyms for `word`, upstream order preserved.
    pub async fn antonyms(&self, word: &str) -> FetchOutcome<Vec<String>> {
        absorb("datamuse-antonyms", word, self.related("rel_ant", word).await)
    }

    async fn related(&self, relation: &str, word: &str) -> Result<Option<Vec<String>>, FetchError> {
        let entries = self.query(&[(relation, word)]).await?;
        let terms = normalize::terms_from_datamuse(entries);
        Ok(if terms.is_empty() { None } else { Some(terms) })
    }

    async fn try_definition(&self, word: &str) -> Result<Option<Definition>, FetchError> {
        let entries = self.query(&[("sp", word), ("md", "dp"), ("max", "1")]).await?;
        Ok(normalize::definition_from_datamuse(entries))
    }

    async fn query(&self, params: &[(&str, &str)]) -> Result<Vec<DatamuseEntry>, FetchError> {
        let response = self.client.get(&self.base_url).query(params).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Upstream(response.status().as_u16()));
        }
        Ok(response.json::<Vec<DatamuseEntry>>().await?)
    }
}

#[async_trait]
impl DefinitionSource for DatamuseClient {
    fn name(&self) -> &'static str {
        "datamuse"
    }

    async fn fetch_definition(&self, word: &str) -> FetchOutcome<Definition> {
        absorb(self.name(), word, self.try_definition(word).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> DatamuseClient {
        DatamuseClient::new(reqwest::Client::new(), server.uri())
    }

    #[tokio::test]
    async fn test_synonyms_preserve_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("rel_syn", "test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"word": "trial", "score": 2000},
                {"word": "exam", "score": 1000}
            ])))
            .mount(&server)
            .await;

        let outcome = client_for(&server).synonyms("test").await;
        assert_eq!(outcome.into_option().unwrap(), vec!["trial", "exam"]);
    }

    #[tokio::test]
    async fn test_empty_related_list_is_empty_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let outcome = client_for(&server).antonyms("test").await;
        assert!(matches!(outcome, FetchOutcome::Empty));
    }

    #[tokio::test]
    async fn test_backup_definition_from_defs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("sp", "test"))
            .and(query_param("md", "dp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"word": "test", "defs": ["n\ta trying experience"]}
            ])))
            .mount(&server)
            .await;

        let outcome = client_for(&server).fetch_definition("test").await;
        let definition = outcome.into_option().unwrap();
        assert_eq!(definition.word, "test");
        assert_eq!(definition.meanings[0].part_of_speech, "noun");
    }
}
