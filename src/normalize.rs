//! Normalizer
//!
//! Pure converters from each upstream's idiosyncratic JSON schema into the
//! canonical shapes in [`crate::models`]. No I/O, no state; source clients
//! decode bodies into the raw DTOs here and hand them over.

use serde::Deserialize;

use crate::models::{Definition, DefinitionText, Meaning, MAX_IMAGES};

// == Free Dictionary API ==
// https://api.dictionaryapi.dev returns an array of entries per word.

/// Raw entry as served by the Free Dictionary API.
#[derive(Debug, Deserialize)]
pub struct DictApiEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<DictApiMeaning>,
}

#[derive(Debug, Deserialize)]
pub struct DictApiMeaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<DictApiDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct DictApiDefinition {
    pub definition: String,
}

/// Converts a Free Dictionary API response into a canonical definition.
///
/// Only the first entry is kept, matching the upstream's own ordering of
/// entries by relevance. Returns `None` for an empty response array.
pub fn definition_from_dictionary_api(entries: Vec<DictApiEntry>) -> Option<Definition> {
    let entry = entries.into_iter().next()?;

    let meanings = entry
        .meanings
        .into_iter()
        .map(|meaning| Meaning {
            part_of_speech: meaning.part_of_speech,
            definitions: meaning
                .definitions
                .into_iter()
                .map(|def| DefinitionText {
                    definition: def.definition,
                })
                .collect(),
        })
        .collect();

    Some(Definition {
        word: entry.word,
        phonetic: entry.phonetic,
        meanings,
    })
}

// == Datamuse ==
// https://api.datamuse.com/words returns a flat array of scored word entries.
// With `md=dp`, each entry may carry `defs` strings of the form "pos\ttext".

/// Raw entry as served by Datamuse.
#[derive(Debug, Deserialize)]
pub struct DatamuseEntry {
    pub word: String,
    #[serde(default)]
    pub defs: Vec<String>,
}

/// Converts a Datamuse definition lookup into a canonical definition.
///
/// Datamuse has no phonetics and no nested meaning structure; the tab-separated
/// `defs` strings are regrouped by part of speech, preserving first-seen order.
/// Returns `None` when no entry carries definitions.
pub fn definition_from_datamuse(entries: Vec<DatamuseEntry>) -> Option<Definition> {
    let entry = entries.into_iter().find(|entry| !entry.defs.is_empty())?;

    // Group "pos\ttext" strings into meanings, one per part of speech.
    let mut meanings: Vec<Meaning> = Vec::new();
    for def in &entry.defs {
        let (pos, text) = match def.split_once('\t') {
            Some((pos, text)) => (expand_part_of_speech(pos), text),
            None => ("unknown".to_string(), def.as_str()),
        };

        let sense = DefinitionText {
            definition: text.to_string(),
        };
        match meanings.iter_mut().find(|m| m.part_of_speech == pos) {
            Some(meaning) => meaning.definitions.push(sense),
            None => meanings.push(Meaning {
                part_of_speech: pos,
                definitions: vec![sense],
            }),
        }
    }

    Some(Definition {
        word: entry.word,
        phonetic: None,
        meanings,
    })
}

/// Extracts the plain word list from a Datamuse related-words response,
/// preserving upstream order.
pub fn terms_from_datamuse(entries: Vec<DatamuseEntry>) -> Vec<String> {
    entries.into_iter().map(|entry| entry.word).collect()
}

/// Expands Datamuse's abbreviated part-of-speech tags.
fn expand_part_of_speech(tag: &str) -> String {
    match tag {
        "n" => "noun",
        "v" => "verb",
        "adj" => "adjective",
        "adv" => "adverb",
        "u" => "unknown",
        other => other,
    }
    .to_string()
}

// == Unsplash ==
// https://api.unsplash.com/search/photos wraps photos in a `results` array.

/// Raw search response as served by Unsplash.
#[derive(Debug, Deserialize)]
pub struct UnsplashSearchResponse {
    #[serde(default)]
    pub results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct UnsplashPhoto {
    pub urls: UnsplashUrls,
}

#[derive(Debug, Deserialize)]
pub struct UnsplashUrls {
    pub regular: String,
}

/// Extracts display URLs from an Unsplash search response, truncated to the
/// first [`MAX_IMAGES`] entries in upstream order.
pub fn images_from_unsplash(response: UnsplashSearchResponse) -> Vec<String> {
    response
        .results
        .into_iter()
        .take(MAX_IMAGES)
        .map(|photo| photo.urls.regular)
        .collect()
}
