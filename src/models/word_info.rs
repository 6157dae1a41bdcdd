//! Canonical lookup result shapes
//!
//! Every upstream schema is normalized into these types; they are the only
//! shapes returned to callers. Serialized with camelCase field names.

use serde::{Deserialize, Serialize};

/// Maximum number of image URLs kept in a result.
pub const MAX_IMAGES: usize = 10;

// == Word Info ==
/// Merged lookup result for one word.
///
/// Each category is atomically present-or-absent: a failed or empty category
/// is represented by `None` / an empty list, never by a partially filled one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    /// Normalized definition, `None` when every definition source failed
    pub definition: Option<Definition>,
    /// Synonyms in upstream order
    pub synonyms: Vec<String>,
    /// Antonyms in upstream order
    pub antonyms: Vec<String>,
    /// Image URLs in upstream order, at most [`MAX_IMAGES`]
    pub images: Vec<String>,
}

impl WordInfo {
    /// Creates an empty result: no definition, no related words, no images.
    pub fn empty() -> Self {
        Self {
            definition: None,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
            images: Vec::new(),
        }
    }
}

// == Definition ==
/// Normalized dictionary entry, identical in shape regardless of which
/// upstream supplied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    /// The headword as reported by the upstream
    pub word: String,
    /// Phonetic transcription when the upstream provides one
    pub phonetic: Option<String>,
    /// Senses grouped by part of speech
    pub meanings: Vec<Meaning>,
}

/// One part-of-speech group within a definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionText>,
}

/// A single sense text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionText {
    pub definition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_info_serializes_camel_case() {
        let info = WordInfo {
            definition: Some(Definition {
                word: "test".to_string(),
                phonetic: Some("/test/".to_string()),
                meanings: vec![Meaning {
                    part_of_speech: "noun".to_string(),
                    definitions: vec![DefinitionText {
                        definition: "a procedure for critical evaluation".to_string(),
                    }],
                }],
            }),
            synonyms: vec!["trial".to_string()],
            antonyms: Vec::new(),
            images: Vec::new(),
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["definition"]["word"], "test");
        assert_eq!(json["definition"]["meanings"][0]["partOfSpeech"], "noun");
        assert_eq!(json["synonyms"][0], "trial");
        assert!(json["antonyms"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_empty_word_info() {
        let info = WordInfo::empty();
        let json = serde_json::to_value(&info).unwrap();
        assert!(json["definition"].is_null());
        assert!(json["synonyms"].as_array().unwrap().is_empty());
        assert!(json["images"].as_array().unwrap().is_empty());
    }
}
