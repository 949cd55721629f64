use serde::{Deserialize, Serialize};

/// A vocabulary word with its definition and an example sentence.
///
/// The `dutch_*` fields are only populated for Dutch-language requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyItem {
    pub word: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch_word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch_definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch_example: Option<String>,
}

impl VocabularyItem {
    /// Build an English-only item.
    pub fn new(word: &str, definition: &str, example: &str) -> Self {
        Self {
            word: word.to_string(),
            definition: definition.to_string(),
            example: Some(example.to_string()),
            dutch_word: None,
            dutch_definition: None,
            dutch_example: None,
        }
    }

    /// Attach a Dutch translation to an item.
    pub fn with_dutch(mut self, word: &str, definition: &str, example: &str) -> Self {
        self.dutch_word = Some(word.to_string());
        self.dutch_definition = Some(definition.to_string());
        self.dutch_example = Some(example.to_string());
        self
    }
}

/// Body of `GET /api/vocabulary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyResponse {
    pub theme: String,
    pub count: usize,
    pub language: String,
    pub vocabulary: Vec<VocabularyItem>,
}
