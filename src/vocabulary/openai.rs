//! Live vocabulary generation through an OpenAI-compatible chat-completion API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{VocabularyError, VocabularyProvider};
use crate::config::OpenAiSettings;
use crate::models::VocabularyItem;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.7;
const SYSTEM_PROMPT: &str =
    "You are a language learning tool that generates vocabulary words with definitions and examples.";

#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    settings: OpenAiSettings,
}

impl OpenAiProvider {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl VocabularyProvider for OpenAiProvider {
    async fn generate(
        &self,
        theme: &str,
        count: usize,
        language: &str,
    ) -> Result<Vec<VocabularyItem>, VocabularyError> {
        let prompt = build_prompt(theme, count, language);
        tracing::debug!(theme, count, language, "Requesting vocabulary generation");

        let payload = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VocabularyError::UpstreamFailure(format!(
                "generator returned {}: {}",
                status, body
            )));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| VocabularyError::UpstreamFailure("empty generator response".into()))?;

        tracing::debug!(raw = %content, "Raw generator response");
        let mut items = parse_vocabulary(&content)?;
        tracing::debug!(items = items.len(), "Parsed generated vocabulary");
        items.truncate(count);
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// User prompt asking for `count` words on `theme`. Dutch requests also ask for
/// the translated fields.
pub(crate) fn build_prompt(theme: &str, count: usize, language: &str) -> String {
    if language == "dutch" {
        format!(
            r#"Generate {count} vocabulary words related to the theme "{theme}" in both English and Dutch.
Each word should have:
- English word
- English definition
- Example sentence in English
- Dutch translation of the word
- Dutch definition
- Example sentence in Dutch

Format your response as a JSON array of objects, where each object contains:
- "word": the English vocabulary word
- "definition": a brief English definition of the word
- "example": a simple example sentence using the word in English
- "dutch_word": the Dutch translation of the word
- "dutch_definition": a brief Dutch definition of the word
- "dutch_example": a simple example sentence using the word in Dutch

Only provide the JSON output, no additional text."#
        )
    } else {
        format!(
            r#"Generate {count} vocabulary words related to the theme "{theme}".
Each word should have a definition and a simple example sentence.
Format your response as a JSON array of objects, where each object contains:
- "word": the vocabulary word
- "definition": a brief definition of the word
- "example": a simple example sentence using the word

Only provide the JSON output, no additional text."#
        )
    }
}

/// Strip a surrounding markdown code fence, if the model added one.
pub(crate) fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

pub(crate) fn parse_vocabulary(content: &str) -> Result<Vec<VocabularyItem>, VocabularyError> {
    Ok(serde_json::from_str(strip_code_fences(content))?)
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
