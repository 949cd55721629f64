//! Vocabulary generation and memoization.
//!
//! A [`VocabularyProvider`] produces word lists for a theme, either from the
//! bundled offline dataset ([`StaticVocabularyProvider`]) or from a live
//! chat-completion API ([`OpenAiProvider`]). The provider is chosen once at
//! startup by [`provider_from_config`] and wrapped in a [`VocabularyCache`].

mod cache;
mod offline;
mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;
use crate::models::VocabularyItem;

pub use cache::{CacheKey, VocabularyCache};
pub use offline::StaticVocabularyProvider;
pub use openai::OpenAiProvider;

/// Language used when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Errors surfaced by vocabulary providers and forwarded verbatim by the cache.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    /// The offline dataset has no entries for the theme.
    #[error("no vocabulary data available for theme: {0}")]
    DataUnavailable(String),

    /// The live generator failed, timed out, or returned unusable content.
    #[error("vocabulary generation failed: {0}")]
    UpstreamFailure(String),
}

impl From<reqwest::Error> for VocabularyError {
    fn from(e: reqwest::Error) -> Self {
        Self::UpstreamFailure(e.to_string())
    }
}

impl From<serde_json::Error> for VocabularyError {
    fn from(e: serde_json::Error) -> Self {
        Self::UpstreamFailure(format!("unparseable vocabulary response: {}", e))
    }
}

/// Source of vocabulary lists for a theme.
#[async_trait]
pub trait VocabularyProvider: Send + Sync {
    /// Produce up to `count` items for `theme` in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::DataUnavailable`] when an offline provider has
    /// no data for the theme, or [`VocabularyError::UpstreamFailure`] when a
    /// live call fails.
    async fn generate(
        &self,
        theme: &str,
        count: usize,
        language: &str,
    ) -> Result<Vec<VocabularyItem>, VocabularyError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// Pick the live provider when an API key is configured, the offline dataset otherwise.
pub fn provider_from_config(config: &Config) -> Arc<dyn VocabularyProvider> {
    match &config.openai {
        Some(settings) => {
            let prefix: String = settings.api_key.chars().take(5).collect();
            tracing::info!(
                model = %settings.model,
                "Using live vocabulary generation (key {}...)",
                prefix
            );
            Arc::new(OpenAiProvider::new(settings.clone()))
        }
        None => {
            tracing::warn!("No OpenAI API key configured, serving offline vocabulary dataset");
            Arc::new(StaticVocabularyProvider::seeded())
        }
    }
}

/// Lowercase and trim a requested language, defaulting to English.
pub fn normalize_language(language: Option<&str>) -> String {
    language
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}
