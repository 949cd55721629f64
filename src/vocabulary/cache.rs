//! Write-once memoization of provider results.
//!
//! Every key owns an async once-cell. Concurrent first requests for a key wait
//! on a single provider call; a failed call leaves the cell empty so the next
//! request retries, and the empty slot is dropped. Stored entries are never
//! evicted.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OnceCell;

use super::{VocabularyError, VocabularyProvider};
use crate::models::VocabularyItem;

/// Identity of a memoized response. `count` is part of the key as given; the
/// caller is responsible for clamping it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub theme: String,
    pub count: usize,
    pub language: String,
}

impl CacheKey {
    pub fn new(theme: &str, count: usize, language: &str) -> Self {
        Self {
            theme: theme.to_string(),
            count,
            language: language.to_string(),
        }
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}_{}", self.theme, self.count, self.language)
    }
}

type Slot = Arc<OnceCell<Arc<[VocabularyItem]>>>;

pub struct VocabularyCache {
    provider: Arc<dyn VocabularyProvider>,
    slots: Mutex<HashMap<CacheKey, Slot>>,
}

impl VocabularyCache {
    pub fn new(provider: Arc<dyn VocabularyProvider>) -> Self {
        Self {
            provider,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return the memoized items for the key, calling the provider on a miss.
    ///
    /// # Errors
    ///
    /// Forwards the provider's [`VocabularyError`] unchanged; nothing is stored.
    pub async fn get_or_generate(
        &self,
        theme: &str,
        count: usize,
        language: &str,
    ) -> Result<Vec<VocabularyItem>, VocabularyError> {
        let key = CacheKey::new(theme, count, language);
        let slot: Slot = self.slots.lock().entry(key.clone()).or_default().clone();

        if let Some(items) = slot.get() {
            tracing::debug!(%key, items = items.len(), "Vocabulary cache hit");
            return Ok(items.to_vec());
        }

        let result = slot
            .get_or_try_init(|| async {
                tracing::debug!(%key, provider = self.provider.name(), "Vocabulary cache miss");
                match self.provider.generate(theme, count, language).await {
                    Ok(items) => {
                        tracing::debug!(%key, items = items.len(), "Cached vocabulary");
                        Ok(Arc::from(items))
                    }
                    Err(e) => {
                        tracing::debug!(%key, error = %e, "Vocabulary provider failed");
                        Err(e)
                    }
                }
            })
            .await;

        match result {
            Ok(items) => Ok(items.to_vec()),
            Err(e) => {
                self.discard_empty_slot(&key, &slot);
                Err(e)
            }
        }
    }

    /// Drop a slot left empty by a failed call so failing keys do not pile up.
    ///
    /// Kept while other callers still wait on it; the last one out removes it.
    fn discard_empty_slot(&self, key: &CacheKey, slot: &Slot) {
        let mut slots = self.slots.lock();
        let unshared = slots
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, slot) && Arc::strong_count(slot) == 2);
        if unshared && !slot.initialized() {
            slots.remove(key);
        }
    }

    /// Number of keys holding a stored result.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::StaticVocabularyProvider;

    #[tokio::test]
    async fn failed_lookups_leave_no_slots_behind() {
        let cache = VocabularyCache::new(Arc::new(StaticVocabularyProvider::new()));

        for language in ["english", "klingon", "elvish"] {
            let err = cache.get_or_generate("park", 5, language).await.unwrap_err();
            assert_eq!(err, VocabularyError::DataUnavailable("park".to_string()));
        }

        assert!(cache.slots.lock().is_empty());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn successful_lookup_keeps_its_slot() {
        let cache = VocabularyCache::new(Arc::new(StaticVocabularyProvider::seeded()));

        cache.get_or_generate("cafe", 3, "english").await.unwrap();

        assert_eq!(cache.slots.lock().len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_key_display_joins_parts() {
        let key = CacheKey::new("park", 5, "dutch");
        assert_eq!(key.to_string(), "park_5_dutch");
    }

    #[test]
    fn cache_keys_differ_by_language() {
        assert_ne!(
            CacheKey::new("park", 5, "english"),
            CacheKey::new("park", 5, "dutch")
        );
    }
}
