//! In-memory registry of learning sessions.
//!
//! The store is a cheap-to-clone handle; clones share the same map. Reads take
//! a shared lock and may run in parallel, while `create` and `update` take the
//! write lock for the map operation only.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{ProgressItem, Session};

/// Errors surfaced by [`SessionStore`].
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session with empty progress and return its id.
    pub fn create(&self, theme_id: &str, image_id: &str) -> String {
        let session_id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let session = Session {
            session_id: session_id.clone(),
            theme_id: theme_id.to_string(),
            image_id: image_id.to_string(),
            progress: HashMap::new(),
            started_at: now,
            last_updated: now,
        };

        self.sessions.write().insert(session_id.clone(), session);

        tracing::info!(%session_id, theme_id, image_id, "Created session");
        session_id
    }

    /// Snapshot of a session's current state.
    pub fn get(&self, session_id: &str) -> Result<Session, SessionError> {
        self.sessions
            .read()
            .get(session_id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }

    /// Merge `progress` into a session, replacing each reported word's entry
    /// wholesale, and return the updated snapshot.
    ///
    /// All words from one call become visible to readers together. An unknown
    /// `session_id` leaves the store untouched.
    pub fn update(
        &self,
        session_id: &str,
        progress: HashMap<String, ProgressItem>,
    ) -> Result<Session, SessionError> {
        let word_count = progress.len();
        let snapshot = {
            let mut sessions = self.sessions.write();
            let session = sessions
                .get_mut(session_id)
                .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;

            session.progress.extend(progress);
            // Wall clock may step backwards; last_updated must not.
            session.last_updated = Utc::now().max(session.last_updated);
            session.clone()
        };

        tracing::debug!(session_id, word_count, "Merged session progress");
        Ok(snapshot)
    }

    /// Number of sessions currently held.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgressStatus;

    fn item(word: &str, status: ProgressStatus, seen: u32) -> ProgressItem {
        ProgressItem {
            word: word.to_string(),
            status,
            time_taken_ms: None,
            seen_count: seen,
            known_count: 0,
        }
    }

    #[test]
    fn clones_share_the_same_sessions() {
        let store = SessionStore::new();
        let other = store.clone();

        let id = store.create("park", "img1");

        assert_eq!(other.get(&id).unwrap().theme_id, "park");
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn update_of_unknown_session_does_not_create_one() {
        let store = SessionStore::new();
        let progress = HashMap::from([("bench".to_string(), item("bench", ProgressStatus::Known, 1))]);

        let err = store.update("missing", progress).unwrap_err();

        assert_eq!(err, SessionError::NotFound("missing".to_string()));
        assert!(store.is_empty());
    }

    #[test]
    fn update_with_empty_progress_only_touches_timestamp() {
        let store = SessionStore::new();
        let id = store.create("cafe", "img1");
        let before = store.get(&id).unwrap();

        let after = store.update(&id, HashMap::new()).unwrap();

        assert!(after.progress.is_empty());
        assert!(after.last_updated >= before.last_updated);
        assert_eq!(after.started_at, before.started_at);
    }
}
