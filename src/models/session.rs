use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A learner's in-progress interaction with a theme/image pairing.
///
/// `session_id`, `theme_id`, `image_id` and `started_at` are fixed at creation.
/// Only `progress` and `last_updated` change afterwards, and only through
/// [`SessionStore::update`](crate::sessions::SessionStore::update).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub session_id: String,
    pub theme_id: String,
    pub image_id: String,
    /// Word → latest reported progress for that word.
    pub progress: HashMap<String, ProgressItem>,
    pub started_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Learning progress reported by the client for a single word.
///
/// Each update replaces the stored item for its word wholesale; counters are
/// accumulated client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressItem {
    pub word: String,
    pub status: ProgressStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken_ms: Option<u64>,
    #[serde(default)]
    pub seen_count: u32,
    #[serde(default)]
    pub known_count: u32,
}

/// How well the learner knows a word.
///
/// - `Known`: Recognised without help
/// - `Learning`: Seen but not yet reliable
/// - `Difficult`: Flagged by the learner as hard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Known,
    Learning,
    Difficult,
}

/// Body of `POST /api/session`.
///
/// Without a `session_id` a new session is created for the theme/image pair;
/// with one, `progress` is merged into the existing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSessionInput {
    pub theme_id: String,
    pub image_id: String,
    #[serde(default)]
    pub progress: HashMap<String, ProgressItem>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSessionResponse {
    pub session_id: String,
    pub status: String,
    pub session: Session,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEnvelope {
    pub session: Session,
}
