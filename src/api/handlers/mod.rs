use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::images::ImageError;
use crate::models::*;
use crate::sessions::SessionError;
use crate::vocabulary::{normalize_language, VocabularyError};

/// Images returned per theme search.
const IMAGES_PER_THEME: usize = 5;
const DEFAULT_VOCABULARY_COUNT: usize = 10;
const MIN_VOCABULARY_COUNT: i64 = 1;
const MAX_VOCABULARY_COUNT: i64 = 20;

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { error: msg.into() }))
}

fn bad_request(msg: impl Into<String>) -> ApiError {
    let msg = msg.into();
    tracing::warn!("Validation error: {}", msg);
    api_error(StatusCode::BAD_REQUEST, msg)
}

/// Log the full upstream error and hand the client a generic message.
fn upstream_error(e: impl std::fmt::Display, status: StatusCode, msg: &str) -> ApiError {
    tracing::error!("{}: {}", msg, e);
    api_error(status, msg)
}

fn session_error(e: SessionError) -> ApiError {
    tracing::warn!("{}", e);
    match e {
        SessionError::NotFound(_) => api_error(StatusCode::NOT_FOUND, "session not found"),
    }
}

fn vocabulary_error(e: VocabularyError) -> ApiError {
    match e {
        VocabularyError::DataUnavailable(_) => {
            tracing::warn!("{}", e);
            api_error(StatusCode::NOT_FOUND, e.to_string())
        }
        VocabularyError::UpstreamFailure(_) => {
            upstream_error(e, StatusCode::BAD_GATEWAY, "failed to get vocabulary")
        }
    }
}

fn image_error(e: ImageError) -> ApiError {
    upstream_error(e, StatusCode::INTERNAL_SERVER_ERROR, "failed to get images")
}

/// Require a non-empty, known theme id.
fn validate_theme(state: &AppState, theme: Option<&str>) -> Result<String, ApiError> {
    let theme = theme
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| bad_request("theme is required"))?;

    if !state.themes.is_valid(theme) {
        return Err(bad_request("invalid theme"));
    }
    Ok(theme.to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Themes
// ============================================================

pub async fn get_themes(State(state): State<AppState>) -> Json<ThemesResponse> {
    Json(ThemesResponse {
        themes: state.themes.all().to_vec(),
    })
}

// ============================================================
// Images
// ============================================================

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    pub theme: Option<String>,
}

pub async fn get_images(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Result<Json<ImagesResponse>, ApiError> {
    let theme = validate_theme(&state, query.theme.as_deref())?;

    let images = state
        .images
        .search(&theme, IMAGES_PER_THEME)
        .await
        .map_err(image_error)?;

    Ok(Json(ImagesResponse { theme, images }))
}

pub async fn get_random_image(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Result<Json<RandomImageResponse>, ApiError> {
    let theme = validate_theme(&state, query.theme.as_deref())?;

    let image = state.images.random(&theme).await.map_err(image_error)?;

    Ok(Json(RandomImageResponse { theme, image }))
}

// ============================================================
// Vocabulary
// ============================================================

/// `count` is kept as a string so a non-numeric value gets our own 400 message.
#[derive(Debug, Deserialize)]
pub struct VocabularyQuery {
    pub theme: Option<String>,
    pub count: Option<String>,
    pub language: Option<String>,
}

/// Parse and clamp the requested vocabulary count into `1..=20`.
fn parse_count(raw: Option<&str>) -> Result<usize, ApiError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_VOCABULARY_COUNT);
    };
    let count: i64 = raw
        .trim()
        .parse()
        .map_err(|_| bad_request("invalid count parameter"))?;
    Ok(count.clamp(MIN_VOCABULARY_COUNT, MAX_VOCABULARY_COUNT) as usize)
}

pub async fn get_vocabulary(
    State(state): State<AppState>,
    Query(query): Query<VocabularyQuery>,
) -> Result<Json<VocabularyResponse>, ApiError> {
    let theme = validate_theme(&state, query.theme.as_deref())?;
    let count = parse_count(query.count.as_deref())?;
    let language = normalize_language(query.language.as_deref());

    let vocabulary = state
        .vocabulary
        .get_or_generate(&theme, count, &language)
        .await
        .map_err(vocabulary_error)?;

    Ok(Json(VocabularyResponse {
        theme,
        count: vocabulary.len(),
        language,
        vocabulary,
    }))
}

// ============================================================
// Sessions
// ============================================================

/// Create a session when no id is given, otherwise merge progress into it.
pub async fn save_session(
    State(state): State<AppState>,
    Json(input): Json<SaveSessionInput>,
) -> Result<Json<SaveSessionResponse>, ApiError> {
    if input.theme_id.trim().is_empty() || input.image_id.trim().is_empty() {
        return Err(bad_request("theme_id and image_id are required"));
    }
    if !state.themes.is_valid(&input.theme_id) {
        return Err(bad_request("invalid theme"));
    }

    let (session_id, created) = match input.session_id.filter(|id| !id.is_empty()) {
        Some(id) => (id, false),
        None => (state.sessions.create(&input.theme_id, &input.image_id), true),
    };

    // Existing sessions always go through update so last_updated is refreshed.
    let saved = if created && input.progress.is_empty() {
        state.sessions.get(&session_id)
    } else {
        state.sessions.update(&session_id, input.progress)
    };
    let session = saved.map_err(session_error)?;

    Ok(Json(SaveSessionResponse {
        session_id,
        status: "success".to_string(),
        session,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub session_id: Option<String>,
}

pub async fn get_session(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<SessionEnvelope>, ApiError> {
    let session_id = query
        .session_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| bad_request("session_id is required"))?;

    state
        .sessions
        .get(&session_id)
        .map(|session| Json(SessionEnvelope { session }))
        .map_err(session_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_to_ten() {
        assert_eq!(parse_count(None).unwrap(), 10);
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(parse_count(Some("0")).unwrap(), 1);
        assert_eq!(parse_count(Some("-4")).unwrap(), 1);
        assert_eq!(parse_count(Some("7")).unwrap(), 7);
        assert_eq!(parse_count(Some("50")).unwrap(), 20);
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let (status, body) = parse_count(Some("lots")).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "invalid count parameter");
    }
}
