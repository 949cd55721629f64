mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::images::{ImageSource, UnsplashClient};
use crate::sessions::SessionStore;
use crate::themes::ThemeCatalog;
use crate::vocabulary::{provider_from_config, VocabularyCache};

/// Shared handles passed to every request handler.
///
/// Built once at startup; tests build a fresh one per case.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub vocabulary: Arc<VocabularyCache>,
    pub themes: Arc<ThemeCatalog>,
    pub images: Arc<dyn ImageSource>,
}

impl AppState {
    pub fn new(vocabulary: VocabularyCache, images: Arc<dyn ImageSource>) -> Self {
        Self {
            sessions: SessionStore::new(),
            vocabulary: Arc::new(vocabulary),
            themes: Arc::new(ThemeCatalog::default()),
            images,
        }
    }

    /// Wire the production collaborators selected by `config`.
    pub fn from_config(config: &Config) -> Self {
        let vocabulary = VocabularyCache::new(provider_from_config(config));
        let images = Arc::new(UnsplashClient::new(config.unsplash_access_key.clone()));
        Self::new(vocabulary, images)
    }
}

pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let api = Router::new()
        // Themes
        .route("/themes", get(handlers::get_themes))
        // Images
        .route("/images", get(handlers::get_images))
        .route("/images/random", get(handlers::get_random_image))
        // Vocabulary
        .route("/vocabulary", get(handlers::get_vocabulary))
        // Sessions
        .route("/session", get(handlers::get_session).post(handlers::save_session))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::cors_layer(cors_origins)),
        )
        .with_state(state)
}
