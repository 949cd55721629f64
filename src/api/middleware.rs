//! Cross-origin policy for the browser client.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer allowing the configured origins to call the API with credentials.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn app(origins: &[&str]) -> Router {
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(cors_layer(&origins))
    }

    async fn allowed_origin(app: Router, origin: &str) -> Option<String> {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn allows_configured_origin() {
        let origin = allowed_origin(app(&["http://localhost:3000"]), "http://localhost:3000").await;
        assert_eq!(origin.as_deref(), Some("http://localhost:3000"));
    }

    #[tokio::test]
    async fn rejects_other_origins() {
        let origin = allowed_origin(app(&["http://localhost:3000"]), "http://evil.test").await;
        assert!(origin.is_none());
    }

    #[tokio::test]
    async fn skips_invalid_origin_values() {
        let origin = allowed_origin(app(&["bad\norigin", "http://ok.test"]), "http://ok.test").await;
        assert_eq!(origin.as_deref(), Some("http://ok.test"));
    }
}
