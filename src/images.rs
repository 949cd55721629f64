//! Theme images from the Unsplash photo search API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Image;

/// Production API root.
pub const UNSPLASH_URL: &str = "https://api.unsplash.com";

/// Appended to the regular photo URL to get a crop sized for the learning view.
const RESIZE_PARAMS: &str = "&w=800&h=600&fit=crop&crop=entropy";

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image search is not configured (missing access key)")]
    NotConfigured,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(StatusCode),
}

/// Search backend for theme images.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<Image>, ImageError>;

    async fn random(&self, query: &str) -> Result<Image, ImageError>;
}

#[derive(Debug, Clone)]
pub struct UnsplashClient {
    base_url: String,
    access_key: Option<String>,
    client: Client,
}

impl UnsplashClient {
    pub fn new(access_key: Option<String>) -> Self {
        Self::with_base_url(UNSPLASH_URL, access_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, access_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_key,
            client: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ImageError> {
        let key = self.access_key.as_deref().ok_or(ImageError::NotConfigured)?;
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Authorization", format!("Client-ID {}", key))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ImageError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ImageSource for UnsplashClient {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<Image>, ImageError> {
        let response: SearchResponse = self
            .get(
                "/search/photos",
                &[
                    ("query", query.to_string()),
                    ("per_page", count.to_string()),
                    ("orientation", "landscape".to_string()),
                ],
            )
            .await?;

        Ok(response.results.into_iter().map(Photo::into_image).collect())
    }

    async fn random(&self, query: &str) -> Result<Image, ImageError> {
        let photo: Photo = self
            .get(
                "/photos/random",
                &[
                    ("query", query.to_string()),
                    ("orientation", "landscape".to_string()),
                ],
            )
            .await?;

        Ok(photo.into_image())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    id: String,
    #[serde(default)]
    description: Option<String>,
    width: u32,
    height: u32,
    #[serde(default)]
    created_at: String,
    urls: PhotoUrls,
    links: PhotoLinks,
    user: Photographer,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct PhotoLinks {
    #[serde(default)]
    download: String,
    #[serde(default)]
    html: String,
}

#[derive(Debug, Deserialize)]
struct Photographer {
    name: String,
    links: PhotographerLinks,
}

#[derive(Debug, Deserialize)]
struct PhotographerLinks {
    #[serde(default)]
    html: String,
}

impl Photo {
    fn into_image(self) -> Image {
        Image {
            id: self.id,
            url: format!("{}{}", self.urls.regular, RESIZE_PARAMS),
            download_url: self.links.download,
            description: self.description.unwrap_or_default(),
            width: self.width,
            height: self.height,
            created_at: self.created_at,
            attribution_string: format!("Photo by {} on Unsplash", self.user.name),
            photographer: self.user.name,
            photographer_url: self.user.links.html,
            unsplash_url: self.links.html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHOTO_JSON: &str = r#"{
        "id": "abc123",
        "description": null,
        "width": 4000,
        "height": 3000,
        "created_at": "2024-05-01T10:00:00Z",
        "urls": { "raw": "https://images.test/raw", "regular": "https://images.test/photo?ixid=1", "small": "https://images.test/small" },
        "links": { "download": "https://unsplash.test/abc123/download", "html": "https://unsplash.test/photos/abc123" },
        "user": { "name": "Ada Lens", "portfolio_url": null, "links": { "html": "https://unsplash.test/@ada" } }
    }"#;

    #[test]
    fn maps_photo_to_image_with_resize_and_attribution() {
        let photo: Photo = serde_json::from_str(PHOTO_JSON).unwrap();
        let image = photo.into_image();

        assert_eq!(image.id, "abc123");
        assert_eq!(
            image.url,
            "https://images.test/photo?ixid=1&w=800&h=600&fit=crop&crop=entropy"
        );
        assert_eq!(image.description, "");
        assert_eq!(image.photographer, "Ada Lens");
        assert_eq!(image.photographer_url, "https://unsplash.test/@ada");
        assert_eq!(image.unsplash_url, "https://unsplash.test/photos/abc123");
        assert_eq!(image.attribution_string, "Photo by Ada Lens on Unsplash");
    }

    #[tokio::test]
    async fn search_without_key_is_not_configured() {
        let client = UnsplashClient::new(None);
        let err = client.search("park", 5).await.unwrap_err();
        assert!(matches!(err, ImageError::NotConfigured));
    }
}
