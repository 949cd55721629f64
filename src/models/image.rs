use serde::{Deserialize, Serialize};

/// Photo metadata for a theme, including the attribution the image source
/// requires us to display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    pub id: String,
    /// Display URL, already resized for the learning view.
    pub url: String,
    pub download_url: String,
    pub description: String,
    pub width: u32,
    pub height: u32,
    pub created_at: String,
    pub photographer: String,
    pub photographer_url: String,
    pub unsplash_url: String,
    pub attribution_string: String,
}

/// Body of `GET /api/images`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub theme: String,
    pub images: Vec<Image>,
}

/// Body of `GET /api/images/random`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomImageResponse {
    pub theme: String,
    pub image: Image,
}
