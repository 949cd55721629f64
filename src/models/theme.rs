use serde::{Deserialize, Serialize};

/// A named vocabulary domain the learner can pick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemesResponse {
    pub themes: Vec<Theme>,
}
