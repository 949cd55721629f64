//! Process configuration loaded from environment variables.
//!
//! | Variable | Default |
//! | --- | --- |
//! | `HOST` | `127.0.0.1` |
//! | `PORT` | `8080` |
//! | `UNSPLASH_ACCESS_KEY` | unset |
//! | `OPENAI_API_KEY` | unset (offline vocabulary) |
//! | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
//! | `OPENAI_MODEL` | `gpt-3.5-turbo` |
//! | `PICTO_LINGUA_CORS_ORIGINS` | `http://localhost:3000` (comma-separated) |

use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub unsplash_access_key: Option<String>,
    /// `None` selects the offline vocabulary dataset.
    pub openai: Option<OpenAiSettings>,
    pub cors_origins: Vec<String>,
}

/// Connection settings for the chat-completion vocabulary generator.
#[derive(Clone, Debug)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = get("PORT")
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let openai = get("OPENAI_API_KEY").map(|api_key| OpenAiSettings {
            api_key,
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.into()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.into()),
        });

        let cors_origins = get("PICTO_LINGUA_CORS_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            unsplash_access_key: get("UNSPLASH_ACCESS_KEY"),
            openai,
            cors_origins,
        }
    }

    /// Config with no external credentials, for local development and tests.
    pub fn offline() -> Self {
        Self::from_lookup(|_| None)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}
