//! Configuration for the inference client
//!
//! Read once at process start from the environment (and a `.env` file if
//! present), then passed into the client constructor.

use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::PromptLabError;

pub const DEFAULT_MODEL_ID: &str = "openai/gpt-oss-120b:fastest";
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";

const API_TOKEN_KEYS: &[&str] = &["HF_API_TOKEN", "API_TOKEN"];
const MODEL_ID_KEYS: &[&str] = &["HF_MODEL_ID", "MODEL_ID"];
const BASE_URL_KEY: &str = "HF_BASE_URL";
const TIMEOUT_KEY: &str = "HF_TIMEOUT_SECS";

/// Inference client configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Bearer credential; sent untouched, never validated locally
    pub api_token: Option<String>,
    pub model_id: String,
    pub base_url: String,
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &self.api_token.as_ref().map(|_| "<set>"))
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load from the process environment, reading `.env` first if it exists
    pub fn from_env() -> Result<Self, PromptLabError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => warn!(error = %e, "Ignoring unreadable .env file"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PromptLabError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let first = |keys: &[&str]| keys.iter().find_map(|key| get(*key));

        let timeout = match get(TIMEOUT_KEY) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    PromptLabError::config(format!(
                        "{} must be a whole number of seconds, got {:?}",
                        TIMEOUT_KEY, raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let config = Self {
            api_token: first(API_TOKEN_KEYS),
            model_id: first(MODEL_ID_KEYS).unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            base_url: get(BASE_URL_KEY).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
        };

        if config.api_token.is_none() {
            warn!("No HF_API_TOKEN set - requests will be sent without credentials");
        }

        Ok(config)
    }

    /// Override the model identifier
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Override the endpoint base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API token
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Full URL of the chat-completion endpoint
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
