//! API configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Largest accepted `retry_backoff_ms`.
pub const MAX_RETRY_BACKOFF_MS: u64 = 10_000;

/// Raw API client configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Value of the `api_key` query parameter
    pub api_key: Option<String>,
    /// Per-attempt timeout in milliseconds
    pub timeout_ms: u64,
    /// Retries after a timed-out attempt
    pub retries: u32,
    /// Linear backoff step between timeout retries, in milliseconds
    pub retry_backoff_ms: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_ms: 1000,
            retries: 3,
            retry_backoff_ms: 0,
        }
    }
}

impl FileApiConfig {
    /// The API key, treating a blank value as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
