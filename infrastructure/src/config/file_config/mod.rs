//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod game;
mod invite;
mod output;

pub use api::{DEFAULT_BASE_URL, FileApiConfig, MAX_RETRY_BACKOFF_MS};
pub use game::FileGameConfig;
pub use invite::FileInviteConfig;
pub use output::FileOutputConfig;

use crate::api::ApiClientConfig;
use globetrotter_application::InviteParams;
use globetrotter_domain::{ConfigIssue, ConfigIssueCode, parse_origin};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Trivia API connection
    pub api: FileApiConfig,
    /// Game site used for share links
    pub game: FileGameConfig,
    /// Invite flow behavior
    pub invite: FileInviteConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the configuration unusable; warnings are reported and
    /// the program carries on.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "api.base_url".to_string(),
                },
                "api.base_url cannot be empty",
            ));
        } else if let Err(e) = Url::parse(base_url) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "api.base_url".to_string(),
                    value: base_url.to_string(),
                },
                format!("api.base_url: '{}' is not a valid URL ({})", base_url, e),
            ));
        }

        if self.api.timeout_ms == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "api.timeout_ms".to_string(),
                    value: "0".to_string(),
                },
                "api.timeout_ms cannot be 0",
            ));
        }

        if self.api.retry_backoff_ms > MAX_RETRY_BACKOFF_MS {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "api.retry_backoff_ms".to_string(),
                    value: self.api.retry_backoff_ms.to_string(),
                },
                format!(
                    "api.retry_backoff_ms cannot exceed {} (got {})",
                    MAX_RETRY_BACKOFF_MS, self.api.retry_backoff_ms
                ),
            ));
        }

        if self.api.api_key().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey,
                "api.api_key is not set; requests will be sent without a key",
            ));
        }

        if let Err(e) = parse_origin(&self.game.origin) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "game.origin".to_string(),
                    value: self.game.origin.clone(),
                },
                format!("game.origin: {}", e),
            ));
        }

        issues
    }

    /// Settings for the HTTP client.
    pub fn to_api_client_config(&self) -> ApiClientConfig {
        let mut config = ApiClientConfig::new(self.api.base_url.trim())
            .with_timeout(Duration::from_millis(self.api.timeout_ms))
            .with_retries(self.api.retries)
            .with_retry_backoff(Duration::from_millis(self.api.retry_backoff_ms));
        if let Some(key) = self.api.api_key() {
            config = config.with_api_key(key);
        }
        config
    }

    /// Parameters for the invite flow.
    pub fn to_invite_params(&self) -> InviteParams {
        InviteParams::default()
            .with_origin(self.game.origin.trim())
            .with_link_policy(self.invite.link_policy)
    }
}
