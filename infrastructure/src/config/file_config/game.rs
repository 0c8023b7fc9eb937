//! Game site configuration from TOML (`[game]` section)

use globetrotter_application::DEFAULT_ORIGIN;
use serde::{Deserialize, Serialize};

/// Raw game site configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Public origin used in share and preview-image links
    pub origin: String,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}
