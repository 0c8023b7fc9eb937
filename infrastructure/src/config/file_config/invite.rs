//! Invite configuration from TOML (`[invite]` section)

use globetrotter_domain::LinkPolicy;
use serde::{Deserialize, Serialize};

/// Raw invite configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInviteConfig {
    /// When to show a link whose record could not be stored
    pub link_policy: LinkPolicy,
}
