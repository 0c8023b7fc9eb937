//! Invite parameters: use case behavior for the invite flow.

use globetrotter_domain::LinkPolicy;
use serde::{Deserialize, Serialize};

/// Default site origin for share links (local development server).
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Controls how invites are derived and when their links are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteParams {
    /// Public origin of the game site, e.g. `https://globetrotter.example`.
    pub origin: String,
    /// Whether a link is shown after a failed submit.
    pub link_policy: LinkPolicy,
}

impl Default for InviteParams {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            link_policy: LinkPolicy::default(),
        }
    }
}

impl InviteParams {
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_link_policy(mut self, policy: LinkPolicy) -> Self {
        self.link_policy = policy;
        self
    }
}
