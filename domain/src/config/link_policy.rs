//! Invite link display policy

use serde::{Deserialize, Serialize};

/// Whether a generated invite link is shown when persisting it failed.
///
/// The link is derived locally before the record is submitted, so it can be
/// shown either way; the question is whether a friend following it would
/// find the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkPolicy {
    /// Always show the link; a persistence failure is reported next to it.
    #[default]
    Always,
    /// Only show the link once the record was stored.
    OnSuccess,
}

impl LinkPolicy {
    pub fn shows_link(&self, persisted: bool) -> bool {
        match self {
            LinkPolicy::Always => true,
            LinkPolicy::OnSuccess => persisted,
        }
    }
}
