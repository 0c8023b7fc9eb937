//! Social-preview card parameters
//!
//! The image itself is rendered by the site's `/api/og-image` endpoint; this
//! type captures what goes on the card and the defaults the endpoint applies
//! to missing query parameters.

use super::MAX_SCORE;
use serde::Serialize;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Username shown when the query has none.
pub const DEFAULT_CARD_USERNAME: &str = "Someone";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub username: String,
    pub score: u32,
}

impl PreviewCard {
    /// Build a card from raw `username`/`score` query values.
    ///
    /// Missing or empty values fall back to `"Someone"` and `0`; a score that
    /// is not a number also counts as `0`.
    pub fn from_query(username: Option<&str>, score: Option<&str>) -> Self {
        let username = username
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_CARD_USERNAME)
            .to_string();
        let score = score.and_then(|s| s.trim().parse().ok()).unwrap_or(0);
        Self { username, score }
    }

    pub fn headline(&self) -> String {
        format!("\"{}\" has challenged you!", self.username)
    }

    pub fn score_line(&self) -> String {
        format!(
            "They scored {}/{}. Can you beat their score?",
            self.score, MAX_SCORE
        )
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (OG_IMAGE_WIDTH, OG_IMAGE_HEIGHT)
    }
}
