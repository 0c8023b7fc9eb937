//! Invitee records and the invite landing page metadata

use super::links::{image_url, invite_url};
use super::preview::{OG_IMAGE_HEIGHT, OG_IMAGE_WIDTH};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

pub const SITE_NAME: &str = "Globetrotter";
pub const PAGE_TITLE: &str = "PLAY | Globetrotter";
pub const PAGE_DESCRIPTION: &str = "Test your travel knowledge and embark on the ultimate \
guessing adventure. In Globetrotter, you'll receive cryptic clues about famous destinations \
across the world.";

/// A persisted invite as returned by `GET /users/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitee {
    pub id: i64,
    pub username: String,
    pub score: u32,
    pub link: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Invitee {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

/// Social-preview image reference for page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Metadata for the invite landing page.
///
/// A known invitee gets a canonical link and a preview image; an unknown
/// or missing one falls back to the generic title and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub canonical_url: Option<String>,
    pub image: Option<PreviewImage>,
}

impl PageMetadata {
    pub fn generic() -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            description: PAGE_DESCRIPTION.to_string(),
            site_name: SITE_NAME.to_string(),
            canonical_url: None,
            image: None,
        }
    }

    pub fn for_invite(base: &Url, requested_username: &str, invitee: Option<&Invitee>) -> Self {
        let Some(invitee) = invitee else {
            return Self::generic();
        };

        Self {
            canonical_url: Some(invite_url(base, requested_username)),
            image: Some(PreviewImage {
                url: image_url(base, &invitee.username, invitee.score),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: invitee.username.clone(),
            }),
            ..Self::generic()
        }
    }
}
