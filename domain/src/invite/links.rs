//! Share and preview-image URL derivation

use super::display_name::DisplayName;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Path of the invite landing page.
pub const INVITE_PATH: &str = "/invite";

/// Path of the social-preview image endpoint.
pub const OG_IMAGE_PATH: &str = "/api/og-image";

/// Links generated for one invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteLinks {
    /// `<origin>/invite?username=<name>`
    pub share_url: String,
    /// `<origin>/api/og-image?username=<name>&score=<score>`
    pub image_url: String,
}

impl InviteLinks {
    /// Derive both links from the site origin.
    pub fn derive(origin: &str, name: &DisplayName, score: u32) -> Result<Self, DomainError> {
        let base = parse_origin(origin)?;
        Ok(Self {
            share_url: invite_url(&base, name.as_str()),
            image_url: image_url(&base, name.as_str(), score),
        })
    }
}

/// Parse and check a site origin such as `https://globetrotter.example`.
pub fn parse_origin(origin: &str) -> Result<Url, DomainError> {
    let invalid = |reason: String| DomainError::InvalidOrigin {
        origin: origin.to_string(),
        reason,
    };

    let url = Url::parse(origin).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) origin".to_string()));
    }
    Ok(url)
}

/// `<origin>/invite?username=<name>`, with the name URL-encoded.
pub fn invite_url(base: &Url, username: &str) -> String {
    let mut url = at_path(base, INVITE_PATH);
    url.query_pairs_mut().append_pair("username", username);
    url.into()
}

/// `<origin>/api/og-image?username=<name>&score=<score>`
pub fn image_url(base: &Url, username: &str, score: u32) -> String {
    let mut url = at_path(base, OG_IMAGE_PATH);
    url.query_pairs_mut()
        .append_pair("username", username)
        .append_pair("score", &score.to_string());
    url.into()
}

fn at_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> DisplayName {
        DisplayName::parse("bob").unwrap()
    }

    #[test]
    fn test_derive_links() {
        let links = InviteLinks::derive("https://x.test", &bob(), 7).unwrap();
        assert_eq!(links.share_url, "https://x.test/invite?username=bob");
        assert_eq!(
            links.image_url,
            "https://x.test/api/og-image?username=bob&score=7"
        );
        assert!(links.image_url.contains("score=7"));
    }

    #[test]
    fn test_origin_path_and_query_are_replaced() {
        let links = InviteLinks::derive("http://localhost:3000/play?x=1#top", &bob(), 0).unwrap();
        assert_eq!(links.share_url, "http://localhost:3000/invite?username=bob");
    }

    #[test]
    fn test_invalid_origin() {
        assert!(matches!(
            InviteLinks::derive("not a url", &bob(), 1),
            Err(DomainError::InvalidOrigin { .. })
        ));
        assert!(matches!(
            InviteLinks::derive("mailto:bob@x.test", &bob(), 1),
            Err(DomainError::InvalidOrigin { .. })
        ));
    }

    #[test]
    fn test_invite_url_encodes_username() {
        let base = parse_origin("https://x.test").unwrap();
        assert_eq!(
            invite_url(&base, "a&b"),
            "https://x.test/invite?username=a%26b"
        );
    }
}
