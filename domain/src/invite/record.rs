//! Invite record entity

use super::display_name::DisplayName;
use super::links::InviteLinks;
use serde::{Deserialize, Serialize};

/// A score-sharing challenge, sent once to `POST /users`.
///
/// Serializes to the API's `{ username, score, link }` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteRecord {
    #[serde(rename = "username")]
    display_name: DisplayName,
    #[serde(rename = "score")]
    final_score: u32,
    #[serde(rename = "link")]
    share_url: String,
}

impl InviteRecord {
    pub fn new(display_name: DisplayName, final_score: u32, links: &InviteLinks) -> Self {
        Self {
            display_name,
            final_score,
            share_url: links.share_url.clone(),
        }
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    pub fn share_url(&self) -> &str {
        &self.share_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_api_body() {
        let name = DisplayName::parse("bob").unwrap();
        let links = InviteLinks::derive("https://x.test", &name, 7).unwrap();
        let record = InviteRecord::new(name, 7, &links);

        let body = serde_json::to_value(&record).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "username": "bob",
                "score": 7,
                "link": "https://x.test/invite?username=bob"
            })
        );
    }
}
