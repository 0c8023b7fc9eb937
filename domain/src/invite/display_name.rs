//! Display name value object

use crate::core::error::DomainError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DISPLAY_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,20}$").expect("display name pattern"));

/// Check a candidate display name: 3-20 ASCII letters, digits, `_` or `-`.
pub fn validate_display_name(name: &str) -> bool {
    DISPLAY_NAME_PATTERN.is_match(name)
}

/// A display name that passed [`validate_display_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if validate_display_name(&name) {
            Ok(Self(name))
        } else {
            Err(DomainError::InvalidDisplayName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_names() {
        assert!(validate_display_name("abc"));
        assert!(validate_display_name("User_123"));
        assert!(validate_display_name("dash-ok"));
        assert!(validate_display_name("abcdefghijklmnopqrst"));
    }

    #[test]
    fn test_rejects_invalid_names() {
        assert!(!validate_display_name("ab"));
        assert!(!validate_display_name("this_name_is_way_too_long_123"));
        assert!(!validate_display_name("bad name"));
        assert!(!validate_display_name(""));
        assert!(!validate_display_name("café"));
        assert!(!validate_display_name("abc\n"));
    }

    #[test]
    fn test_parse_returns_validation_error() {
        let err = DisplayName::parse("ab").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(DisplayName::parse("bob").unwrap().as_str(), "bob");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: DisplayName = serde_json::from_str("\"globe_fan\"").unwrap();
        assert_eq!(ok.to_string(), "globe_fan");
        assert!(serde_json::from_str::<DisplayName>("\"x y\"").is_err());
    }
}
