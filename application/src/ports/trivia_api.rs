//! Trivia API port
//!
//! Defines the interface to the external question/user service.

use async_trait::async_trait;
use globetrotter_domain::{InviteRecord, Invitee, QuestionPayload};
use thiserror::Error;

/// Classified failures of a call to the trivia API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request timed out after {attempts} attempt(s)")]
    Timeout { attempts: u32 },

    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("request failed"))]
    Http { status: u16, message: Option<String> },

    #[error("Not found")]
    NotFound,

    #[error("Network unreachable: {0}")]
    Unreachable(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }

    /// User-facing advice for this failure, classified by status when
    /// there is one.
    pub fn advisory(&self) -> String {
        match self {
            ApiError::Timeout { .. } => {
                "The server took too long to respond. Please try again.".to_string()
            }
            ApiError::NotFound => {
                "Not Found: The requested resource could not be found.".to_string()
            }
            ApiError::Http { status, message } => match status {
                400 => "Bad Request: Please check your input.".to_string(),
                401 => "Unauthorized: Please log in again.".to_string(),
                403 => "Forbidden: You do not have permission to access this resource."
                    .to_string(),
                404 => "Not Found: The requested resource could not be found.".to_string(),
                500 => "Internal Server Error: Something went wrong on the server.".to_string(),
                _ => format!(
                    "Error: {}",
                    message.as_deref().unwrap_or("Something went wrong!")
                ),
            },
            ApiError::Unreachable(_) => {
                "No response from the server. Please check your network.".to_string()
            }
            ApiError::MalformedResponse(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}

/// Gateway to the trivia API
///
/// This port defines how the application layer reaches the question and
/// invite store. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TriviaApi: Send + Sync {
    /// `GET /questions`
    async fn fetch_questions(&self) -> Result<Vec<QuestionPayload>, ApiError>;

    /// `GET /users/{username}`; `Ok(None)` when no such invite exists.
    async fn fetch_invitee(&self, username: &str) -> Result<Option<Invitee>, ApiError>;

    /// `POST /users`
    async fn create_invite(&self, record: &InviteRecord) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_by_status() {
        let http = |status| ApiError::Http {
            status,
            message: None,
        };
        assert_eq!(http(400).advisory(), "Bad Request: Please check your input.");
        assert_eq!(http(401).advisory(), "Unauthorized: Please log in again.");
        assert_eq!(
            http(500).advisory(),
            "Internal Server Error: Something went wrong on the server."
        );
        assert_eq!(http(418).advisory(), "Error: Something went wrong!");
        assert_eq!(
            ApiError::Http {
                status: 422,
                message: Some("score out of range".to_string())
            }
            .advisory(),
            "Error: score out of range"
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::Http {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 503: request failed");
        assert!(ApiError::Timeout { attempts: 3 }.is_timeout());
        assert_eq!(
            ApiError::Timeout { attempts: 3 }.to_string(),
            "Request timed out after 3 attempt(s)"
        );
    }
}
