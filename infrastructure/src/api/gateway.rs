//! [`TriviaApi`] adapter over [`HttpApiClient`].

use super::client::HttpApiClient;
use async_trait::async_trait;
use globetrotter_application::{ApiError, TriviaApi};
use globetrotter_domain::{InviteRecord, Invitee, QuestionPayload, validate_display_name};
use serde::Deserialize;
use serde::de::IgnoredAny;

pub const QUESTIONS_PATH: &str = "/questions";
pub const USERS_PATH: &str = "/users";

/// The API wraps every payload as `{ "data": ... }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[async_trait]
impl TriviaApi for HttpApiClient {
    async fn fetch_questions(&self) -> Result<Vec<QuestionPayload>, ApiError> {
        let envelope: Envelope<Vec<QuestionPayload>> =
            self.fetch_json(QUESTIONS_PATH, &[]).await?;
        Ok(envelope.data)
    }

    async fn fetch_invitee(&self, username: &str) -> Result<Option<Invitee>, ApiError> {
        // Invites are only ever created under valid display names
        if !validate_display_name(username) {
            return Ok(None);
        }
        let path = format!("{}/{}", USERS_PATH, username);
        match self.fetch_json::<Option<Envelope<Option<Invitee>>>>(&path, &[]).await {
            Ok(envelope) => Ok(envelope.and_then(|e| e.data)),
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_invite(&self, record: &InviteRecord) -> Result<(), ApiError> {
        let _: IgnoredAny = self.submit_json(USERS_PATH, record, &[]).await?;
        Ok(())
    }
}
