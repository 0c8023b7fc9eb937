//! Lookup Invitee use case.
//!
//! Backs the invite landing page (`/invite?username=<name>`): reads the
//! challenger's record and builds the page metadata. An unknown or missing
//! username is not an error; it yields the generic "not found" page.

use crate::ports::progress::ProgressNotifier;
use crate::ports::trivia_api::{ApiError, TriviaApi};
use globetrotter_domain::{DomainError, Invitee, PageMetadata, parse_origin};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LookupInviteeError {
    #[error("Failed to fetch invite: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    InvalidOrigin(#[from] DomainError),
}

/// The invite landing page.
#[derive(Debug, Clone)]
pub struct InvitePage {
    /// `None` renders the "not found" view.
    pub invitee: Option<Invitee>,
    pub metadata: PageMetadata,
}

#[derive(Clone)]
pub struct LookupInviteeUseCase {
    api: Arc<dyn TriviaApi>,
    origin: String,
}

impl LookupInviteeUseCase {
    pub fn new(api: Arc<dyn TriviaApi>, origin: impl Into<String>) -> Self {
        Self {
            api,
            origin: origin.into(),
        }
    }

    pub async fn execute(
        &self,
        username: Option<&str>,
        progress: &dyn ProgressNotifier,
    ) -> Result<InvitePage, LookupInviteeError> {
        let base = parse_origin(&self.origin)?;
        let username = username.map(str::trim).unwrap_or_default();

        if username.is_empty() {
            debug!("Invite page requested without a username");
            return Ok(InvitePage {
                invitee: None,
                metadata: PageMetadata::generic(),
            });
        }

        progress.on_request_start("Looking up invite");
        let result = self.api.fetch_invitee(username).await;
        progress.on_request_end("Looking up invite", result.is_ok());

        let invitee = match result {
            Ok(invitee) => invitee,
            Err(ApiError::NotFound) => None,
            Err(e) => return Err(e.into()),
        };

        let metadata = PageMetadata::for_invite(&base, username, invitee.as_ref());
        Ok(InvitePage { invitee, metadata })
    }
}
