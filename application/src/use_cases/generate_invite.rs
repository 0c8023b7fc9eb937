//! Generate Invite use case.
//!
//! Turns a display name and a final score into an [`InviteRecord`], derives
//! the share and preview-image links, and persists the record through the
//! trivia API.
//!
//! An invalid name is rejected before any network call. Whether a link is
//! shown after a failed submit is decided by
//! [`LinkPolicy`](globetrotter_domain::LinkPolicy): with the
//! default `Always` the outcome carries the links together with the
//! persistence error.

use crate::config::InviteParams;
use crate::ports::progress::ProgressNotifier;
use crate::ports::trivia_api::{ApiError, TriviaApi};
use globetrotter_domain::{
    DisplayName, DomainError, InviteDialog, InviteLinks, InviteRecord, build_share_text,
    whatsapp_share_url,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while generating an invite.
#[derive(Error, Debug)]
pub enum InviteError {
    /// The display name failed validation; re-prompt the user.
    #[error("{0}")]
    InvalidName(DomainError),

    #[error("Invite links cannot be built: {0}")]
    InvalidOrigin(DomainError),

    /// The record could not be stored and the link policy hides the link.
    #[error("Failed to save invite: {0}")]
    Network(#[from] ApiError),
}

impl InviteError {
    pub fn is_validation(&self) -> bool {
        matches!(self, InviteError::InvalidName(_))
    }
}

/// Result of a generated invite.
#[derive(Debug, Clone)]
pub struct InviteOutcome {
    pub record: InviteRecord,
    /// Number of questions in the round the score was earned in.
    pub total: u32,
    pub links: InviteLinks,
    /// Set when the record could not be stored; the links are still shown
    /// under `LinkPolicy::Always`.
    pub persist_error: Option<ApiError>,
}

impl InviteOutcome {
    pub fn persisted(&self) -> bool {
        self.persist_error.is_none()
    }

    pub fn share_text(&self) -> String {
        build_share_text(&self.record, self.total)
    }

    pub fn whatsapp_url(&self) -> String {
        whatsapp_share_url(&self.share_text())
    }
}

/// Use case for creating an invite.
#[derive(Clone)]
pub struct GenerateInviteUseCase {
    api: Arc<dyn TriviaApi>,
    params: InviteParams,
}

impl GenerateInviteUseCase {
    pub fn new(api: Arc<dyn TriviaApi>, params: InviteParams) -> Self {
        Self { api, params }
    }

    /// Validate, derive links, and submit the invite record for `score` out
    /// of `total`.
    pub async fn execute(
        &self,
        name: &str,
        score: u32,
        total: u32,
        progress: &dyn ProgressNotifier,
    ) -> Result<InviteOutcome, InviteError> {
        let name = DisplayName::parse(name.trim()).map_err(InviteError::InvalidName)?;
        let links = InviteLinks::derive(&self.params.origin, &name, score)
            .map_err(InviteError::InvalidOrigin)?;
        let record = InviteRecord::new(name, score, &links);

        debug!("Submitting invite for {}: {}", record.display_name(), links.share_url);

        progress.on_request_start("Saving invite");
        let result = self.api.create_invite(&record).await;
        progress.on_request_end("Saving invite", result.is_ok());

        let persist_error = match result {
            Ok(()) => {
                info!("Invite created for {}", record.display_name());
                None
            }
            Err(e) => {
                warn!("Failed to create invite for {}: {}", record.display_name(), e);
                if !self.params.link_policy.shows_link(false) {
                    return Err(InviteError::Network(e));
                }
                Some(e)
            }
        };

        Ok(InviteOutcome {
            record,
            total,
            links,
            persist_error,
        })
    }

    /// Run a submit from the invite dialog's current name.
    ///
    /// Does nothing while another submit is outstanding. The result is
    /// applied to the dialog only if it is still the same dialog session.
    /// Returns the outcome when one was produced and applied.
    pub async fn submit_from_dialog(
        &self,
        dialog: &mut InviteDialog,
        score: u32,
        total: u32,
        progress: &dyn ProgressNotifier,
    ) -> Option<Result<InviteOutcome, InviteError>> {
        let ticket = dialog.begin_submit()?;
        let name = dialog.name().to_string();
        let result = self.execute(&name, score, total, progress).await;

        let (links, error) = match &result {
            Ok(outcome) => (
                Some(outcome.links.clone()),
                outcome.persist_error.as_ref().map(ApiError::advisory),
            ),
            Err(InviteError::Network(e)) => (None, Some(e.advisory())),
            Err(e) => (None, Some(e.to_string())),
        };

        if dialog.finish_submit(ticket, links, error) {
            Some(result)
        } else {
            debug!("Invite dialog closed before submit completed; result discarded");
            None
        }
    }
}

/// Convert a session score to the invite's score field.
pub fn invite_score(score: usize) -> u32 {
    u32::try_from(score).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::mock_api::MockTriviaApi;
    use globetrotter_domain::LinkPolicy;

    fn use_case(api: Arc<MockTriviaApi>, policy: LinkPolicy) -> GenerateInviteUseCase {
        GenerateInviteUseCase::new(
            api,
            InviteParams::default()
                .with_origin("https://x.test")
                .with_link_policy(policy),
        )
    }

    #[tokio::test]
    async fn test_generate_invite_for_bob() {
        let api = Arc::new(MockTriviaApi::default());
        let outcome = use_case(api.clone(), LinkPolicy::Always)
            .execute("bob", 7, 10, &NoProgress)
            .await
            .unwrap();

        assert_eq!(outcome.links.share_url, "https://x.test/invite?username=bob");
        assert!(outcome.links.image_url.contains("score=7"));
        assert!(outcome.persisted());

        let created = api.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].display_name().as_str(), "bob");
        assert_eq!(created[0].final_score(), 7);
        assert_eq!(created[0].share_url(), "https://x.test/invite?username=bob");
    }

    #[tokio::test]
    async fn test_invalid_name_makes_no_network_call() {
        let api = Arc::new(MockTriviaApi::default());
        let err = use_case(api.clone(), LinkPolicy::Always)
            .execute("bad name", 3, 10, &NoProgress)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(api.invite_submits(), 0);
    }

    #[tokio::test]
    async fn test_failed_submit_still_shows_link_by_default() {
        let api = Arc::new(MockTriviaApi::failing(ApiError::Http {
            status: 500,
            message: None,
        }));
        let outcome = use_case(api, LinkPolicy::Always)
            .execute("bob", 4, 10, &NoProgress)
            .await
            .unwrap();

        assert!(!outcome.persisted());
        assert_eq!(outcome.links.share_url, "https://x.test/invite?username=bob");
    }

    #[tokio::test]
    async fn test_failed_submit_blocks_link_on_success_policy() {
        let api = Arc::new(MockTriviaApi::failing(ApiError::Timeout { attempts: 4 }));
        let err = use_case(api, LinkPolicy::OnSuccess)
            .execute("bob", 4, 10, &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, InviteError::Network(ApiError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_share_text_and_whatsapp_url() {
        let api = Arc::new(MockTriviaApi::default());
        let outcome = use_case(api, LinkPolicy::Always)
            .execute("bob", 7, 10, &NoProgress)
            .await
            .unwrap();

        assert!(outcome.share_text().starts_with("I scored *7*/10"));
        assert!(outcome.whatsapp_url().starts_with("https://wa.me/?text=I+scored"));
    }

    #[tokio::test]
    async fn test_share_text_for_short_round() {
        let api = Arc::new(MockTriviaApi::default());
        let outcome = use_case(api, LinkPolicy::Always)
            .execute("bob", 3, 3, &NoProgress)
            .await
            .unwrap();

        assert_eq!(outcome.total, 3);
        assert!(outcome.share_text().starts_with("I scored *3*/3 in *Globetrotter*!"));
        assert!(outcome.whatsapp_url().contains("*3*%2F3"));
    }

    #[tokio::test]
    async fn test_submit_from_dialog_updates_dialog() {
        let api = Arc::new(MockTriviaApi::default());
        let use_case = use_case(api.clone(), LinkPolicy::Always);
        let mut dialog = InviteDialog::new();
        dialog.open();
        dialog.set_name("globe_fan");

        let result = use_case
            .submit_from_dialog(&mut dialog, 9, 10, &NoProgress)
            .await
            .unwrap();
        assert!(result.is_ok());
        assert!(!dialog.is_in_flight());
        assert_eq!(
            dialog.links().unwrap().share_url,
            "https://x.test/invite?username=globe_fan"
        );
        assert_eq!(api.invite_submits(), 1);
    }

    #[tokio::test]
    async fn test_submit_from_closed_dialog_is_ignored() {
        let api = Arc::new(MockTriviaApi::default());
        let use_case = use_case(api.clone(), LinkPolicy::Always);
        let mut dialog = InviteDialog::new();
        dialog.set_name("globe_fan");

        assert!(use_case.submit_from_dialog(&mut dialog, 9, 10, &NoProgress).await.is_none());
        assert_eq!(api.invite_submits(), 0);
    }

    #[tokio::test]
    async fn test_dialog_invalid_name_reports_error() {
        let api = Arc::new(MockTriviaApi::default());
        let use_case = use_case(api.clone(), LinkPolicy::Always);
        let mut dialog = InviteDialog::new();
        dialog.open();
        dialog.set_name("ab");

        let result = use_case
            .submit_from_dialog(&mut dialog, 2, 10, &NoProgress)
            .await
            .unwrap();
        assert!(result.unwrap_err().is_validation());
        assert!(dialog.has_input_error());
        assert!(dialog.can_submit());
        assert!(dialog.links().is_none());
        assert_eq!(api.invite_submits(), 0);
    }

    #[test]
    fn test_invite_score_conversion() {
        assert_eq!(invite_score(7), 7);
    }
}
