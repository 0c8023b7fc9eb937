//! Load Questions use case.
//!
//! Fetches the question list from the trivia API and normalizes it into a
//! [`QuestionSet`] ready for a [`QuizSession`].

use crate::ports::progress::ProgressNotifier;
use crate::ports::trivia_api::{ApiError, TriviaApi};
use globetrotter_domain::{DomainError, QuestionSet, QuizSession};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading questions.
#[derive(Error, Debug)]
pub enum LoadQuestionsError {
    #[error("Failed to fetch questions: {0}")]
    Api(#[from] ApiError),

    #[error("Question data rejected: {0}")]
    Invalid(#[from] DomainError),
}

/// Use case for loading a playthrough's questions.
#[derive(Clone)]
pub struct LoadQuestionsUseCase {
    api: Arc<dyn TriviaApi>,
}

impl LoadQuestionsUseCase {
    pub fn new(api: Arc<dyn TriviaApi>) -> Self {
        Self { api }
    }

    /// Fetch and normalize the question set.
    pub async fn execute(
        &self,
        progress: &dyn ProgressNotifier,
    ) -> Result<QuestionSet, LoadQuestionsError> {
        progress.on_request_start("Loading questions");
        let result = self.api.fetch_questions().await;
        progress.on_request_end("Loading questions", result.is_ok());

        let set = QuestionSet::from_payloads(result?)?;
        info!("Loaded {} questions", set.len());
        Ok(set)
    }

    /// Start a new playthrough.
    pub async fn start(
        &self,
        progress: &dyn ProgressNotifier,
    ) -> Result<QuizSession, LoadQuestionsError> {
        Ok(QuizSession::new(self.execute(progress).await?))
    }

    /// Play again after finishing.
    ///
    /// Tries to fetch a fresh question set; if that fails the finished session
    /// is restarted on its existing questions. Returns `true` when fresh
    /// questions were loaded. No-op (returning `false`) unless `session` is
    /// finished.
    pub async fn play_again(
        &self,
        session: &mut QuizSession,
        progress: &dyn ProgressNotifier,
    ) -> bool {
        if !session.is_finished() {
            return false;
        }

        match self.execute(progress).await {
            Ok(set) => {
                *session = QuizSession::new(set);
                true
            }
            Err(e) => {
                warn!("Could not refresh questions, replaying current set: {}", e);
                session.restart();
                false
            }
        }
    }
}
