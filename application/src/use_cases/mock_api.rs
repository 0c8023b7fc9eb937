//! In-memory [`TriviaApi`] for use case tests.

use crate::ports::trivia_api::{ApiError, TriviaApi};
use async_trait::async_trait;
use globetrotter_domain::{InviteRecord, Invitee, QuestionPayload};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    questions: Vec<QuestionPayload>,
    invitees: HashMap<String, Invitee>,
    created: Vec<InviteRecord>,
    question_fetches: usize,
    invitee_fetches: usize,
    invite_submits: usize,
    fail_next: Option<ApiError>,
    fail_always: Option<ApiError>,
}

#[derive(Default)]
pub struct MockTriviaApi {
    state: Mutex<State>,
}

impl MockTriviaApi {
    pub fn with_questions(questions: Vec<QuestionPayload>) -> Self {
        let api = Self::default();
        api.state.lock().unwrap().questions = questions;
        api
    }

    pub fn with_invitee(invitee: Invitee) -> Self {
        let api = Self::default();
        api.state
            .lock()
            .unwrap()
            .invitees
            .insert(invitee.username.clone(), invitee);
        api
    }

    pub fn failing(error: ApiError) -> Self {
        let api = Self::default();
        api.state.lock().unwrap().fail_always = Some(error);
        api
    }

    pub fn fail_next(&self, error: ApiError) {
        self.state.lock().unwrap().fail_next = Some(error);
    }

    pub fn question_fetches(&self) -> usize {
        self.state.lock().unwrap().question_fetches
    }

    pub fn invitee_fetches(&self) -> usize {
        self.state.lock().unwrap().invitee_fetches
    }

    pub fn invite_submits(&self) -> usize {
        self.state.lock().unwrap().invite_submits
    }

    pub fn created(&self) -> Vec<InviteRecord> {
        self.state.lock().unwrap().created.clone()
    }

    fn check_failure(state: &mut State) -> Result<(), ApiError> {
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }
        match &state.fail_always {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TriviaApi for MockTriviaApi {
    async fn fetch_questions(&self) -> Result<Vec<QuestionPayload>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.question_fetches += 1;
        Self::check_failure(&mut state)?;
        Ok(state.questions.clone())
    }

    async fn fetch_invitee(&self, username: &str) -> Result<Option<Invitee>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.invitee_fetches += 1;
        Self::check_failure(&mut state)?;
        Ok(state.invitees.get(username).cloned())
    }

    async fn create_invite(&self, record: &InviteRecord) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.invite_submits += 1;
        Self::check_failure(&mut state)?;
        state.created.push(record.clone());
        Ok(())
    }
}
