//! Questions and question sets
//!
//! The question API sends every round as `{ allCities, correctCity }`, with
//! the correct city repeated inside `allCities`. [`QuestionSet::from_payloads`]
//! normalizes that once at load time into a choice list plus the index of the
//! correct choice, so nothing downstream has to re-derive it.

use super::destination::Destination;
use crate::core::error::{DomainError, QuestionError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One round as delivered by `GET /questions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub all_cities: Vec<Destination>,
    pub correct_city: Destination,
}

/// One round: a set of choices, exactly one of which is correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    choices: Vec<Destination>,
    correct_index: usize,
}

impl Question {
    /// Build a question from its choices and the name of the correct one.
    ///
    /// Choice names must be unique and `correct_name` must be among them.
    pub fn new(choices: Vec<Destination>, correct_name: &str) -> Result<Self, QuestionError> {
        if choices.is_empty() {
            return Err(QuestionError::NoChoices);
        }

        let mut seen = HashSet::new();
        for choice in &choices {
            if !seen.insert(choice.name.as_str()) {
                return Err(QuestionError::DuplicateChoice(choice.name.clone()));
            }
        }

        let correct_index = choices
            .iter()
            .position(|c| c.name == correct_name)
            .ok_or_else(|| QuestionError::CorrectCityMissing(correct_name.to_string()))?;

        Ok(Self {
            choices,
            correct_index,
        })
    }

    /// Normalize a wire payload.
    ///
    /// The matching entry in `allCities` is replaced by `correctCity`, which
    /// carries the clues shown for the round.
    pub fn from_payload(payload: QuestionPayload) -> Result<Self, QuestionError> {
        let QuestionPayload {
            all_cities,
            correct_city,
        } = payload;
        let mut question = Self::new(all_cities, &correct_city.name)?;
        question.choices[question.correct_index] = correct_city;
        Ok(question)
    }

    pub fn choices(&self) -> &[Destination] {
        &self.choices
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct(&self) -> &Destination {
        &self.choices[self.correct_index]
    }

    pub fn is_correct(&self, name: &str) -> bool {
        self.correct().name == name
    }

    /// Look up a choice by its 1-based position or its name (case-insensitive).
    pub fn resolve_choice(&self, input: &str) -> Option<&Destination> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| self.choices.get(i));
        }
        self.choices
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(input))
    }
}

/// The ordered, non-empty list of questions for one playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Create a question set. Fails if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionSet);
        }
        Ok(Self { questions })
    }

    /// Normalize the question API's response into a question set.
    pub fn from_payloads(payloads: Vec<QuestionPayload>) -> Result<Self, DomainError> {
        let questions = payloads
            .into_iter()
            .enumerate()
            .map(|(index, payload)| {
                Question::from_payload(payload)
                    .map_err(|reason| DomainError::InvalidQuestion { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

impl std::ops::Index<usize> for QuestionSet {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}
