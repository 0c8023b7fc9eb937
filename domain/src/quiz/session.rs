//! Quiz session state machine.
//!
//! A [`QuizSession`] owns one playthrough of a [`QuestionSet`]: the current
//! question, the player's selection and the running score.
//!
//! # State Transitions
//!
//! ```text
//! AwaitingAnswer ──select_choice──> Revealed ──acknowledge_reveal──> TransitionReady
//!   ^       ^                          │                                   │
//!   │       └──────────advance─────────┼───────────────────────────────────┘
//!   │                                  │ acknowledge_reveal (last question)
//!   │                                  v
//!   └─────────────restart───────── Finished
//! ```
//!
//! Every transition called from the wrong phase is a no-op and reports
//! `false`/`None`, so a double click on a choice cannot score twice.

use super::destination::Destination;
use super::question::{Question, QuestionSet};
use serde::{Deserialize, Serialize};

/// Phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizPhase {
    /// Choices are open.
    AwaitingAnswer,
    /// The answer is locked and the feedback (fun facts, trivia) is showing.
    Revealed { correct: bool },
    /// Feedback dismissed; the next question can be shown.
    TransitionReady,
    /// Feedback for the last question dismissed.
    Finished,
}

impl QuizPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizPhase::AwaitingAnswer => "awaiting_answer",
            QuizPhase::Revealed { .. } => "revealed",
            QuizPhase::TransitionReady => "transition_ready",
            QuizPhase::Finished => "finished",
        }
    }
}

/// How a choice should be shown once the question has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    /// Not answered yet, or neither selected nor correct.
    Neutral,
    /// The correct choice (whether or not it was selected).
    Correct,
    /// The player's wrong selection.
    Wrong,
}

/// Mutable progress through one [`QuestionSet`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: QuestionSet,
    current_index: usize,
    score: usize,
    selected: Option<String>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start a playthrough at the first question with a zero score.
    ///
    /// `QuestionSet` is non-empty by construction, so the first question
    /// always exists.
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            selected: None,
            phase: QuizPhase::AwaitingAnswer,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_choice(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// True exactly when a choice has been selected for the current question.
    pub fn answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    /// The question being played.
    pub fn current_question(&self) -> &Question {
        // current_index is kept in [0, len) by every transition
        &self.questions[self.current_index]
    }

    /// Lock in an answer for the current question.
    ///
    /// Returns whether the answer was correct, or `None` if the session is
    /// not awaiting an answer (the selection is already locked).
    pub fn select_choice(&mut self, name: &str) -> Option<bool> {
        if self.phase != QuizPhase::AwaitingAnswer {
            return None;
        }

        let correct = self.current_question().is_correct(name);
        if correct {
            self.score += 1;
        }
        self.selected = Some(name.to_string());
        self.phase = QuizPhase::Revealed { correct };
        Some(correct)
    }

    /// Dismiss the feedback for the current question.
    ///
    /// No-op unless revealed. Returns the new phase when applied.
    pub fn acknowledge_reveal(&mut self) -> Option<QuizPhase> {
        if !matches!(self.phase, QuizPhase::Revealed { .. }) {
            return None;
        }

        self.phase = if self.is_last_question() {
            QuizPhase::Finished
        } else {
            QuizPhase::TransitionReady
        };
        Some(self.phase)
    }

    /// Move to the next question.
    ///
    /// No-op unless in `TransitionReady`.
    pub fn advance(&mut self) -> bool {
        if self.phase != QuizPhase::TransitionReady {
            return false;
        }

        self.current_index += 1;
        self.selected = None;
        self.phase = QuizPhase::AwaitingAnswer;
        true
    }

    /// Start over from the first question with a zero score.
    ///
    /// Only permitted from `Finished`.
    pub fn restart(&mut self) -> bool {
        if self.phase != QuizPhase::Finished {
            return false;
        }

        self.current_index = 0;
        self.score = 0;
        self.selected = None;
        self.phase = QuizPhase::AwaitingAnswer;
        true
    }

    /// Whether leaving now would lose progress: at least one answer given
    /// and the playthrough not yet finished.
    pub fn is_dirty(&self) -> bool {
        !self.is_finished() && (self.current_index > 0 || self.answered())
    }

    /// Score as a percentage of the question count (0-100).
    pub fn progress_percent(&self) -> u8 {
        ((self.score * 100) / self.questions.len()).min(100) as u8
    }

    /// Display marks for the current question's choices, in choice order.
    pub fn choice_marks(&self) -> Vec<ChoiceMark> {
        let question = self.current_question();
        question
            .choices()
            .iter()
            .map(|choice| self.mark_for(question, choice))
            .collect()
    }

    fn mark_for(&self, question: &Question, choice: &Destination) -> ChoiceMark {
        let Some(selected) = self.selected.as_deref() else {
            return ChoiceMark::Neutral;
        };

        if question.is_correct(&choice.name) {
            ChoiceMark::Correct
        } else if selected == choice.name {
            ChoiceMark::Wrong
        } else {
            ChoiceMark::Neutral
        }
    }
}
