//! Domain layer for globetrotter
//!
//! This crate contains the core game logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! A playthrough is a [`QuizSession`] over a [`QuestionSet`]: for each
//! question the player reads the clues, picks one destination, sees the fun
//! facts and trivia, and moves on. The score counts correct picks.
//!
//! ## Invite
//!
//! After playing, a player can challenge a friend. A valid [`DisplayName`]
//! and the score become an [`InviteRecord`] plus [`InviteLinks`] (a share
//! URL and a social-preview image URL).

pub mod config;
pub mod core;
pub mod invite;
pub mod quiz;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, LinkPolicy, Severity};
pub use core::error::{DomainError, QuestionError};
pub use invite::{
    DisplayName, InviteDialog, InviteLinks, InviteRecord, Invitee, MAX_SCORE, PageMetadata,
    PreviewCard, PreviewImage, SubmitTicket, build_share_text, parse_origin,
    validate_display_name, whatsapp_share_url,
};
pub use quiz::{
    destination::Destination,
    question::{Question, QuestionPayload, QuestionSet},
    session::{ChoiceMark, QuizPhase, QuizSession},
};
