//! Application layer for globetrotter
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_ORIGIN, InviteParams};
pub use ports::{
    progress::{NoProgress, ProgressNotifier},
    trivia_api::{ApiError, TriviaApi},
};
pub use use_cases::generate_invite::{
    GenerateInviteUseCase, InviteError, InviteOutcome, invite_score,
};
pub use use_cases::load_questions::{LoadQuestionsError, LoadQuestionsUseCase};
pub use use_cases::lookup_invitee::{InvitePage, LookupInviteeError, LookupInviteeUseCase};
