//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and infrastructure through ports.

pub mod generate_invite;
pub mod load_questions;
pub mod lookup_invitee;

#[cfg(test)]
mod mock_api;
