//! Application-level configuration.
//!
//! - [`InviteParams`]: site origin and link display policy for invites

pub mod invite_params;

pub use invite_params::{DEFAULT_ORIGIN, InviteParams};
