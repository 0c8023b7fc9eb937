//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod link_policy;
pub mod validation;

pub use link_policy::LinkPolicy;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
