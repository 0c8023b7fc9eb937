//! Progress display for network calls

pub mod reporter;
