//! Infrastructure layer for globetrotter
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod api;
pub mod config;

// Re-export commonly used types
pub use api::{API_KEY_PARAM, ApiClientConfig, ApiClientError, HttpApiClient, RetryPolicy};
pub use config::{
    ConfigLoader, FileApiConfig, FileConfig, FileGameConfig, FileInviteConfig, FileOutputConfig,
};
