//! Trivia API adapter
//!
//! [`HttpApiClient`] speaks JSON over HTTP to the question/user API and
//! implements the application layer's [`TriviaApi`](globetrotter_application::TriviaApi)
//! port.

mod client;
mod failure;
mod gateway;
mod retry;

#[cfg(test)]
mod test_server;

pub use client::{API_KEY_PARAM, ApiClientConfig, ApiClientError, HttpApiClient};
pub use gateway::{QUESTIONS_PATH, USERS_PATH};
pub use retry::RetryPolicy;
