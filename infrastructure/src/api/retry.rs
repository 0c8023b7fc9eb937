//! Bounded retry for timed-out requests.

use globetrotter_application::ApiError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Longest wait before a single retry, whatever the backoff step.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Timeout retry policy: how many extra attempts a call may make and how
/// long to wait before each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; total attempts = `retries + 1`.
    pub retries: u32,
    /// Linear backoff step: the n-th retry waits `n * backoff`, capped at
    /// [`MAX_RETRY_DELAY`].
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            backoff: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    /// Run `op` until it succeeds, fails with a non-timeout error, or the
    /// retry budget is spent.
    ///
    /// Each attempt re-invokes `op`, which must send an identical request.
    /// A surfaced timeout reports the total number of attempts made.
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut remaining = self.retries;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            match op().await {
                Err(e) if e.is_timeout() => {
                    if remaining == 0 {
                        return Err(ApiError::Timeout { attempts });
                    }
                    remaining -= 1;
                    warn!(
                        request = label,
                        attempt = attempts,
                        retries_left = remaining,
                        "Request timed out. Retrying..."
                    );
                    let delay = self.backoff.saturating_mul(attempts).min(MAX_RETRY_DELAY);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
                other => return other,
            }
        }
    }
}
