//! Progress notification port
//!
//! Defines the interface for reporting outstanding network calls.

/// Callback for network activity during a use case
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, status line, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called before a request is sent
    fn on_request_start(&self, label: &str);

    /// Called once the request (including retries) has completed
    fn on_request_end(&self, label: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _label: &str) {}
    fn on_request_end(&self, _label: &str, _success: bool) {}
}
