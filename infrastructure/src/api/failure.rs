//! Failure classification and reporting for API calls.

use globetrotter_application::ApiError;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{error, info, warn};

/// Error body shape returned by the API (`{ "message": ... }`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Classify a transport-level reqwest error.
pub(crate) fn classify_transport(err: &reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout { attempts: 1 }
    } else if err.is_decode() {
        ApiError::MalformedResponse(err.to_string())
    } else {
        ApiError::Unreachable(err.to_string())
    }
}

/// Classify a non-success HTTP response by status.
pub(crate) fn classify_status(status: StatusCode, body: &[u8]) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        return ApiError::NotFound;
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    ApiError::Http {
        status: status.as_u16(),
        message,
    }
}

/// Log a failure before it is surfaced to the caller.
///
/// Advisory only; the error is returned unchanged either way.
pub(crate) fn report_failure(method: &str, path: &str, err: &ApiError) {
    let advisory = err.advisory();
    match err {
        ApiError::NotFound => info!(method, path, status = 404, "{}", advisory),
        ApiError::Http { status: 401, .. } => warn!(method, path, status = 401, "{}", advisory),
        ApiError::Http { status, message } => error!(
            method,
            path,
            status = *status,
            message = message.as_deref().unwrap_or(""),
            "{}",
            advisory
        ),
        ApiError::Unreachable(detail) => {
            error!(method, path, detail = detail.as_str(), "No response received");
            warn!("{}", advisory);
        }
        ApiError::Timeout { attempts } => {
            error!(method, path, attempts = *attempts, "Request timed out; giving up")
        }
        ApiError::MalformedResponse(detail) => {
            error!(method, path, detail = detail.as_str(), "Unexpected error: {}", advisory)
        }
    }
}
