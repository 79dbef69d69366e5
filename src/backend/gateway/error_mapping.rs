//! Error mapping helpers for the HTTP gateway.

use std::time::Duration;

use reqwest::StatusCode;

use crate::backend::error::FetchError;
use crate::backend::models::ApiFailure;

const MAX_BODY_PREVIEW_CHARS: usize = 160;

/// Maps a reqwest transport error, distinguishing timeouts.
pub(super) fn map_transport_error(
    operation: &str,
    error: &reqwest::Error,
    timeout: Duration,
) -> FetchError {
    if error.is_timeout() {
        return FetchError::Timeout {
            operation: operation.to_owned(),
            seconds: timeout.as_secs(),
        };
    }

    FetchError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a non-success status into [`FetchError::Status`].
///
/// The backend reports failures as `{"status": "failure", "message": ...}`;
/// the message is surfaced when present, otherwise a short body preview.
pub(super) fn map_status_error(operation: &str, status: StatusCode, body: &str) -> FetchError {
    let message = extract_backend_message(body).unwrap_or_else(|| preview_body(body));
    FetchError::Status {
        operation: operation.to_owned(),
        status: status.as_u16(),
        message,
    }
}

/// Maps a JSON decoding failure into [`FetchError::MalformedBody`].
pub(super) fn map_decode_error(operation: &str, error: &serde_json::Error) -> FetchError {
    FetchError::MalformedBody {
        operation: operation.to_owned(),
        message: error.to_string(),
    }
}

fn extract_backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiFailure>(body)
        .ok()
        .and_then(|failure| failure.message)
        .filter(|message| !message.trim().is_empty())
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "(empty response body)".to_owned();
    }

    let mut preview: String = trimmed.chars().take(MAX_BODY_PREVIEW_CHARS).collect();
    if trimmed.chars().count() > MAX_BODY_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}
