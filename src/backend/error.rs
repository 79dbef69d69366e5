//! Error types exposed by the backend fetch layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The configured backend base URL could not be used.
    #[error("backend base URL is invalid: {0}")]
    InvalidBaseUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("{operation} timed out after {seconds}s")]
    Timeout {
        /// Which request timed out.
        operation: String,
        /// The timeout that elapsed, in seconds.
        seconds: u64,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to the backend: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The backend answered with a non-success status code.
    #[error("{operation} failed with status {status}: {message}")]
    Status {
        /// Which request failed.
        operation: String,
        /// Numeric HTTP status.
        status: u16,
        /// Message extracted from the response body, if any.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("{operation} returned a malformed body: {message}")]
    MalformedBody {
        /// Which request returned the body.
        operation: String,
        /// Decoder detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl FetchError {
    /// Returns true when the failure happened before or during transport,
    /// rather than being reported by the backend.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}
