//! HTTP client construction for the gateway.

use std::time::Duration;

use reqwest::Client;

use crate::backend::error::FetchError;

/// Builds a reqwest client bounded by `timeout` per request.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] when the client cannot be built, or
/// when `timeout` is zero.
pub(super) fn build_http_client(timeout: Duration) -> Result<Client, FetchError> {
    if timeout.is_zero() {
        return Err(FetchError::Configuration {
            message: "request timeout must be greater than zero".to_owned(),
        });
    }

    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("punnet/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|error| FetchError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })
}
