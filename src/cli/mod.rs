//! CLI operation mode handlers.
//!
//! - [`headline_listing`]: print every headline and exit
//! - [`pun_listing`]: print the puns for one headline and exit
//! - [`evaluation_tui`]: interactive headline selection and pun ranking
//!
//! Output formatting utilities are in [`output`].

use punnet::{FetchError, HttpHeadlineGateway, PunnetConfig};

pub mod evaluation_tui;
pub mod headline_listing;
pub mod output;
pub mod pun_listing;

#[cfg(test)]
pub mod test_utils;

/// Builds the HTTP gateway described by `config`.
///
/// # Errors
///
/// Returns [`FetchError::InvalidBaseUrl`] for an unusable base URL and
/// [`FetchError::Configuration`] when the HTTP client cannot be built.
pub fn http_gateway(config: &PunnetConfig) -> Result<HttpHeadlineGateway, FetchError> {
    HttpHeadlineGateway::new(config.backend_base_url()?, config.request_timeout())
}
