//! Pun listing operation for a single headline.

use std::io::{self, Write};

use punnet::{FetchError, HeadlineGateway, PunnetConfig};

use super::http_gateway;
use super::output::write_puns;

/// Prints the puns generated for the configured headline.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] when no headline is configured, and
/// any [`FetchError`] raised while fetching or writing.
pub async fn run(config: &PunnetConfig) -> Result<(), FetchError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, http_gateway, &mut stdout).await
}

/// Prints the puns for one headline using a custom gateway builder.
///
/// This function is exposed for testing with scripted gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &PunnetConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), FetchError>
where
    G: HeadlineGateway,
    F: FnOnce(&PunnetConfig) -> Result<G, FetchError>,
    W: Write,
{
    let headline_id = config.require_headline()?;
    let gateway = build_gateway(config)?;
    let puns = gateway.generated_puns(&headline_id).await?;
    tracing::info!(%headline_id, count = puns.len(), "listing puns");
    write_puns(writer, &headline_id, &puns)
}
