//! Headline listing operation.

use std::io::{self, Write};

use punnet::{FetchError, HeadlineGateway, PunnetConfig};

use super::http_gateway;
use super::output::write_headlines;

/// Prints every headline from the configured backend.
///
/// # Errors
///
/// Returns the first [`FetchError`] raised while building the gateway,
/// fetching, or writing. Unlike the TUI this mode is not fail-soft.
pub async fn run(config: &PunnetConfig) -> Result<(), FetchError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, http_gateway, &mut stdout).await
}

/// Prints every headline using a custom gateway builder.
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
    let gateway = build_gateway(config)?;
    let headlines = gateway.headlines().await?;
    tracing::info!(count = headlines.len(), "listing headlines");
    write_headlines(writer, &headlines)
}
