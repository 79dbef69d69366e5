//! Punnet CLI entrypoint.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use punnet::{FetchError, LogTarget, OperationMode, PunnetConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FetchError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode();
    let log_file = config.log_file.as_deref().map(Path::new);
    init_logging(&LogTarget::for_mode(mode, log_file))?;
    tracing::debug!(?mode, base_url = %config.base_url, "starting punnet");

    match mode {
        OperationMode::HeadlineListing => cli::headline_listing::run(&config).await,
        OperationMode::PunListing => cli::pun_listing::run(&config).await,
        OperationMode::EvaluationTui => cli::evaluation_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PunnetConfig, FetchError> {
    PunnetConfig::load().map_err(|error| FetchError::Configuration {
        message: error.to_string(),
    })
}
