//! TUI mode for selecting headlines and ranking their puns.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use punnet::tui::{EvaluationApp, EvaluationSettings, set_app_context};
use punnet::{FetchError, PunnetConfig};

use super::http_gateway;

/// Runs the interactive evaluation TUI.
///
/// # Errors
///
/// Returns an error if the gateway cannot be built or the TUI fails to
/// initialise. Fetch failures inside the TUI are shown inline instead.
pub async fn run(config: &PunnetConfig) -> Result<(), FetchError> {
    let gateway = http_gateway(config)?;

    // If already set, the existing context remains.
    let _ = set_app_context(Arc::new(gateway), evaluation_settings(config));

    run_tui().await.map_err(|error| FetchError::Configuration {
        message: format!("TUI error: {error}"),
    })
}

fn evaluation_settings(config: &PunnetConfig) -> EvaluationSettings {
    EvaluationSettings {
        evaluator: config.evaluator_name().map(str::to_owned),
        results_dir: config.results_path(),
    }
}

/// Runs the bubbletea-rs program with the `EvaluationApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<EvaluationApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
