//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.punnet.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PUNNET_BASE_URL`, `PUNNET_EVALUATOR`, ...
//! 4. **Command-line arguments** – `--base-url`/`-b`, `--headline`/`-H`, ...
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "http://localhost:5000"
//! request_timeout_seconds = 10
//! evaluator = "ana"
//! results_dir = "results/evaluation"
//! log_file = "punnet.log"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::backend::error::FetchError;
use crate::backend::{BackendBaseUrl, HeadlineId};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_RESULTS_DIR: &str = "results/evaluation";

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print every headline and exit.
    HeadlineListing,
    /// Print the puns for one headline and exit.
    PunListing,
    /// Interactive evaluation TUI.
    EvaluationTui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use punnet::PunnetConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = PunnetConfig::load().expect("failed to load configuration");
/// let base_url = config.backend_base_url().expect("base URL should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PUNNET",
    discovery(
        dotfile_name = ".punnet.toml",
        config_file_name = "punnet.toml",
        app_name = "punnet"
    )
)]
pub struct PunnetConfig {
    /// Base URL of the pun generation backend.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `PUNNET_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// Upper bound for each backend request, in seconds.
    ///
    /// A request that does not complete in time is treated as failed and
    /// the affected list falls back to empty.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Prints the puns for this headline identifier and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--headline <ID>` or `-H <ID>`
    /// - Environment: `PUNNET_HEADLINE`
    #[ortho_config(cli_short = 'H')]
    pub headline: Option<String>,

    /// Prints every headline and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--list-headlines` / `-l`
    /// - Config file: `list_headlines = true`
    #[ortho_config(cli_short = 'l')]
    pub list_headlines: bool,

    /// Name recorded with saved rankings; also names the results file.
    ///
    /// Can be provided via:
    /// - CLI: `--evaluator <NAME>` or `-e <NAME>`
    /// - Environment: `PUNNET_EVALUATOR`
    /// - Config file: `evaluator = "..."`
    #[ortho_config(cli_short = 'e')]
    pub evaluator: Option<String>,

    /// Directory that receives `<evaluator>.jsonl` ranking files.
    #[ortho_config()]
    pub results_dir: String,

    /// File that receives log output.
    ///
    /// The TUI owns the terminal, so interactive sessions only log when this
    /// is set.
    #[ortho_config()]
    pub log_file: Option<String>,
}

impl Default for PunnetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            headline: None,
            list_headlines: false,
            evaluator: None,
            results_dir: DEFAULT_RESULTS_DIR.to_owned(),
            log_file: None,
        }
    }
}

impl PunnetConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `HeadlineListing` when `list_headlines` is set, `PunListing`
    /// when a headline is given, or `EvaluationTui` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.list_headlines {
            OperationMode::HeadlineListing
        } else if self.headline.is_some() {
            OperationMode::PunListing
        } else {
            OperationMode::EvaluationTui
        }
    }

    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when `list_headlines` and
    /// `headline` are both set, or when the request timeout is zero.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.list_headlines && self.headline.is_some() {
            return Err(FetchError::Configuration {
                message: "--list-headlines and --headline cannot be used together".to_owned(),
            });
        }

        if self.request_timeout_seconds == 0 {
            return Err(FetchError::Configuration {
                message: "request_timeout_seconds must be greater than zero".to_owned(),
            });
        }

        Ok(())
    }

    /// Parses the configured backend base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] when the URL is unusable.
    pub fn backend_base_url(&self) -> Result<BackendBaseUrl, FetchError> {
        BackendBaseUrl::parse(&self.base_url)
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns the headline identifier for pun listing mode.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when no headline is configured
    /// or the identifier is blank.
    pub fn require_headline(&self) -> Result<HeadlineId, FetchError> {
        let raw = self
            .headline
            .as_deref()
            .ok_or_else(|| FetchError::Configuration {
                message: "headline identifier is required (use --headline or -H)".to_owned(),
            })?;

        HeadlineId::new(raw).map_err(|message| FetchError::Configuration { message })
    }

    /// Returns the evaluator name, trimmed, when one is configured.
    #[must_use]
    pub fn evaluator_name(&self) -> Option<&str> {
        self.evaluator
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Returns the results directory as a path.
    #[must_use]
    pub fn results_path(&self) -> PathBuf {
        PathBuf::from(&self.results_dir)
    }
}

#[cfg(test)]
mod tests;
