//! Diagnostic logging set-up.
//!
//! Library code logs through `tracing` macros; the binary installs a
//! `tracing-subscriber` formatter once at startup. The interactive TUI owns
//! the terminal, so its logs go to the configured log file or nowhere.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::backend::FetchError;
use crate::config::OperationMode;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to this file.
    File(PathBuf),
    /// Write to standard error.
    Stderr,
    /// Install no subscriber.
    Discard,
}

impl LogTarget {
    /// Chooses the destination for `mode`, preferring an explicit log file.
    #[must_use]
    pub fn for_mode(mode: OperationMode, log_file: Option<&Path>) -> Self {
        match (log_file, mode) {
            (Some(path), _) => Self::File(path.to_path_buf()),
            (None, OperationMode::EvaluationTui) => Self::Discard,
            (None, OperationMode::HeadlineListing | OperationMode::PunListing) => Self::Stderr,
        }
    }
}

/// Installs the global subscriber for `target`.
///
/// # Errors
///
/// Returns [`FetchError::Io`] when the log file cannot be opened and
/// [`FetchError::Configuration`] when a subscriber is already installed.
pub fn init_logging(target: &LogTarget) -> Result<(), FetchError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::Discard => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| FetchError::Io {
                    message: format!("cannot open log file {}: {error}", path.display()),
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|error| FetchError::Configuration {
        message: format!("logging already initialised: {error}"),
    })
}
