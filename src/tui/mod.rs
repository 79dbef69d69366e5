//! Terminal User Interface for browsing and ranking headline puns.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: application state in [`app::EvaluationApp`]
//! - **View**: rendering in each component's `view()` function
//! - **Update**: message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: main application model
//! - [`messages`]: message types for the update loop
//! - [`state`]: selector, pun viewer, and ranking state
//! - [`components`]: stateless renderers
//! - [`input`]: key-to-message mapping
//!
//! # Startup Context
//!
//! bubbletea-rs constructs the model through the static `Model::init()`, so
//! the gateway and evaluation settings are handed over through module-level
//! storage. Call [`set_app_context`] before starting the program; without it
//! every fetch fails with a configuration error and the views fall back to
//! their empty states.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;

use crate::backend::{FetchError, Headline, HeadlineGateway, HeadlineId, Pun};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::EvaluationApp;

/// Global storage for the startup context.
static APP_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// Where and under which name rankings are saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationSettings {
    /// Evaluator recorded with each saved ranking; saving is refused without it.
    pub evaluator: Option<String>,
    /// Directory receiving `<evaluator>.jsonl` files.
    pub results_dir: PathBuf,
}

struct AppContext {
    gateway: Arc<dyn HeadlineGateway>,
    settings: EvaluationSettings,
}

/// Sets the gateway and evaluation settings for the TUI.
///
/// Must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_app_context(gateway: Arc<dyn HeadlineGateway>, settings: EvaluationSettings) -> bool {
    APP_CONTEXT.set(AppContext { gateway, settings }).is_ok()
}

/// Returns the configured gateway and settings, or an unconfigured gateway
/// and default settings when [`set_app_context`] was never called.
pub(crate) fn get_app_context() -> (Arc<dyn HeadlineGateway>, EvaluationSettings) {
    APP_CONTEXT.get().map_or_else(
        || {
            (
                Arc::new(UnconfiguredGateway) as Arc<dyn HeadlineGateway>,
                EvaluationSettings::default(),
            )
        },
        |context| (Arc::clone(&context.gateway), context.settings.clone()),
    )
}

/// Gateway used when the TUI starts without a context.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnconfiguredGateway;

impl UnconfiguredGateway {
    fn error() -> FetchError {
        FetchError::Configuration {
            message: "backend gateway not configured".to_owned(),
        }
    }
}

#[async_trait]
impl HeadlineGateway for UnconfiguredGateway {
    async fn headlines(&self) -> Result<Vec<Headline>, FetchError> {
        Err(Self::error())
    }

    async fn generated_puns(&self, _id: &HeadlineId) -> Result<Vec<Pun>, FetchError> {
        Err(Self::error())
    }
}
