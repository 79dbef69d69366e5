//! Scenario state for evaluation TUI BDD tests.

use std::time::Duration;

use bubbletea_rs::Cmd;
use punnet::tui::EvaluationApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;

use crate::support::backend::BackendHarness;

/// A pun fetch command issued but not yet awaited, keyed by headline title.
pub(crate) struct PendingFetch {
    pub(crate) title: String,
    pub(crate) cmd: Cmd,
}

/// State shared across steps in an evaluation TUI scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct EvaluationState {
    pub(crate) backend: Slot<BackendHarness>,
    /// Headlines served once the TUI starts, in backend order.
    pub(crate) headlines: Slot<Vec<(u64, String)>>,
    /// Status code for a failing headline listing.
    pub(crate) headline_failure: Slot<u16>,
    pub(crate) timeout: Slot<Duration>,
    pub(crate) evaluator: Slot<String>,
    pub(crate) results_dir: Slot<TempDir>,
    pub(crate) app: Slot<EvaluationApp>,
    pub(crate) pending: Slot<Vec<PendingFetch>>,
}
