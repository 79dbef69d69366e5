//! Shared test utilities.

use bubbletea_rs::{Cmd, Model};
use punnet::tui::EvaluationApp;

pub mod backend;

/// Runs a command chain to completion, feeding each produced message back
/// into the app the way the bubbletea-rs event loop would.
pub async fn drive(app: &mut EvaluationApp, cmd: Option<Cmd>) {
    let mut next = cmd;
    while let Some(pending) = next.take() {
        let Some(msg) = pending.await else {
            break;
        };
        next = app.update(msg);
    }
}
