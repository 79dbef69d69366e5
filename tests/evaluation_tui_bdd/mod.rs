//! Support modules for the evaluation TUI BDD tests.

pub(crate) mod state;

pub(crate) use state::{EvaluationState, PendingFetch};
