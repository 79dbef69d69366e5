//! Punnet library crate for browsing and ranking generated headline puns.
//!
//! The library talks to a pun generation backend over two read-only JSON
//! endpoints (`/get_headlines` and `/get_generated?id=...`), drives an
//! interactive terminal UI in which an evaluator picks a headline and ranks
//! its puns by funniness and by similarity, and stores those rankings in local
//! JSON Lines files.

pub mod backend;
pub mod config;
pub mod evaluation;
pub mod logging;
pub mod tui;

pub use backend::{
    BackendBaseUrl, FetchError, Headline, HeadlineGateway, HeadlineId, HttpHeadlineGateway, Pun,
};
pub use config::{OperationMode, PunnetConfig};
pub use evaluation::EvaluationRecord;
pub use logging::{LogTarget, init_logging};
