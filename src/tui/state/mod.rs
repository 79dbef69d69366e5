//! State management for the evaluation TUI.
//!
//! The selector owns the selection; the pun viewer only reads it and keeps
//! its own fetch phase and the funniness and similarity rankings.

mod pun_view;
mod ranking;
mod selection;

pub use pun_view::{FetchResolution, FetchTicket, LoadedPuns, PunViewPhase, PunViewState};
pub use ranking::{PunKey, PunRanking, RankingCriterion};
pub use selection::{HeadlineLoad, HeadlineSelectorState, Selection, SelectorOption};
