//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async fetch results, and terminal
//! events.

use crate::backend::{FetchError, Headline, Pun};

use super::state::FetchTicket;

/// Messages for the evaluation TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one item in the focused pane.
    CursorUp,
    /// Move cursor down one item in the focused pane.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,
    /// Switch focus between the selector and the pun list.
    ToggleFocus,

    // Selection
    /// Choose the highlighted selector option.
    ChooseHighlighted,
    /// Choose the empty option.
    ClearSelection,

    // Data loading
    /// The one headline request completed.
    HeadlinesFetched(Result<Vec<Headline>, FetchError>),
    /// A pun request completed.
    PunsFetched {
        /// Ticket the request was dispatched with.
        ticket: FetchTicket,
        /// Fetch outcome.
        result: Result<Vec<Pun>, FetchError>,
    },

    // Evaluation
    /// Move the highlighted pun one place up the shown ranking.
    PromotePun,
    /// Move the highlighted pun one place down the shown ranking.
    DemotePun,
    /// Switch between the funniness and similarity rankings.
    ToggleCriterion,
    /// Store both rankings in the evaluator's results file.
    SaveRanking,

    // Application lifecycle
    /// Synthetic startup event emitted by `init()`.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor and focus movement.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
                | Self::ToggleFocus
        )
    }

    /// Returns true for selector choices.
    #[must_use]
    pub const fn is_selection(&self) -> bool {
        matches!(self, Self::ChooseHighlighted | Self::ClearSelection)
    }

    /// Returns true for fetch results.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::HeadlinesFetched(_) | Self::PunsFetched { .. })
    }

    /// Returns true for ranking and saving.
    #[must_use]
    pub const fn is_evaluation(&self) -> bool {
        matches!(
            self,
            Self::PromotePun | Self::DemotePun | Self::ToggleCriterion | Self::SaveRanking
        )
    }
}
