//! Main TUI application model implementing the MVU pattern.
//!
//! The app owns three pieces of state: the headline selector (which alone
//! writes the selection), the pun viewer (which reacts to it), and the
//! evaluator's ranking inside the viewer's loaded list.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and frame
//!   normalisation
//! - `rendering`: header, status bar, and help overlay
//! - `layout`: pane heights and scroll adjustment
//! - `navigation`: cursor movement in the focused pane
//! - `selection_handlers`: choosing options and dispatching pun fetches
//! - `fetch_handlers`: fetch commands and their results
//! - `evaluation_handlers`: ranking and saving
//! - `lifecycle_handlers`: startup, resize, help, and quit

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::backend::HeadlineGateway;

use super::EvaluationSettings;
use super::messages::AppMsg;
use super::state::{HeadlineLoad, HeadlineSelectorState, PunViewState, Selection};

mod evaluation_handlers;
mod fetch_handlers;
mod layout;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod selection_handlers;

/// Rows used by the header, the two pane titles, and the status bar.
pub(crate) const CHROME_HEIGHT: usize = 4;
/// Minimum rows reserved for the selector options.
pub(crate) const MIN_SELECTOR_HEIGHT: usize = 1;
/// Minimum rows reserved for the pun list.
pub(crate) const MIN_PUN_HEIGHT: usize = 3;

/// Which pane receives cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The headline selector.
    #[default]
    Headlines,
    /// The pun list.
    Puns,
}

impl Focus {
    const fn toggled(self) -> Self {
        match self {
            Self::Headlines => Self::Puns,
            Self::Puns => Self::Headlines,
        }
    }
}

/// Main application model for the evaluation TUI.
pub struct EvaluationApp {
    gateway: Arc<dyn HeadlineGateway>,
    settings: EvaluationSettings,
    pub(crate) selector: HeadlineSelectorState,
    pub(crate) pun_view: PunViewState,
    pub(crate) focus: Focus,
    /// Last save outcome or other transient message for the status bar.
    pub(crate) status: Option<String>,
    width: u16,
    height: u16,
    pub(crate) show_help: bool,
    has_initialized: bool,
}

impl fmt::Debug for EvaluationApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationApp")
            .field("settings", &self.settings)
            .field("selector", &self.selector)
            .field("pun_view", &self.pun_view)
            .field("focus", &self.focus)
            .field("status", &self.status)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl EvaluationApp {
    /// Creates an application that fetches through `gateway`.
    ///
    /// No request is issued until the `Initialized` message is handled.
    #[must_use]
    pub fn new(gateway: Arc<dyn HeadlineGateway>, settings: EvaluationSettings) -> Self {
        Self {
            gateway,
            settings,
            selector: HeadlineSelectorState::new(),
            pun_view: PunViewState::new(),
            focus: Focus::default(),
            status: None,
            width: 80,
            height: 24,
            show_help: false,
            has_initialized: false,
        }
    }

    /// Creates an application with explicit terminal dimensions.
    #[must_use]
    pub fn with_dimensions(
        gateway: Arc<dyn HeadlineGateway>,
        settings: EvaluationSettings,
        width: u16,
        height: u16,
    ) -> Self {
        let mut app = Self::new(gateway, settings);
        app.width = width;
        app.height = height;
        app
    }

    /// Returns the selector state.
    #[must_use]
    pub const fn selector(&self) -> &HeadlineSelectorState {
        &self.selector
    }

    /// Returns the pun viewer state.
    #[must_use]
    pub const fn pun_view(&self) -> &PunViewState {
        &self.pun_view
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        self.selector.selection()
    }

    /// Returns the focused pane.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the status bar message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns true while any fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.selector.load(), HeadlineLoad::Pending) || self.pun_view.is_loading()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to a handler per message category and returns any command
    /// the handler produced.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_selection() {
            return self.handle_selection_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if msg.is_evaluation() {
            return self.handle_evaluation_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}
