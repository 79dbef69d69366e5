//! Lifecycle and window handlers for the evaluation TUI.
//!
//! Handles the startup message, terminal resize events, help toggling, and
//! quit.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::EvaluationApp;
use crate::tui::messages::AppMsg;

impl EvaluationApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => None,
        }
    }

    /// Handles the synthetic startup message.
    ///
    /// `Initialized` is a one-shot event: the first one issues the headline
    /// request, later ones are ignored so the request happens once per
    /// mount.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }

        self.has_initialized = true;
        Some(self.fetch_headlines_cmd())
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.adjust_scroll_to_cursor();
        None
    }

    /// Creates a command that emits `Initialized` immediately.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
