//! Navigation handlers.
//!
//! Movement applies to the focused pane: the selector cursor (followed by
//! a scroll adjustment) or the highlighted row of the loaded pun list.
//! Moving never changes the selection; only choosing does.

use bubbletea_rs::Cmd;

use super::{EvaluationApp, Focus};
use crate::tui::messages::AppMsg;

/// How the cursor moves.
#[derive(Debug, Clone, Copy)]
enum Movement {
    Up(usize),
    Down(usize),
    First,
    Last,
}

impl EvaluationApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let movement = match msg {
            AppMsg::CursorUp => Movement::Up(1),
            AppMsg::CursorDown => Movement::Down(1),
            AppMsg::PageUp => Movement::Up(self.page_size()),
            AppMsg::PageDown => Movement::Down(self.page_size()),
            AppMsg::Home => Movement::First,
            AppMsg::End => Movement::Last,
            AppMsg::ToggleFocus => {
                self.focus = self.focus.toggled();
                return None;
            }
            _ => return None,
        };

        match self.focus {
            Focus::Headlines => self.move_selector_cursor(movement),
            Focus::Puns => self.move_pun_cursor(movement),
        }
        None
    }

    fn page_size(&self) -> usize {
        match self.focus {
            Focus::Headlines => self.calculate_selector_height(),
            Focus::Puns => self.calculate_pun_height(),
        }
    }

    fn move_selector_cursor(&mut self, movement: Movement) {
        let max_index = self.selector.option_count().saturating_sub(1);
        let current = self.selector.cursor_position;
        self.selector.cursor_position = match movement {
            Movement::Up(step) => current.saturating_sub(step),
            Movement::Down(step) => current.saturating_add(step).min(max_index),
            Movement::First => 0,
            Movement::Last => max_index,
        };
        self.adjust_scroll_to_cursor();
    }

    fn move_pun_cursor(&mut self, movement: Movement) {
        let Some(loaded) = self.pun_view.loaded_mut() else {
            return;
        };
        match movement {
            Movement::Up(step) => loaded.ranking_mut().move_cursor(true, step),
            Movement::Down(step) => loaded.ranking_mut().move_cursor(false, step),
            Movement::First => loaded.ranking_mut().jump(false),
            Movement::Last => loaded.ranking_mut().jump(true),
        }
    }
}
