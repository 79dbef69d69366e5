//! Selection handlers.
//!
//! The selector records the chosen value; the viewer is then told the
//! current selection and decides whether a pun fetch is needed. Choosing an
//! unchanged value dispatches nothing.

use bubbletea_rs::Cmd;

use super::{EvaluationApp, Focus};
use crate::tui::messages::AppMsg;

impl EvaluationApp {
    /// Dispatches selection messages to their handlers.
    pub(super) fn handle_selection_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let changed = match msg {
            AppMsg::ChooseHighlighted if self.focus == Focus::Headlines => {
                self.selector.choose_highlighted()
            }
            AppMsg::ClearSelection => {
                let cleared = self.selector.clear();
                self.selector.scroll_offset = 0;
                cleared
            }
            _ => false,
        };

        if !changed {
            return None;
        }
        self.status = None;
        self.sync_pun_view()
    }

    /// Hands the current selection to the viewer, returning the fetch
    /// command when the viewer asks for one.
    fn sync_pun_view(&mut self) -> Option<Cmd> {
        let ticket = self.pun_view.on_selection(self.selector.selection())?;
        Some(self.fetch_puns_cmd(ticket))
    }
}
