//! Layout helpers for the evaluation TUI model.
//!
//! The selector takes the rows its options need, bounded so the pun list
//! always keeps `MIN_PUN_HEIGHT` rows; the pun list gets the rest.

use super::{CHROME_HEIGHT, EvaluationApp, MIN_PUN_HEIGHT, MIN_SELECTOR_HEIGHT};
use crate::tui::state::HeadlineLoad;

impl EvaluationApp {
    /// Body rows shared by the selector and the pun list.
    const fn visible_body_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }

    /// Rows available for selector options.
    pub(super) fn calculate_selector_height(&self) -> usize {
        let notice_rows = usize::from(matches!(self.selector.load(), HeadlineLoad::Failed(_)));
        let natural = self.selector.option_count();
        let max = self
            .visible_body_height()
            .saturating_sub(MIN_PUN_HEIGHT)
            .saturating_sub(notice_rows);
        natural.min(max).max(MIN_SELECTOR_HEIGHT)
    }

    /// Rows available for the pun list.
    pub(super) fn calculate_pun_height(&self) -> usize {
        let notice_rows = usize::from(matches!(self.selector.load(), HeadlineLoad::Failed(_)));
        self.visible_body_height()
            .saturating_sub(self.calculate_selector_height())
            .saturating_sub(notice_rows)
            .max(1)
    }

    /// Adjusts the selector scroll offset so the cursor remains visible.
    pub(super) fn adjust_scroll_to_cursor(&mut self) {
        let cursor = self.selector.cursor_position;
        let visible_height = self.calculate_selector_height();

        if cursor < self.selector.scroll_offset {
            self.selector.scroll_offset = cursor;
            return;
        }

        let viewport_end = self.selector.scroll_offset.saturating_add(visible_height);
        if cursor >= viewport_end {
            self.selector.scroll_offset = cursor.saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
