//! Rendering logic for the evaluation TUI application.
//!
//! Pure query methods producing the rows around the two components.

use super::{EvaluationApp, Focus};
use crate::tui::components::{
    HeadlineSelectorComponent, HeadlineSelectorViewContext, PunListComponent, PunListViewContext,
    fit_to_width,
};

impl EvaluationApp {
    /// Renders the main screen: header, selector, pun list, status bar.
    pub(super) fn render_main_view(&self) -> String {
        let terminal_width = (self.width as usize).max(1);
        let mut output = String::new();

        output.push_str(&self.render_header());

        output.push_str(&self.render_pane_title("Headlines", Focus::Headlines));
        output.push_str(&HeadlineSelectorComponent::view(
            &HeadlineSelectorViewContext {
                state: &self.selector,
                focused: self.focus == Focus::Headlines,
                visible_height: self.calculate_selector_height(),
                max_width: terminal_width,
            },
        ));

        let criterion = self
            .pun_view
            .loaded()
            .filter(|loaded| !loaded.puns.is_empty())
            .map_or_else(String::new, |loaded| {
                format!(" by {}", loaded.criterion.label())
            });
        let pun_title = self.selector.selected_headline().map_or_else(
            || "Puns".to_owned(),
            |headline| format!("Puns for \"{}\"{criterion}", headline.headline),
        );
        output.push_str(&self.render_pane_title(&pun_title, Focus::Puns));
        output.push_str(&PunListComponent::view(&PunListViewContext {
            state: &self.pun_view,
            focused: self.focus == Focus::Puns,
            visible_height: self.calculate_pun_height(),
            max_width: terminal_width,
        }));

        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Punnet - Headline Puns";
        let loading_indicator = if self.is_loading() {
            " [Loading...]"
        } else {
            ""
        };
        let evaluator = self
            .settings
            .evaluator
            .as_deref()
            .map_or_else(String::new, |name| format!(" ({name})"));
        format!("{title}{evaluator}{loading_indicator}\n")
    }

    fn render_pane_title(&self, title: &str, pane: Focus) -> String {
        let marker = if self.focus == pane { "▸" } else { " " };
        let width = (self.width as usize).saturating_sub(2);
        format!("{marker} {}\n", fit_to_width(title, width))
    }

    /// Renders the status bar with the last message or help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(status) = &self.status {
            return format!("{status}\n");
        }
        format!("{}\n", self.status_hints())
    }

    const fn status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  Enter:choose  Tab:focus  J/K:rank  c:criterion  s:save"
        } else {
            "j/k:move  Enter:choose  Esc:clear  Tab:focus  J/K:rank  c:criterion  s:save  ?:help  q:quit"
        }
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first item
  End, G     Go to last item
  Tab        Switch between headlines and puns

Selection:
  Enter      Show puns for the highlighted headline
  Esc        Clear the selection

Ranking (pun list focused):
  K          Move highlighted pun up the shown ranking
  J          Move highlighted pun down the shown ranking
  c          Switch between funniness and similarity
  s          Save both rankings for the evaluator

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
