//! Ranking and saving handlers.
//!
//! `J`/`K` reorder the shown ranking while the pun list has focus; `c`
//! switches between the funniness and similarity rankings; `s` stores both
//! in the evaluator's results file. Outcomes are reported in the status bar.

use bubbletea_rs::Cmd;

use super::{EvaluationApp, Focus};
use crate::evaluation::{records_for_ranking, save_records};
use crate::tui::messages::AppMsg;

impl EvaluationApp {
    /// Dispatches evaluation messages to their handlers.
    pub(super) fn handle_evaluation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::PromotePun if self.focus == Focus::Puns => self.reorder(true),
            AppMsg::DemotePun if self.focus == Focus::Puns => self.reorder(false),
            AppMsg::ToggleCriterion => self.toggle_criterion(),
            AppMsg::SaveRanking => self.save_ranking(),
            _ => {}
        }
        None
    }

    fn reorder(&mut self, up: bool) {
        let Some(loaded) = self.pun_view.loaded_mut() else {
            return;
        };
        let moved = if up {
            loaded.ranking_mut().promote()
        } else {
            loaded.ranking_mut().demote()
        };
        if moved {
            self.status = None;
        }
    }

    fn toggle_criterion(&mut self) {
        let Some(loaded) = self.pun_view.loaded_mut() else {
            return;
        };
        loaded.toggle_criterion();
        self.status = Some(format!("Ranking by {}", loaded.criterion.label()));
    }

    fn save_ranking(&mut self) {
        self.status = Some(match self.try_save_ranking() {
            Ok(message) | Err(message) => message,
        });
    }

    fn try_save_ranking(&self) -> Result<String, String> {
        let evaluator = self
            .settings
            .evaluator
            .as_deref()
            .ok_or_else(|| "Set an evaluator name (--evaluator) to save rankings".to_owned())?;

        let nothing_loaded = || "Nothing to save: no puns loaded".to_owned();
        let loaded = self
            .pun_view
            .loaded()
            .filter(|loaded| !loaded.puns.is_empty())
            .ok_or_else(nothing_loaded)?;
        let headline = self
            .selector
            .selected_headline()
            .filter(|headline| headline.headline_id == loaded.headline_id)
            .ok_or_else(nothing_loaded)?;

        let records = records_for_ranking(evaluator, headline, loaded.ranks());
        let path = save_records(&self.settings.results_dir, evaluator, &records)
            .map_err(|error| format!("Save failed: {error}"))?;

        Ok(format!(
            "Saved ranking of {} puns to {}",
            records.len(),
            path.display()
        ))
    }
}
