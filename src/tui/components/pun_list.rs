//! Pun list component.
//!
//! Renders the pun viewer: the placeholder when no headline is selected, a
//! loading line while the request is in flight, and otherwise one numbered
//! row per pun in ranked order. Rank `1.` is the funniest.

use crate::tui::state::{LoadedPuns, PunViewPhase, PunViewState};

use super::text_fit::fit_to_width;

/// Shown when no headline is selected.
pub const PLACEHOLDER: &str = "No headline selected";

/// Shown when the backend returned zero puns.
pub const EMPTY_LIST: &str = "No puns for this headline";

/// Context for rendering the pun list.
#[derive(Debug, Clone)]
pub struct PunListViewContext<'a> {
    /// Viewer state to render.
    pub state: &'a PunViewState,
    /// Whether keyboard focus is on the pun list.
    pub focused: bool,
    /// Rows available for puns.
    pub visible_height: usize,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Stateless renderer for the pun viewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunListComponent;

impl PunListComponent {
    /// Renders the viewer for its current phase.
    #[must_use]
    pub fn view(ctx: &PunListViewContext<'_>) -> String {
        let width = ctx.max_width.saturating_sub(2);
        match ctx.state.phase() {
            PunViewPhase::Idle => format!("  {}\n", fit_to_width(PLACEHOLDER, width)),
            PunViewPhase::Loading(ticket) => format!(
                "  {}\n",
                fit_to_width(
                    &format!("Loading puns for headline {}...", ticket.headline_id()),
                    width
                )
            ),
            PunViewPhase::Loaded(loaded) => Self::render_loaded(ctx, loaded),
        }
    }

    fn render_loaded(ctx: &PunListViewContext<'_>, loaded: &LoadedPuns) -> String {
        let width = ctx.max_width.saturating_sub(2);
        if let Some(notice) = &loaded.notice {
            return format!(
                "  {}\n",
                fit_to_width(&format!("Puns unavailable: {notice}"), width)
            );
        }
        if loaded.puns.is_empty() {
            return format!("  {}\n", fit_to_width(EMPTY_LIST, width));
        }

        let visible_height = ctx.visible_height.max(1);
        let cursor = loaded.ranking().cursor();
        let first = cursor.saturating_sub(visible_height.saturating_sub(1));
        let number_width = loaded.puns.len().to_string().len();
        let text_width = ctx
            .max_width
            .saturating_sub(number_width.saturating_add(4));

        let mut output = String::new();
        for (row, (_key, pun)) in loaded
            .ranking()
            .ranked(&loaded.puns)
            .enumerate()
            .skip(first)
            .take(visible_height)
        {
            let marker = if ctx.focused && row == cursor { '>' } else { ' ' };
            let rank = row.saturating_add(1);
            output.push_str(&format!(
                "{marker} {rank:>number_width$}. {}\n",
                fit_to_width(&pun.generated, text_width)
            ));
        }
        output
    }
}
