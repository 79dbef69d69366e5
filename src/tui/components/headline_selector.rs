//! Headline selector component.
//!
//! Renders the option list: the empty choice first, then one row per
//! headline in backend order. `>` marks the cursor, `*` marks the chosen
//! option.

use crate::tui::state::{HeadlineLoad, HeadlineSelectorState, SelectorOption};

use super::text_fit::fit_to_width;

/// Label of the empty choice.
pub const NO_SELECTION_LABEL: &str = "(no headline)";

/// Columns used by the cursor and chosen markers.
const MARKER_WIDTH: usize = 4;

/// Context for rendering the selector.
#[derive(Debug, Clone)]
pub struct HeadlineSelectorViewContext<'a> {
    /// Selector state to render.
    pub state: &'a HeadlineSelectorState,
    /// Whether keyboard focus is on the selector.
    pub focused: bool,
    /// Rows available for options.
    pub visible_height: usize,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Stateless renderer for the headline selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlineSelectorComponent;

impl HeadlineSelectorComponent {
    /// Renders the visible window of options plus any failure notice.
    #[must_use]
    pub fn view(ctx: &HeadlineSelectorViewContext<'_>) -> String {
        let mut output = String::new();
        let label_width = ctx.max_width.saturating_sub(MARKER_WIDTH);
        let chosen = ctx.state.selection();

        for (index, option) in ctx
            .state
            .options()
            .enumerate()
            .skip(ctx.state.scroll_offset)
            .take(ctx.visible_height.max(1))
        {
            let cursor = if ctx.focused && index == ctx.state.cursor_position {
                '>'
            } else {
                ' '
            };
            let mark = if &option.value() == chosen { '*' } else { ' ' };
            let label = option_label(&option);
            output.push_str(&format!(
                "{cursor}{mark} {}\n",
                fit_to_width(label, label_width)
            ));
        }

        if let HeadlineLoad::Failed(reason) = ctx.state.load() {
            output.push_str(&format!(
                "  {}\n",
                fit_to_width(&format!("Headlines unavailable: {reason}"), label_width)
            ));
        }

        output
    }
}

const fn option_label<'a>(option: &SelectorOption<'a>) -> &'a str {
    match option {
        SelectorOption::NoSelection => NO_SELECTION_LABEL,
        SelectorOption::Headline(headline) => headline.headline.as_str(),
    }
}
