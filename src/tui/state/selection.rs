//! Headline selection state.
//!
//! The selector owns the [`Selection`]: nothing else writes it. Options are
//! the fixed "no selection" entry followed by one entry per headline in
//! backend order, so option `0` is always the empty choice and option `n`
//! is headline `n - 1`.

use crate::backend::{FetchError, Headline, HeadlineId};

/// The currently chosen headline, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No headline chosen.
    #[default]
    None,
    /// A headline chosen by identifier.
    Headline(HeadlineId),
}

impl Selection {
    /// Returns true when no headline is chosen.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the chosen identifier, if any.
    #[must_use]
    pub const fn headline_id(&self) -> Option<&HeadlineId> {
        match self {
            Self::None => None,
            Self::Headline(id) => Some(id),
        }
    }
}

/// One entry of the selector's option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOption<'a> {
    /// The fixed empty choice.
    NoSelection,
    /// A headline choice.
    Headline(&'a Headline),
}

impl SelectorOption<'_> {
    /// Selection value this option stands for.
    #[must_use]
    pub fn value(&self) -> Selection {
        match self {
            Self::NoSelection => Selection::None,
            Self::Headline(headline) => Selection::Headline(headline.headline_id.clone()),
        }
    }
}

/// Progress of the one headline request issued per mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeadlineLoad {
    /// Request outstanding.
    #[default]
    Pending,
    /// Headlines arrived (possibly zero).
    Loaded,
    /// Request failed; options fall back to the empty choice only.
    Failed(String),
}

/// Option list, cursor, and the selection it drives.
#[derive(Debug, Clone, Default)]
pub struct HeadlineSelectorState {
    headlines: Vec<Headline>,
    load: HeadlineLoad,
    selection: Selection,
    /// Highlighted option index (0 is the empty choice).
    pub cursor_position: usize,
    /// First visible option index.
    pub scroll_offset: usize,
}

impl HeadlineSelectorState {
    /// Creates a selector with no headlines and the request pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the headline list with the result of the headline request.
    ///
    /// A failure leaves only the empty choice and records the reason.
    pub fn apply_headlines(&mut self, result: Result<Vec<Headline>, FetchError>) {
        match result {
            Ok(headlines) => {
                self.headlines = headlines;
                self.load = HeadlineLoad::Loaded;
            }
            Err(error) => {
                self.headlines.clear();
                self.load = HeadlineLoad::Failed(error.to_string());
            }
        }
        self.clamp_cursor();
    }

    /// Headlines in backend order.
    #[must_use]
    pub fn headlines(&self) -> &[Headline] {
        &self.headlines
    }

    /// Current request progress.
    #[must_use]
    pub const fn load(&self) -> &HeadlineLoad {
        &self.load
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected headline record, if the selection names a known one.
    #[must_use]
    pub fn selected_headline(&self) -> Option<&Headline> {
        let id = self.selection.headline_id()?;
        self.headlines.iter().find(|h| &h.headline_id == id)
    }

    /// Number of options including the empty choice.
    #[must_use]
    pub const fn option_count(&self) -> usize {
        self.headlines.len().saturating_add(1)
    }

    /// Option at `index`, if in range.
    #[must_use]
    pub fn option_at(&self, index: usize) -> Option<SelectorOption<'_>> {
        match index.checked_sub(1) {
            None => Some(SelectorOption::NoSelection),
            Some(headline_index) => self
                .headlines
                .get(headline_index)
                .map(SelectorOption::Headline),
        }
    }

    /// Iterates every option in display order.
    pub fn options(&self) -> impl Iterator<Item = SelectorOption<'_>> {
        std::iter::once(SelectorOption::NoSelection)
            .chain(self.headlines.iter().map(SelectorOption::Headline))
    }

    /// Sets the selection. Returns `true` when the value changed.
    pub fn choose(&mut self, selection: Selection) -> bool {
        if self.selection == selection {
            return false;
        }
        self.selection = selection;
        true
    }

    /// Chooses the highlighted option. Returns `true` when the value changed.
    pub fn choose_highlighted(&mut self) -> bool {
        let Some(option) = self.option_at(self.cursor_position) else {
            return false;
        };
        let value = option.value();
        self.choose(value)
    }

    /// Chooses the empty option and moves the cursor onto it.
    /// Returns `true` when the value changed.
    pub fn clear(&mut self) -> bool {
        self.cursor_position = 0;
        self.choose(Selection::None)
    }

    /// Keeps the cursor within the option list.
    pub fn clamp_cursor(&mut self) {
        let max_index = self.option_count().saturating_sub(1);
        if self.cursor_position > max_index {
            self.cursor_position = max_index;
        }
    }
}
