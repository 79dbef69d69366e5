//! UI components for the evaluation TUI.
//!
//! Components are stateless renderers: each takes a `*ViewContext` borrowing
//! the state it draws and returns the rendered rows.

mod headline_selector;
mod pun_list;
mod text_fit;

pub use headline_selector::{
    HeadlineSelectorComponent, HeadlineSelectorViewContext, NO_SELECTION_LABEL,
};
pub use pun_list::{EMPTY_LIST, PLACEHOLDER, PunListComponent, PunListViewContext};
pub(crate) use text_fit::fit_to_width;
