//! Input handling for the TUI application.
//!
//! Translates terminal key events into application messages.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Tab => Some(AppMsg::ToggleFocus),
        KeyCode::Enter => Some(AppMsg::ChooseHighlighted),
        KeyCode::Esc => Some(AppMsg::ClearSelection),
        KeyCode::Char('K') => Some(AppMsg::PromotePun),
        KeyCode::Char('J') => Some(AppMsg::DemotePun),
        KeyCode::Char('c') => Some(AppMsg::ToggleCriterion),
        KeyCode::Char('s') => Some(AppMsg::SaveRanking),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
