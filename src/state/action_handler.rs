//! Keyboard action dispatch.
//!
//! Maps a `KeyAction` to AppState transitions. Focus-aware: navigation keys
//! move the table cursor, or scroll the output when the detail viewer has focus.

use crate::model::KeyAction;
use crate::state::{AppState, FocusPane};

/// What the event loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    /// Start a background reload from the input source.
    Reload,
    Quit,
}

/// Apply `action` to `state`.
///
/// `page_height` is the number of table rows (or detail lines) per page.
pub fn handle_action(state: &mut AppState, action: KeyAction, page_height: usize) -> ActionOutcome {
    // The help overlay swallows everything except closing it and quitting
    if state.help_visible {
        match action {
            KeyAction::Quit => return ActionOutcome::Quit,
            KeyAction::Help | KeyAction::CloseDetail => state.help_visible = false,
            _ => {}
        }
        return ActionOutcome::Continue;
    }

    let page = page_height.max(1);
    let detail_page = u16::try_from(page).unwrap_or(u16::MAX);

    match action {
        KeyAction::MoveUp if state.focus == FocusPane::Detail => state.scroll_detail_up(1),
        KeyAction::MoveDown if state.focus == FocusPane::Detail => state.scroll_detail_down(1),
        KeyAction::PageUp if state.focus == FocusPane::Detail => {
            state.scroll_detail_up(detail_page)
        }
        KeyAction::PageDown if state.focus == FocusPane::Detail => {
            state.scroll_detail_down(detail_page)
        }
        KeyAction::MoveToTop if state.focus == FocusPane::Detail => state.detail_scroll = 0,

        KeyAction::MoveUp => state.move_cursor_up(1),
        KeyAction::MoveDown => state.move_cursor_down(1),
        KeyAction::PageUp => state.move_cursor_up(page),
        KeyAction::PageDown => state.move_cursor_down(page),
        KeyAction::MoveToTop => state.move_cursor_to_top(),
        KeyAction::MoveToBottom => state.move_cursor_to_bottom(),

        KeyAction::OpenDetail => state.open_detail(),
        KeyAction::CloseDetail => state.close_detail(),
        KeyAction::CycleFocus => state.cycle_focus(),

        KeyAction::StartSearch => state.start_search(),
        KeyAction::SubmitSearch => state.submit_search(),
        KeyAction::CancelSearch => state.cancel_search(),

        KeyAction::NextFilter => state.cycle_subcommand_filter(true),
        KeyAction::PrevFilter => state.cycle_subcommand_filter(false),
        KeyAction::ResetFilter => {
            state.set_subcommand_filter(crate::view_model::SubcommandFilter::All)
        }

        KeyAction::SortBy(field) => state.sort_by(field),

        KeyAction::ToggleChart => state.toggle_chart(),
        KeyAction::Help => state.toggle_help(),
        KeyAction::Reload => return ActionOutcome::Reload,
        KeyAction::Quit => return ActionOutcome::Quit,
    }

    ActionOutcome::Continue
}
