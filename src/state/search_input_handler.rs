//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchState::Typing variant.
//! All functions are pure - no side effects, testable without TUI.

use crate::state::search::byte_offset;
use crate::state::SearchState;

/// Activate search input mode, starting from the term already applied.
///
/// The cursor is placed at the end. No-op if already typing.
pub fn activate_search_input(state: SearchState, current_term: &str) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: current_term.to_string(),
            cursor: current_term.chars().count(),
        },
        typing => typing,
    }
}

/// Insert a character at the cursor and advance the cursor.
///
/// No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor if cursor > 0.
///
/// No-op if not in Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move cursor left by one character, saturating at 0.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one character, saturating at the query length.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Leave the search box. The applied term is owned elsewhere.
pub fn deactivate_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}
