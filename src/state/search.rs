//! Search box state machine.
//!
//! SearchState is a sum type representing the two possible search box states:
//! - Inactive: the box is not focused (a term may still be applied)
//! - Typing: the user is editing the term; every edit is applied live

// ===== SearchState =====

/// Search box state.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Search box not focused.
    #[default]
    Inactive,
    /// User is typing. `cursor` counts characters, not bytes.
    Typing { query: String, cursor: usize },
}

impl SearchState {
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }

    /// Text being typed, if the box is focused.
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchState::Typing { query, .. } => Some(query),
            SearchState::Inactive => None,
        }
    }
}

/// Byte offset of the `cursor`-th character of `text`.
pub(crate) fn byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
