//! Domain-level keyboard actions independent of key bindings.

use super::sort::SortField;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Table navigation
    /// Move the table cursor up one row. Default: k/↑
    MoveUp,
    /// Move the table cursor down one row. Default: j/↓
    MoveDown,
    /// Move up by one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Move down by one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first row. Default: g/Home
    MoveToTop,
    /// Jump to the last row. Default: G/End
    MoveToBottom,

    // Selection
    /// Select the row under the cursor and focus the detail viewer. Default: Enter
    OpenDetail,
    /// Clear the selection. Default: Esc/x
    CloseDetail,
    /// Switch focus between table and detail viewer. Default: Tab
    CycleFocus,

    // Search
    /// Focus the search box. Default: /
    StartSearch,
    /// Leave the search box keeping the term. Default: Enter (while typing)
    SubmitSearch,
    /// Leave the search box and clear the term. Default: Esc (while typing)
    CancelSearch,

    // Subcommand filter
    /// Next subcommand in the filter list. Default: ]
    NextFilter,
    /// Previous subcommand in the filter list. Default: [
    PrevFilter,
    /// Back to all subcommands. Default: 0
    ResetFilter,

    // Sorting
    /// Sort by a field, toggling direction on repeat. Default: t/c/u/a/d/s
    SortBy(SortField),

    // Application
    /// Switch the subcommand chart between bars and breakdown. Default: v
    ToggleChart,
    /// Reload records from the input source. Default: r
    Reload,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
