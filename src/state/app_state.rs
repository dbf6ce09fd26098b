//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It owns the
//! `LogViewModel` and re-derives rows after every change; nothing is
//! recomputed implicitly.

use crate::model::{ChartKind, LogRecord, SortField};
use crate::parser::LoadOutcome;
use crate::state::search_input_handler::{
    activate_search_input, deactivate_search, handle_backspace, handle_char_input,
    handle_cursor_left, handle_cursor_right,
};
use crate::state::SearchState;
use crate::view_model::{LogViewModel, SubcommandFilter};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Focus**: Table, Detail or Search (see `FocusPane`)
/// - **Search**: Inactive or Typing; typing applies the term on every keystroke
/// - **Load**: Idle or Loading while a reload runs in the background
///
/// # Cursor
///
/// `cursor` indexes the current rows. Every change that can shrink the rows
/// clamps it, so it is always `< row_count` (or 0 when there are no rows).
#[derive(Debug)]
pub struct AppState {
    view_model: LogViewModel,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Highlighted row in the command table.
    cursor: usize,

    /// Search box state.
    pub search: SearchState,

    /// How subcommand usage is drawn.
    pub chart: ChartKind,

    /// Number of points in the duration chart.
    pub duration_points: usize,

    /// Vertical scroll of the detail viewer's output, in lines.
    pub detail_scroll: u16,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Whether a reload is in flight.
    pub load_status: LoadStatus,

    /// Entries rejected by the most recent load.
    pub rejected_count: usize,

    /// Last reload failure, shown in the status bar until the next load.
    pub load_error: Option<String>,

    /// Where records come from, shown in the header.
    pub source_label: String,
}

impl AppState {
    /// Create new AppState around a view-model with default UI state.
    pub fn new(view_model: LogViewModel) -> Self {
        Self {
            view_model,
            focus: FocusPane::Table,
            cursor: 0,
            search: SearchState::Inactive,
            chart: ChartKind::default(),
            duration_points: crate::stats::DEFAULT_DURATION_POINTS,
            detail_scroll: 0,
            help_visible: false,
            load_status: LoadStatus::Idle,
            rejected_count: 0,
            load_error: None,
            source_label: String::new(),
        }
    }

    pub fn view_model(&self) -> &LogViewModel {
        &self.view_model
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Record under the table cursor.
    pub fn cursor_record(&self) -> Option<&LogRecord> {
        self.view_model.row(self.cursor)
    }

    // ----- Loading -----

    /// Install a freshly loaded record set.
    pub fn apply_load(&mut self, outcome: LoadOutcome) {
        self.rejected_count = outcome.rejected.len();
        self.load_status = LoadStatus::Idle;
        self.load_error = None;
        self.view_model.set_records(outcome.records);

        if self.view_model.selected().is_none() && self.focus == FocusPane::Detail {
            self.focus = FocusPane::Table;
        }
        self.clamp_cursor();
    }

    /// A reload failed; the previous records stay.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.load_status = LoadStatus::Idle;
        self.load_error = Some(message.into());
    }

    pub fn mark_loading(&mut self) {
        self.load_status = LoadStatus::Loading;
    }

    // ----- Filters and sorting -----

    /// Apply a search term immediately (CLI `--search` and live typing).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view_model.set_search_term(term);
        self.clamp_cursor();
    }

    pub fn set_subcommand_filter(&mut self, filter: SubcommandFilter) {
        self.view_model.set_subcommand_filter(filter);
        self.clamp_cursor();
    }

    /// Step through `All, sub1, sub2, ...` wrapping at both ends.
    pub fn cycle_subcommand_filter(&mut self, forward: bool) {
        let options = self.view_model.subcommands();
        if options.is_empty() {
            return;
        }

        // Position 0 is the "all" sentinel, 1.. are the subcommands
        let slots = options.len() + 1;
        let current = match self.view_model.subcommand_filter() {
            SubcommandFilter::All => 0,
            SubcommandFilter::Only(value) => options
                .iter()
                .position(|s| s == value)
                .map(|i| i + 1)
                .unwrap_or(0),
        };
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        let filter = match next {
            0 => SubcommandFilter::All,
            n => SubcommandFilter::Only(options[n - 1].clone()),
        };
        self.set_subcommand_filter(filter);
    }

    /// Sort by `field`, keeping the cursor on the same record.
    pub fn sort_by(&mut self, field: SortField) {
        let focused = self.cursor_record().map(|r| r.id().clone());
        self.view_model.set_sort(field);
        if let Some(position) = focused.and_then(|id| self.view_model.position_of(&id)) {
            self.cursor = position;
        }
        self.clamp_cursor();
    }

    // ----- Cursor -----

    pub fn move_cursor_up(&mut self, amount: usize) {
        self.cursor = self.cursor.saturating_sub(amount);
    }

    pub fn move_cursor_down(&mut self, amount: usize) {
        self.cursor = self.cursor.saturating_add(amount);
        self.clamp_cursor();
    }

    pub fn move_cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_bottom(&mut self) {
        self.cursor = self.view_model.row_count().saturating_sub(1);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self
            .cursor
            .min(self.view_model.row_count().saturating_sub(1));
    }

    // ----- Selection -----

    /// Select the record under the cursor and show it in the detail viewer.
    pub fn open_detail(&mut self) {
        if let Some(id) = self.cursor_record().map(|r| r.id().clone()) {
            self.view_model.select(id);
            self.detail_scroll = 0;
            self.focus = FocusPane::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.view_model.clear_selection();
        self.detail_scroll = 0;
        self.focus = FocusPane::Table;
    }

    /// Table ⇄ Detail. Detail is only reachable with a selection.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Table if self.view_model.selected_record().is_some() => FocusPane::Detail,
            FocusPane::Table => FocusPane::Table,
            FocusPane::Detail | FocusPane::Search => FocusPane::Table,
        };
    }

    pub fn scroll_detail_up(&mut self, amount: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(amount);
    }

    pub fn scroll_detail_down(&mut self, amount: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(amount);
    }

    // ----- Search box -----

    pub fn start_search(&mut self) {
        let term = self.view_model.search_term().to_string();
        self.search = activate_search_input(std::mem::take(&mut self.search), &term);
        self.focus = FocusPane::Search;
    }

    pub fn search_input_char(&mut self, ch: char) {
        self.search = handle_char_input(std::mem::take(&mut self.search), ch);
        self.apply_typed_query();
    }

    pub fn search_backspace(&mut self) {
        self.search = handle_backspace(std::mem::take(&mut self.search));
        self.apply_typed_query();
    }

    pub fn search_cursor_left(&mut self) {
        self.search = handle_cursor_left(std::mem::take(&mut self.search));
    }

    pub fn search_cursor_right(&mut self) {
        self.search = handle_cursor_right(std::mem::take(&mut self.search));
    }

    /// Leave the search box keeping the typed term.
    pub fn submit_search(&mut self) {
        self.search = deactivate_search(std::mem::take(&mut self.search));
        self.focus = FocusPane::Table;
    }

    /// Leave the search box and clear the term.
    pub fn cancel_search(&mut self) {
        self.search = deactivate_search(std::mem::take(&mut self.search));
        self.set_search_term("");
        self.focus = FocusPane::Table;
    }

    fn apply_typed_query(&mut self) {
        if let Some(query) = self.search.query().map(str::to_string) {
            self.set_search_term(query);
        }
    }

    // ----- Misc -----

    pub fn toggle_chart(&mut self) {
        self.chart = self.chart.toggled();
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

// ===== FocusPane =====

/// Which pane has focus. Sum type - exactly one.
///
/// - Table ⇄ Detail via Tab (Detail requires a selection)
/// - Any → Search with `/`; Enter or Esc returns to Table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    /// Command table: navigation, sorting, filtering.
    Table,
    /// Detail viewer: scrolls the selected record's output.
    Detail,
    /// Search box: keys are typed into the search term.
    Search,
}

// ===== LoadStatus =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
