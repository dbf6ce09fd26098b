//! Log view-model: filtering, sorting and selection over a record set.
//!
//! `LogViewModel` owns the records and the view criteria. The visible rows are
//! never stored as state; they are derived by the pure functions
//! [`derive_visible_rows`] and [`derive_sorted_rows`], and `rows()` memoises
//! that derivation keyed on everything it depends on.

pub mod compare;

use crate::model::{LogRecord, RecordId, SortField, SortSpec};
use std::cell::RefCell;
use std::rc::Rc;

pub use compare::{compare_field, compare_records, compare_text};

/// Label of the sentinel filter that lets every subcommand through.
pub const ALL_SUBCOMMANDS_LABEL: &str = "All Subcommands";

// ===== Criteria =====

/// Subcommand filter: the "all" sentinel or one exact subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SubcommandFilter {
    #[default]
    All,
    /// Case-sensitive exact match.
    Only(String),
}

impl SubcommandFilter {
    pub fn matches(&self, subcommand: &str) -> bool {
        match self {
            SubcommandFilter::All => true,
            SubcommandFilter::Only(wanted) => wanted == subcommand,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SubcommandFilter::All => ALL_SUBCOMMANDS_LABEL,
            SubcommandFilter::Only(value) => value,
        }
    }

    /// `None` and the literal `"all"` both mean no filtering.
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            None | Some("all") => SubcommandFilter::All,
            Some(value) => SubcommandFilter::Only(value.to_string()),
        }
    }
}

/// What `set_records` does with a selection whose record disappeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Leave the selection untouched.
    Keep,
    /// Clear the selection when its id is absent from the new records.
    #[default]
    ClearIfMissing,
}

impl SelectionPolicy {
    pub fn from_clear_stale(clear: bool) -> Self {
        if clear {
            SelectionPolicy::ClearIfMissing
        } else {
            SelectionPolicy::Keep
        }
    }
}

// ===== Pure derivations =====

/// Case-insensitive substring match over command, output and args.
///
/// `needle` must already be lowercase.
fn matches_search(record: &LogRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.command().to_lowercase().contains(needle)
        || record.output().to_lowercase().contains(needle)
        || record.args().to_lowercase().contains(needle)
}

/// Records passing both the search term and the subcommand filter, in input order.
pub fn derive_visible_rows<'a, I>(
    records: I,
    search_term: &str,
    filter: &SubcommandFilter,
) -> Vec<&'a LogRecord>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let needle = search_term.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_search(record, &needle) && filter.matches(record.subcommand()))
        .collect()
}

/// `rows` sorted by `sort`, as a new sequence.
///
/// `sort_by` is stable, so rows with equal keys keep their input order in
/// both directions.
pub fn derive_sorted_rows<'a>(rows: &[&'a LogRecord], sort: SortSpec) -> Vec<&'a LogRecord> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare_records(a, b, sort));
    sorted
}

/// Distinct subcommands in order of first appearance.
pub fn distinct_subcommands(records: &[LogRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.subcommand()))
        .map(|record| record.subcommand().to_string())
        .collect()
}

// ===== LogViewModel =====

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    generation: u64,
    search_term: String,
    filter: SubcommandFilter,
    sort: SortSpec,
}

#[derive(Debug)]
struct RowCache {
    key: CacheKey,
    indices: Rc<[usize]>,
}

/// Owned view state: records plus filter, sort and selection criteria.
#[derive(Debug, Default)]
pub struct LogViewModel {
    records: Vec<LogRecord>,
    /// Bumped on every `set_records`; part of the row cache key.
    generation: u64,
    subcommands: Vec<String>,
    search_term: String,
    subcommand_filter: SubcommandFilter,
    sort: SortSpec,
    selected: Option<RecordId>,
    selection_policy: SelectionPolicy,
    row_cache: RefCell<Option<RowCache>>,
}

impl LogViewModel {
    pub fn new(selection_policy: SelectionPolicy) -> Self {
        Self {
            selection_policy,
            ..Self::default()
        }
    }

    // ----- Records -----

    /// Replace the record set wholesale.
    ///
    /// Search, filter and sort are kept. The selection is kept unless the
    /// policy is `ClearIfMissing` and its id is gone.
    pub fn set_records(&mut self, records: Vec<LogRecord>) {
        self.records = records;
        self.generation += 1;
        self.subcommands = distinct_subcommands(&self.records);

        if self.selection_policy == SelectionPolicy::ClearIfMissing {
            if let Some(id) = &self.selected {
                if !self.records.iter().any(|r| r.id() == id) {
                    tracing::debug!(id = %id, "Clearing stale selection");
                    self.selected = None;
                }
            }
        }

        tracing::debug!(
            records = self.records.len(),
            subcommands = self.subcommands.len(),
            generation = self.generation,
            "Record set replaced"
        );
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Distinct subcommands in order of first appearance.
    pub fn subcommands(&self) -> &[String] {
        &self.subcommands
    }

    // ----- Criteria -----

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_subcommand_filter(&mut self, filter: SubcommandFilter) {
        self.subcommand_filter = filter;
    }

    pub fn subcommand_filter(&self) -> &SubcommandFilter {
        &self.subcommand_filter
    }

    /// Same field toggles the direction; a different field starts descending.
    pub fn set_sort(&mut self, field: SortField) {
        self.sort = self.sort.clicked(field);
    }

    /// Replace the sort spec outright (configured defaults).
    pub fn set_sort_spec(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn selection_policy(&self) -> SelectionPolicy {
        self.selection_policy
    }

    // ----- Selection -----

    /// Select a record by id. The id is not checked against `records`.
    pub fn select(&mut self, id: RecordId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&RecordId> {
        self.selected.as_ref()
    }

    /// The selected record, if it is present in `records`.
    pub fn selected_record(&self) -> Option<&LogRecord> {
        let id = self.selected.as_ref()?;
        self.records.iter().find(|record| record.id() == id)
    }

    // ----- Derived rows -----

    /// Filtered rows in record order, before sorting. The charts use this so
    /// that table sorting never reorders them.
    pub fn visible_rows(&self) -> Vec<&LogRecord> {
        derive_visible_rows(&self.records, &self.search_term, &self.subcommand_filter)
    }

    /// Filtered and sorted rows for the current criteria.
    pub fn rows(&self) -> Vec<&LogRecord> {
        self.row_indices()
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.row_indices().len()
    }

    /// Row at `position` in the current derived order.
    pub fn row(&self, position: usize) -> Option<&LogRecord> {
        self.row_indices()
            .get(position)
            .map(|&index| &self.records[index])
    }

    /// Position of the record with `id` in the current rows.
    pub fn position_of(&self, id: &RecordId) -> Option<usize> {
        self.row_indices()
            .iter()
            .position(|&index| self.records[index].id() == id)
    }

    fn row_indices(&self) -> Rc<[usize]> {
        let key = CacheKey {
            generation: self.generation,
            search_term: self.search_term.clone(),
            filter: self.subcommand_filter.clone(),
            sort: self.sort,
        };

        if let Some(cache) = self.row_cache.borrow().as_ref() {
            if cache.key == key {
                return Rc::clone(&cache.indices);
            }
        }

        let needle = key.search_term.to_lowercase();
        let mut indices: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                matches_search(record, &needle) && key.filter.matches(record.subcommand())
            })
            .map(|(index, _)| index)
            .collect();
        indices.sort_by(|&a, &b| compare_records(&self.records[a], &self.records[b], key.sort));

        let indices: Rc<[usize]> = indices.into();
        *self.row_cache.borrow_mut() = Some(RowCache {
            key,
            indices: Rc::clone(&indices),
        });
        indices
    }
}

#[cfg(test)]
#[path = "view_model_tests.rs"]
mod tests;
