//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod chart_kind;
pub mod error;
pub mod key_action;
pub mod log_record;
pub mod sort;

// Re-export for convenience
pub use chart_kind::{ChartKind, UnknownChartKind};
pub use error::{AppError, InputError, ParseError, RecordError};
pub use key_action::KeyAction;
pub use log_record::{FieldValue, LogRecord, RecordId, Status, Timestamp};
pub use sort::{SortDirection, SortField, SortSpec, UnknownSortField};
