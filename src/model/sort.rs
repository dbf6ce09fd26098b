//! Sort criteria for the command table.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A sortable `LogRecord` field.
///
/// `Duration` is the only numeric field. Everything else compares as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Timestamp,
    Command,
    Subcommand,
    Args,
    Output,
    Duration,
    Status,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::Id,
        SortField::Timestamp,
        SortField::Command,
        SortField::Subcommand,
        SortField::Args,
        SortField::Output,
        SortField::Duration,
        SortField::Status,
    ];

    /// Field name as it appears in the record JSON.
    pub fn name(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Timestamp => "timestamp",
            SortField::Command => "command",
            SortField::Subcommand => "subcommand",
            SortField::Args => "args",
            SortField::Output => "output",
            SortField::Duration => "duration",
            SortField::Status => "status",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, SortField::Duration)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sort field name that does not match any record field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort field '{0}' (expected one of: id, timestamp, command, subcommand, args, output, duration, status)")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SortField::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Column header marker.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort field and direction. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Timestamp,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Result of activating the sort control for `field`.
    ///
    /// The same field flips the direction. A different field always starts
    /// descending.
    pub fn clicked(self, field: SortField) -> Self {
        if field == self.field {
            Self {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Descending,
            }
        }
    }
}
