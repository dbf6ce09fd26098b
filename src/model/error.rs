//! Error types for the arbisight application.
//!
//! This module defines a hierarchical error taxonomy using `thiserror`. Errors compose
//! via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Record source failures (file not found, I/O)
//!   - [`ParseError`] - Record document failures (malformed JSON, invalid records)
//!     - [`RecordError`] - A single record violates the `LogRecord` invariants
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Parse errors are **non-fatal**: a malformed record is rejected at load time, logged,
//! and counted in the status bar. The remaining records load normally, so filtering and
//! sorting only ever see well-formed records. Input and terminal errors are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Recovery Behavior
///
/// - **InputRead/Terminal errors**: Fatal - propagate to `main` for graceful shutdown
/// - **Parse errors**: Non-fatal - reported per record, loading continues
///
/// # Examples
///
/// ```no_run
/// use arbisight::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_log_file()?;
///     Ok(())
/// }
/// # fn read_log_file() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read records from a file or stdin.
    ///
    /// The application cannot proceed without its initial record set.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// A record document could not be parsed.
    #[error("Failed to parse command log: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error.
    ///
    /// Raised by the crossterm/ratatui layer. Without a working terminal the dashboard
    /// cannot function, so the terminal is restored and the error printed to stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading records from a file or stdin.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Display error and exit (user provided invalid path)
/// - **Io**: Generic I/O failures (permissions, disk errors) - display and exit
///
/// On a reload (`r`) both variants are shown in the status bar instead, and the
/// previously loaded records stay on screen.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified log file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use arbisight::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// Generic I/O error reading from the record source.
    ///
    /// The `#[from]` attribute enables `?` on any `std::io::Error`:
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use arbisight::model::error::InputError;
    ///
    /// fn open_log(path: &str) -> Result<File, InputError> {
    ///     Ok(File::open(path)?)
    /// }
    /// ```
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing a command log document.
///
/// `entry` is the 1-based position of the offending record: the line number for JSONL
/// input, or the element number for a JSON array.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The entry is not valid JSON or does not have the record shape
    /// (missing field, wrong field type).
    ///
    /// # Examples
    ///
    /// ```
    /// use arbisight::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     entry: 4,
    ///     message: "missing field `status`".to_string()
    /// };
    /// assert!(err.to_string().contains("entry 4"));
    /// ```
    #[error("Invalid JSON at entry {entry}: {message}")]
    InvalidJson {
        /// 1-based entry position.
        entry: usize,
        /// The `serde_json` error message.
        message: String,
    },

    /// The entry is well-formed JSON but violates a record invariant.
    #[error("Invalid record at entry {entry}: {source}")]
    InvalidRecord {
        /// 1-based entry position.
        entry: usize,
        /// The violated invariant.
        #[source]
        source: RecordError,
    },
}

impl ParseError {
    /// Entry position the error refers to.
    pub fn entry(&self) -> usize {
        match self {
            ParseError::InvalidJson { entry, .. } | ParseError::InvalidRecord { entry, .. } => {
                *entry
            }
        }
    }
}

/// A record field violates the `LogRecord` invariants.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    /// Record ids must be non-empty.
    #[error("record id cannot be empty")]
    EmptyId,

    /// Another record with the same id was already loaded.
    #[error("duplicate record id '{0}'")]
    DuplicateId(String),

    /// Status outside the closed `success | error | warning` set.
    #[error("unknown status '{0}' (expected success, error or warning)")]
    UnknownStatus(String),

    /// Duration must be a finite, non-negative number of seconds.
    #[error("invalid duration {0} (must be a finite, non-negative number of seconds)")]
    InvalidDuration(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_file_not_found_display() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.json"));
    }

    #[test]
    fn input_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: InputError = io_err.into();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn app_error_wraps_input_error() {
        let err: AppError = InputError::FileNotFound {
            path: PathBuf::from("x.json"),
        }
        .into();
        assert!(matches!(err, AppError::InputRead(_)));
        assert!(err.to_string().starts_with("Failed to read input"));
    }

    #[test]
    fn parse_error_invalid_record_includes_source() {
        let err = ParseError::InvalidRecord {
            entry: 7,
            source: RecordError::UnknownStatus("pending".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("entry 7"));
        assert!(msg.contains("'pending'"));
        assert_eq!(err.entry(), 7);
    }

    #[test]
    fn record_error_invalid_duration_display() {
        let msg = RecordError::InvalidDuration(-1.5).to_string();
        assert!(msg.contains("-1.5"));
        assert!(msg.contains("non-negative"));
    }
}
