//! Record sources.
//!
//! This module provides the inputs a record set can be loaded from:
//! - The built-in demo fixture
//! - A JSON array or JSONL file
//! - Piped stdin, captured once at startup
//!
//! and `RecordLoader`, which runs loads off the UI thread.

use crate::model::error::InputError;
use std::path::PathBuf;

pub mod demo;
pub mod file;
pub mod loader;
pub mod stdin;

pub use crate::parser::LoadOutcome;
pub use loader::{LoadResult, RecordLoader};

/// Where records come from.
///
/// Sum type enforces exactly one variant. `Stdin` keeps the captured text, so
/// reloading it re-parses the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Built-in demo fixture.
    Demo,
    /// A `.json` array or JSONL file, re-read on every load.
    File(PathBuf),
    /// Text read from piped stdin.
    Stdin(String),
}

impl InputSource {
    /// Load and parse the full record set.
    ///
    /// Malformed records are reported in `LoadOutcome::rejected`, not as errors.
    ///
    /// # Errors
    ///
    /// Returns `InputError` when the file cannot be read.
    pub fn load(&self) -> Result<LoadOutcome, InputError> {
        let outcome = match self {
            InputSource::Demo => demo::demo_records(),
            InputSource::File(path) => crate::parser::parse_records(&file::read_log_file(path)?),
            InputSource::Stdin(text) => crate::parser::parse_records(text),
        };

        tracing::info!(
            source = %self.label(),
            records = outcome.records.len(),
            rejected = outcome.rejected.len(),
            "Loaded command log"
        );
        Ok(outcome)
    }

    /// Short description for the header and logs.
    pub fn label(&self) -> String {
        match self {
            InputSource::Demo => "demo data".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin(_) => "stdin".to_string(),
        }
    }
}

/// Detect the input source.
///
/// # Logic:
/// 1. `--demo` always wins
/// 2. If a file path is provided: use it (must exist)
/// 3. If stdin is piped: read it to EOF
/// 4. Else: demo data
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` if piped stdin cannot be read.
pub fn detect_input_source(file: Option<PathBuf>, demo: bool) -> Result<InputSource, InputError> {
    if demo {
        return Ok(InputSource::Demo);
    }

    match file {
        Some(path) if !path.exists() => Err(InputError::FileNotFound { path }),
        Some(path) => Ok(InputSource::File(path)),
        None if stdin::stdin_is_piped() => {
            Ok(InputSource::Stdin(stdin::read_to_end(std::io::stdin().lock())?))
        }
        None => Ok(InputSource::Demo),
    }
}
