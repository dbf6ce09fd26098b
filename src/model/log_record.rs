//! Command log records.
//!
//! A `LogRecord` is an immutable fact describing one completed CLI invocation.
//! Invariants are enforced by smart constructors; raw constructors are never exported.

use super::error::RecordError;
use super::sort::SortField;
use chrono::{DateTime, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

// ===== RecordId =====

/// Opaque unique identifier of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, RecordError> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(RecordError::EmptyId)
        } else {
            Ok(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Timestamp =====

/// Point in time the command ran, kept as its sortable source text.
///
/// Sorting compares the text. Parsing only happens for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as a local date-time.
    ///
    /// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and RFC 3339.
    pub fn parsed(&self) -> Option<NaiveDateTime> {
        let raw = self.0.trim();
        TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.naive_local())
            })
    }

    /// Full date and time, or the raw text when it does not parse.
    pub fn display(&self) -> String {
        self.parsed()
            .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| self.0.clone())
    }

    /// Time of day only (chart labels), or the raw text when it does not parse.
    pub fn time_of_day(&self) -> String {
        self.parsed()
            .map(|dt| dt.format(TIME_OF_DAY_FORMAT).to_string())
            .unwrap_or_else(|| self.0.clone())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Status =====

/// Outcome of a command. Closed set; no other value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Error,
    Warning,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Success, Status::Error, Status::Warning];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
            Status::Warning => "warning",
        }
    }
}

impl FromStr for Status {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Status::Success),
            "error" => Ok(Status::Error),
            "warning" => Ok(Status::Warning),
            other => Err(RecordError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== FieldValue =====

/// Value of a single record field, typed for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

// ===== LogRecord =====

/// One completed CLI invocation.
///
/// `command` is expected to contain `subcommand` and `args`, but the fields are
/// supplied independently and never derived from each other.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    id: RecordId,
    timestamp: Timestamp,
    command: String,
    subcommand: String,
    args: String,
    output: String,
    duration: f64,
    status: Status,
}

impl LogRecord {
    /// Smart constructor: validates the duration.
    ///
    /// # Errors
    ///
    /// `RecordError::InvalidDuration` if `duration` is negative, NaN or infinite.
    /// A negative zero is stored as `0.0`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        timestamp: Timestamp,
        command: impl Into<String>,
        subcommand: impl Into<String>,
        args: impl Into<String>,
        output: impl Into<String>,
        duration: f64,
        status: Status,
    ) -> Result<Self, RecordError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(RecordError::InvalidDuration(duration));
        }

        Ok(Self {
            id,
            timestamp,
            command: command.into(),
            subcommand: subcommand.into(),
            args: args.into(),
            output: output.into(),
            duration: duration + 0.0,
            status,
        })
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn subcommand(&self) -> &str {
        &self.subcommand
    }

    pub fn args(&self) -> &str {
        &self.args
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Elapsed wall-clock time in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Value of `field`; `duration` is the only numeric field.
    pub fn field_value(&self, field: SortField) -> FieldValue<'_> {
        match field {
            SortField::Id => FieldValue::Text(self.id.as_str()),
            SortField::Timestamp => FieldValue::Text(self.timestamp.as_str()),
            SortField::Command => FieldValue::Text(&self.command),
            SortField::Subcommand => FieldValue::Text(&self.subcommand),
            SortField::Args => FieldValue::Text(&self.args),
            SortField::Output => FieldValue::Text(&self.output),
            SortField::Duration => FieldValue::Number(self.duration),
            SortField::Status => FieldValue::Text(self.status.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_duration(duration: f64) -> Result<LogRecord, RecordError> {
        LogRecord::new(
            RecordId::new("1").expect("valid id"),
            Timestamp::new("2025-06-13 10:45:03"),
            "cargo stylus build --release",
            "build",
            "--release",
            "Finished release",
            duration,
            Status::Success,
        )
    }

    // ===== RecordId Tests =====

    #[test]
    fn record_id_rejects_empty_string() {
        assert!(matches!(RecordId::new(""), Err(RecordError::EmptyId)));
    }

    #[test]
    fn record_id_as_str_returns_original() {
        let id = RecordId::new("abc-42").expect("valid id");
        assert_eq!(id.as_str(), "abc-42");
        assert_eq!(id.to_string(), "abc-42");
    }

    // ===== Status Tests =====

    #[test]
    fn status_parses_closed_set() {
        assert_eq!("success".parse::<Status>(), Ok(Status::Success));
        assert_eq!("error".parse::<Status>(), Ok(Status::Error));
        assert_eq!("warning".parse::<Status>(), Ok(Status::Warning));
    }

    #[test]
    fn status_rejects_unknown_value() {
        assert_eq!(
            "pending".parse::<Status>(),
            Err(RecordError::UnknownStatus("pending".to_string()))
        );
    }

    #[test]
    fn status_parsing_is_case_sensitive() {
        assert!("Success".parse::<Status>().is_err());
    }

    // ===== LogRecord Tests =====

    #[test]
    fn new_accepts_zero_duration() {
        assert!(record_with_duration(0.0).is_ok());
    }

    #[test]
    fn new_normalises_negative_zero_duration() {
        let record = record_with_duration(-0.0).expect("negative zero is not negative");
        assert!(record.duration().is_sign_positive());
    }

    #[test]
    fn new_rejects_negative_duration() {
        assert_eq!(
            record_with_duration(-0.5),
            Err(RecordError::InvalidDuration(-0.5))
        );
    }

    #[test]
    fn new_rejects_non_finite_duration() {
        assert!(record_with_duration(f64::NAN).is_err());
        assert!(record_with_duration(f64::INFINITY).is_err());
    }

    #[test]
    fn field_value_duration_is_numeric() {
        let record = record_with_duration(13.54).expect("valid record");
        assert_eq!(
            record.field_value(SortField::Duration),
            FieldValue::Number(13.54)
        );
    }

    #[test]
    fn field_value_status_is_lowercase_text() {
        let record = record_with_duration(1.0).expect("valid record");
        assert_eq!(
            record.field_value(SortField::Status),
            FieldValue::Text("success")
        );
    }

    // ===== Timestamp Tests =====

    #[test]
    fn timestamp_parses_space_separated_format() {
        let ts = Timestamp::new("2025-06-13 10:45:03");
        assert!(ts.parsed().is_some());
        assert_eq!(ts.display(), "2025-06-13 10:45:03");
        assert_eq!(ts.time_of_day(), "10:45:03");
    }

    #[test]
    fn timestamp_parses_rfc3339() {
        let ts = Timestamp::new("2025-06-13T10:45:03Z");
        assert_eq!(ts.display(), "2025-06-13 10:45:03");
    }

    #[test]
    fn timestamp_falls_back_to_raw_text() {
        let ts = Timestamp::new("yesterday");
        assert!(ts.parsed().is_none());
        assert_eq!(ts.display(), "yesterday");
        assert_eq!(ts.time_of_day(), "yesterday");
    }
}
