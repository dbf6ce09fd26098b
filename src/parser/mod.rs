//! Parser for command log documents.
//!
//! Pure functions converting a JSON array or JSONL document into validated
//! `LogRecord`s. Records that fail validation are rejected here, so filtering
//! and sorting only ever see well-formed input.

use crate::model::{LogRecord, ParseError, RecordError, RecordId, Status, Timestamp};
use serde::Deserialize;
use std::collections::HashSet;

/// Raw JSON structure for deserializing a record.
#[derive(Debug, Deserialize)]
struct RawLogRecord {
    id: RawId,
    timestamp: String,
    command: String,
    subcommand: String,
    #[serde(default)]
    args: String,
    #[serde(default)]
    output: String,
    duration: f64,
    status: String,
}

/// Ids are opaque; numeric ids are accepted and kept as their text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Result of parsing a whole document.
///
/// Never fails as a whole: every entry either becomes a record or a
/// rejection carrying its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    /// Accepted records, in document order.
    pub records: Vec<LogRecord>,
    /// Entries that could not be turned into records.
    pub rejected: Vec<ParseError>,
}

impl LoadOutcome {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Parse a command log document.
///
/// A document whose first non-whitespace character is `[` is read as a JSON
/// array of records; anything else is read as JSONL (one record per line,
/// blank lines ignored).
pub fn parse_records(text: &str) -> LoadOutcome {
    let mut builder = OutcomeBuilder::default();

    if text.trim_start().starts_with('[') {
        match serde_json::from_str::<Vec<serde_json::Value>>(text) {
            Ok(values) => {
                for (index, value) in values.into_iter().enumerate() {
                    let entry = index + 1;
                    builder.push(
                        entry,
                        serde_json::from_value::<RawLogRecord>(value).map_err(|e| {
                            ParseError::InvalidJson {
                                entry,
                                message: e.to_string(),
                            }
                        }),
                    );
                }
            }
            Err(e) => builder.reject(ParseError::InvalidJson {
                entry: 1,
                message: e.to_string(),
            }),
        }
    } else {
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry = index + 1;
            builder.push(
                entry,
                serde_json::from_str::<RawLogRecord>(line).map_err(|e| ParseError::InvalidJson {
                    entry,
                    message: e.to_string(),
                }),
            );
        }
    }

    let outcome = builder.finish();
    tracing::debug!(
        accepted = outcome.records.len(),
        rejected = outcome.rejected.len(),
        "Parsed command log"
    );
    outcome
}

#[derive(Default)]
struct OutcomeBuilder {
    outcome: LoadOutcome,
    seen_ids: HashSet<String>,
}

impl OutcomeBuilder {
    fn push(&mut self, entry: usize, raw: Result<RawLogRecord, ParseError>) {
        let result = raw.and_then(|raw| {
            self.validate(raw)
                .map_err(|source| ParseError::InvalidRecord { entry, source })
        });

        match result {
            Ok(record) => self.outcome.records.push(record),
            Err(e) => self.reject(e),
        }
    }

    fn reject(&mut self, error: ParseError) {
        tracing::warn!(entry = error.entry(), error = %error, "Rejected command log entry");
        self.outcome.rejected.push(error);
    }

    fn validate(&mut self, raw: RawLogRecord) -> Result<LogRecord, RecordError> {
        let id = RecordId::new(raw.id.into_string())?;
        let status: Status = raw.status.parse()?;
        let record = LogRecord::new(
            id,
            Timestamp::new(raw.timestamp),
            raw.command,
            raw.subcommand,
            raw.args,
            raw.output,
            raw.duration,
            status,
        )?;

        if !self.seen_ids.insert(record.id().as_str().to_string()) {
            return Err(RecordError::DuplicateId(record.id().as_str().to_string()));
        }
        Ok(record)
    }

    fn finish(self) -> LoadOutcome {
        self.outcome
    }
}
