//! Built-in demo record set.
//!
//! Twelve `cargo stylus` invocations covering every status, used when no
//! file is given and stdin is a terminal.

use crate::parser::{parse_records, LoadOutcome};

const DEMO_RECORDS: &str = include_str!("demo_records.json");

/// Parse the embedded demo fixture.
pub fn demo_records() -> LoadOutcome {
    parse_records(DEMO_RECORDS)
}
