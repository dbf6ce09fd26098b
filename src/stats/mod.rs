//! Chart data derived from the filtered rows.
//!
//! Both charts are fed the table's filtered rows in record order, unsorted,
//! so the duration series runs oldest to newest whatever the table sort.

use crate::model::{LogRecord, Status};
use std::collections::HashMap;

/// Number of points the duration chart keeps by default.
pub const DEFAULT_DURATION_POINTS: usize = 20;

// ===== Duration series =====

/// One point of the duration chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationPoint {
    /// 1-based position of the row in the filtered rows.
    pub index: usize,
    /// Duration in seconds.
    pub duration: f64,
    /// Time of day the command ran.
    pub label: String,
}

/// One point per row, keeping only the last `max_points`.
///
/// Indices are positions in the full row sequence, so a truncated series
/// starts above 1.
pub fn duration_series(rows: &[&LogRecord], max_points: usize) -> Vec<DurationPoint> {
    let skip = rows.len().saturating_sub(max_points);
    rows.iter()
        .enumerate()
        .skip(skip)
        .map(|(position, record)| DurationPoint {
            index: position + 1,
            duration: record.duration(),
            label: record.timestamp().time_of_day(),
        })
        .collect()
}

/// Largest duration in the series, or 0 for an empty series.
pub fn max_duration(points: &[DurationPoint]) -> f64 {
    points.iter().map(|p| p.duration).fold(0.0, f64::max)
}

// ===== Subcommand usage =====

/// Usage count of one subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcommandUsage {
    pub subcommand: String,
    pub count: usize,
    /// Share of all rows, 0 to 100.
    pub percentage: f64,
}

impl SubcommandUsage {
    /// Percentage with one decimal, e.g. `"66.7"`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }
}

/// Count per subcommand, in order of first appearance.
pub fn subcommand_usage(rows: &[&LogRecord]) -> Vec<SubcommandUsage> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut usage: Vec<SubcommandUsage> = Vec::new();

    for record in rows {
        match positions.get(record.subcommand()) {
            Some(&position) => usage[position].count += 1,
            None => {
                positions.insert(record.subcommand(), usage.len());
                usage.push(SubcommandUsage {
                    subcommand: record.subcommand().to_string(),
                    count: 1,
                    percentage: 0.0,
                });
            }
        }
    }

    let total = rows.len() as f64;
    for entry in &mut usage {
        entry.percentage = entry.count as f64 / total * 100.0;
    }
    usage
}

// ===== Status counts =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub success: usize,
    pub error: usize,
    pub warning: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.success + self.error + self.warning
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Success => self.success,
            Status::Error => self.error,
            Status::Warning => self.warning,
        }
    }
}

pub fn status_counts<'a, I>(records: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    records
        .into_iter()
        .fold(StatusCounts::default(), |mut counts, record| {
            match record.status() {
                Status::Success => counts.success += 1,
                Status::Error => counts.error += 1,
                Status::Warning => counts.warning += 1,
            }
            counts
        })
}
