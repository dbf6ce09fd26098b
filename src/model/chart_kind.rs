//! Presentation of the subcommand usage chart.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How subcommand usage is drawn: bars or a percentage breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Breakdown,
}

impl ChartKind {
    pub fn toggled(self) -> Self {
        match self {
            ChartKind::Bar => ChartKind::Breakdown,
            ChartKind::Breakdown => ChartKind::Bar,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Breakdown => "breakdown",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart kind '{0}' (expected bar or breakdown)")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            // "pie" is accepted as an alias for the breakdown list
            "breakdown" | "pie" => Ok(ChartKind::Breakdown),
            _ => Err(UnknownChartKind(s.to_string())),
        }
    }
}
