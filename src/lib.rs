//! ArbiSight command log dashboard.
//!
//! Terminal dashboard for CLI command execution logs: a sortable command
//! table, duration and subcommand charts, and a detail viewer.
//!
//! Pure Core / Impure Shell: `model`, `parser`, `view_model`, `stats` and
//! `state` are pure; `source`, `logging` and `view` do I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod stats;
pub mod view;
pub mod view_model;
