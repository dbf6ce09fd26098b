//! Configuration file loading with precedence handling.

use crate::model::{ChartKind, SortDirection, SortField, SortSpec};
use crate::stats::DEFAULT_DURATION_POINTS;
use crate::view_model::SelectionPolicy;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ARBISIGHT_CONFIG";
/// Environment variable overriding the subcommand chart kind.
pub const CHART_ENV_VAR: &str = "ARBISIGHT_CHART";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but its value is out of range.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Setting name as written in the config file or env var.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/arbisight/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Subcommand chart on startup: "bar" or "breakdown".
    #[serde(default)]
    pub chart: Option<String>,

    /// Number of most recent rows plotted in the duration chart.
    #[serde(default)]
    pub duration_points: Option<usize>,

    /// Clear the selection when a reload removes the selected record.
    #[serde(default)]
    pub clear_stale_selection: Option<bool>,

    /// Field the table is sorted by on startup (descending).
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Subcommand chart kind.
    pub chart: ChartKind,
    /// Duration chart point limit (at least 1).
    pub duration_points: usize,
    /// What reloads do with a stale selection.
    pub selection_policy: SelectionPolicy,
    /// Initial sort.
    pub default_sort: SortSpec,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            chart: ChartKind::default(),
            duration_points: DEFAULT_DURATION_POINTS,
            selection_policy: SelectionPolicy::ClearIfMissing,
            default_sort: SortSpec::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/arbisight/arbisight.log` on Linux,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("arbisight").join("arbisight.log")
    } else {
        PathBuf::from("arbisight.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/arbisight/config.toml` on Linux, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("arbisight").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ARBISIGHT_CONFIG` environment variable
/// 3. Default path `~/.config/arbisight/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn parse_chart(key: &str, value: &str) -> Result<ChartKind, ConfigError> {
    value.parse().map_err(|e: crate::model::UnknownChartKind| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unknown chart kind or sort
/// field, or a zero `duration_points`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let chart = match config.chart {
        Some(value) => parse_chart("chart", &value)?,
        None => defaults.chart,
    };

    let duration_points = match config.duration_points {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                key: "duration_points".to_string(),
                reason: "must be at least 1".to_string(),
            })
        }
        Some(points) => points,
        None => defaults.duration_points,
    };

    let default_sort = match config.default_sort {
        Some(value) => {
            let field: SortField = value.parse().map_err(|e: crate::model::UnknownSortField| {
                ConfigError::InvalidValue {
                    key: "default_sort".to_string(),
                    reason: e.to_string(),
                }
            })?;
            SortSpec::new(field, SortDirection::Descending)
        }
        None => defaults.default_sort,
    };

    Ok(ResolvedConfig {
        chart,
        duration_points,
        selection_policy: config
            .clear_stale_selection
            .map(SelectionPolicy::from_clear_stale)
            .unwrap_or(defaults.selection_policy),
        default_sort,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ARBISIGHT_CHART`: Override chart kind
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable holds an unknown chart kind.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(chart) = std::env::var(CHART_ENV_VAR) {
        config.chart = parse_chart(CHART_ENV_VAR, &chart)?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    chart_override: Option<ChartKind>,
) -> ResolvedConfig {
    if let Some(chart) = chart_override {
        config.chart = chart;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
