//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_arbisight_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("arbisight") && path_str.ends_with("config.toml"),
        "Path should contain 'arbisight' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("arbisight_test_config.toml");

    let toml_content = r#"
chart = "breakdown"
duration_points = 10
clear_stale_selection = false
default_sort = "duration"
log_file_path = "/tmp/arbisight-test.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    let config = result
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");
    assert_eq!(config.chart, Some("breakdown".to_string()));
    assert_eq!(config.duration_points, Some(10));
    assert_eq!(config.clear_stale_selection, Some(false));
    assert_eq!(config.default_sort, Some("duration".to_string()));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/arbisight-test.log"))
    );
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("arbisight_test_invalid.toml");
    fs::write(&config_path, "chart = [unclosed").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a ParseError, got {result:?}"
    );
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn load_config_file_handles_partial_config() {
    let config: ConfigFile = toml::from_str("duration_points = 5").expect("valid TOML");
    assert_eq!(config.duration_points, Some(5));
    assert_eq!(config.chart, None);
    assert_eq!(config.log_file_path, None);
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None).unwrap();
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.chart, ChartKind::Bar);
    assert_eq!(config.duration_points, 20);
    assert_eq!(config.selection_policy, SelectionPolicy::ClearIfMissing);
    assert_eq!(config.default_sort, SortSpec::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        chart: Some("breakdown".to_string()),
        duration_points: Some(8),
        clear_stale_selection: Some(false),
        default_sort: Some("command".to_string()),
        log_file_path: None,
    };

    let resolved = merge_config(Some(config_file)).unwrap();

    assert_eq!(resolved.chart, ChartKind::Breakdown);
    assert_eq!(resolved.duration_points, 8);
    assert_eq!(resolved.selection_policy, SelectionPolicy::Keep);
    assert_eq!(
        resolved.default_sort,
        SortSpec::new(SortField::Command, SortDirection::Descending)
    );
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn merge_config_rejects_unknown_chart() {
    let config_file = ConfigFile {
        chart: Some("donut".to_string()),
        ..ConfigFile::default()
    };

    match merge_config(Some(config_file)) {
        Err(ConfigError::InvalidValue { key, reason }) => {
            assert_eq!(key, "chart");
            assert!(reason.contains("donut"));
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn merge_config_rejects_unknown_sort_field() {
    let config_file = ConfigFile {
        default_sort: Some("size".to_string()),
        ..ConfigFile::default()
    };

    assert!(matches!(
        merge_config(Some(config_file)),
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "default_sort"
    ));
}

#[test]
fn merge_config_rejects_zero_duration_points() {
    let config_file = ConfigFile {
        duration_points: Some(0),
        ..ConfigFile::default()
    };

    assert!(matches!(
        merge_config(Some(config_file)),
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "duration_points"
    ));
}

// ===== Environment overrides =====

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(arbisight_chart)]
fn apply_env_overrides_respects_arbisight_chart() {
    let _guard = EnvGuard::new(CHART_ENV_VAR);
    env::set_var(CHART_ENV_VAR, "breakdown");

    let result = apply_env_overrides(ResolvedConfig::default()).unwrap();

    assert_eq!(result.chart, ChartKind::Breakdown);
}

#[test]
#[serial(arbisight_chart)]
fn apply_env_overrides_rejects_invalid_chart() {
    let _guard = EnvGuard::new(CHART_ENV_VAR);
    env::set_var(CHART_ENV_VAR, "sparkline");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref key, .. }) if key == CHART_ENV_VAR
    ));
}

#[test]
#[serial(arbisight_chart)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(CHART_ENV_VAR);

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone()).unwrap();

    assert_eq!(result, base, "Config should be unchanged when ARBISIGHT_CHART not set");
}

#[test]
#[serial(arbisight_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("arbisight_explicit.toml");
    fs::write(&explicit_path, "chart = \"bar\"\n").expect("Failed to write explicit config");

    let env_path = temp_dir.join("arbisight_env.toml");
    fs::write(&env_path, "chart = \"breakdown\"\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let result = load_config_with_precedence(Some(explicit_path.clone()));

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();

    let config = result.unwrap().unwrap();
    assert_eq!(
        config.chart,
        Some("bar".to_string()),
        "Should use explicit path, not ARBISIGHT_CONFIG env var"
    );
}

#[test]
#[serial(arbisight_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = env::temp_dir().join("arbisight_env_only.toml");
    fs::write(&env_path, "duration_points = 12\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let result = load_config_with_precedence(None);
    fs::remove_file(env_path).ok();

    let config = result.unwrap().unwrap();
    assert_eq!(config.duration_points, Some(12));
}

// ===== CLI overrides and full chain =====

#[test]
fn apply_cli_overrides_chart_override() {
    let result = apply_cli_overrides(ResolvedConfig::default(), Some(ChartKind::Breakdown));
    assert_eq!(result.chart, ChartKind::Breakdown);
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None), base);
}

#[test]
#[serial(arbisight_chart)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(CHART_ENV_VAR);

    let config_file = ConfigFile {
        chart: Some("breakdown".to_string()),
        duration_points: Some(15),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(config_file)).unwrap();
    assert_eq!(merged.chart, ChartKind::Breakdown);

    env::set_var(CHART_ENV_VAR, "bar");
    let with_env = apply_env_overrides(merged).unwrap();
    assert_eq!(with_env.chart, ChartKind::Bar);

    let final_config = apply_cli_overrides(with_env, Some(ChartKind::Breakdown));
    assert_eq!(final_config.chart, ChartKind::Breakdown);
    assert_eq!(
        final_config.duration_points, 15,
        "Config file values survive env and CLI layers"
    );
}
