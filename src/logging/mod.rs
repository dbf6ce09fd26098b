//! Tracing subscriber initialization.
//!
//! The terminal belongs to the dashboard, so logs go to a file instead.
//! Follow them with `tail -f` in a separate terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log file path into its directory and file name,
/// creating the directory if needed.
fn prepare_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    // A bare file name has an empty parent: log next to the working directory
    let directory = if directory.as_os_str().is_empty() {
        Path::new(".")
    } else {
        directory
    };

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    Ok((directory, file_name))
}

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build the file-writing subscriber without installing it.
fn build_subscriber(
    log_path: &Path,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, LoggingError> {
    let (directory, file_name) = prepare_log_path(log_path)?;
    let file_appender = tracing_appender::rolling::never(directory, file_name);

    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .finish())
}

/// Initialize the global tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaulting to `info`. Creates the log directory if
/// it doesn't exist.
///
/// # Errors
///
/// Returns `LoggingError` if the path is unusable, the directory cannot be
/// created, or a subscriber was already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let subscriber = build_subscriber(log_path)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %log_path.display(),
        "Logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn prepare_log_path_creates_missing_directory() {
        let test_dir = std::env::temp_dir().join("arbisight_test_logs_create");
        let log_file = test_dir.join("test.log");
        let _ = fs::remove_dir_all(&test_dir);

        let result = prepare_log_path(&log_file)
            .map(|(dir, name)| (dir.to_path_buf(), name.to_string()));
        let created = test_dir.exists();
        let _ = fs::remove_dir_all(&test_dir);

        let (dir, name) = result.expect("path should be usable");
        assert!(created, "Log directory should be created: {:?}", test_dir);
        assert_eq!(dir, test_dir);
        assert_eq!(name, "test.log");
    }

    #[test]
    fn prepare_log_path_rejects_path_without_file_name() {
        let result = prepare_log_path(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    fn prepare_log_path_bare_file_name_uses_current_directory() {
        let (dir, name) = prepare_log_path(Path::new("arbisight.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "arbisight.log");
    }

    #[test]
    #[serial(tracing_init)]
    fn subscriber_writes_events_to_log_file() {
        let test_dir = std::env::temp_dir().join("arbisight_test_logs_write");
        let log_file = test_dir.join("app.log");
        let _ = fs::remove_dir_all(&test_dir);

        let subscriber = build_subscriber(&log_file).expect("subscriber should build");
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(entry = 3, "Rejected command log entry");
        });

        let contents = fs::read_to_string(&log_file).unwrap_or_default();
        let _ = fs::remove_dir_all(&test_dir);

        assert!(contents.contains("Rejected command log entry"), "got: {contents}");
        assert!(contents.contains("entry=3"), "got: {contents}");
        assert!(!contents.contains('\u{1b}'), "log file must not contain ANSI escapes");
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("arbisight_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        // The first call may already fail if another test installed a subscriber
        let _ = init(&log_file);
        let second = init(&log_file);
        let _ = fs::remove_dir_all(&test_dir);

        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
    }
}
