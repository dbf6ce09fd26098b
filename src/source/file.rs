//! File-based record source.

use crate::model::error::InputError;
use std::fs;
use std::io;
use std::path::Path;

/// Read a whole command log file into memory.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if `path` does not exist.
/// Returns `InputError::Io` for other read failures.
pub fn read_log_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn read_log_file_returns_contents() {
        let path = std::env::temp_dir().join("arbisight_read_log_file_contents.jsonl");
        fs::write(&path, "line one\nline two\n").unwrap();

        let text = read_log_file(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(text.unwrap(), "line one\nline two\n");
    }

    #[test]
    fn read_log_file_missing_path_is_file_not_found() {
        let path = PathBuf::from("/nonexistent/arbisight/commands.json");
        match read_log_file(&path) {
            Err(InputError::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn read_log_file_directory_is_io_error() {
        let dir = std::env::temp_dir();
        assert!(matches!(read_log_file(&dir), Err(InputError::Io(_))));
    }
}
