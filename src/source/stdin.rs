//! Stdin-based record source for piped input.

use crate::model::error::InputError;
use std::io::{self, IsTerminal, Read};

/// True when stdin is piped or redirected rather than an interactive terminal.
pub fn stdin_is_piped() -> bool {
    !io::stdin().is_terminal()
}

/// Read piped input to EOF.
///
/// Generic over the reader so tests can feed byte slices.
///
/// # Errors
///
/// Returns `InputError::Io` for read failures, including invalid UTF-8.
pub fn read_to_end<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
