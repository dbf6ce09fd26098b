//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_arbisight"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn missing_file_exits_with_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_arbisight"))
        .arg("/nonexistent/arbisight/commands.jsonl")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
}
