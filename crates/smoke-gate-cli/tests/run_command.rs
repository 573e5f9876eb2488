// crates/smoke-gate-cli/tests/run_command.rs
// ============================================================================
// Module: CLI Run Command Tests
// Description: Integration tests for the smoke-gate binary surface.
// Purpose: Ensure version, config validation, and argument preconditions
//          behave before any check runs.
// Dependencies: smoke-gate binary
// ============================================================================
//! ## Overview
//! Validates the binary surface that must hold before a suite ever executes:
//! missing required arguments abort immediately, broken configuration aborts
//! with a localized message, and the version flag reports the crate version.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tempfile::NamedTempFile;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn smoke_gate_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_smoke-gate"))
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Verifies the version flag reports the crate version.
#[test]
fn cli_version_reports_crate_version() {
    let output = Command::new(smoke_gate_bin())
        .arg("--version")
        .output()
        .expect("run smoke-gate --version");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("smoke-gate"), "unexpected stdout: {stdout}");
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "unexpected stdout: {stdout}");
}

/// Verifies a run without the required target aborts before any check.
#[test]
fn cli_run_requires_target_argument() {
    let output = Command::new(smoke_gate_bin())
        .args(["run", "--environment", "staging"])
        .output()
        .expect("run smoke-gate run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--target"), "unexpected stderr: {stderr}");
}

/// Verifies an unloadable config aborts the run with a localized message.
#[test]
fn cli_run_rejects_broken_config() {
    let config = write_config("[web]\nport = 0\n");
    let output = Command::new(smoke_gate_bin())
        .args([
            "run",
            "--environment",
            "staging",
            "--target",
            "localhost",
            "--config",
            config.path().to_string_lossy().as_ref(),
        ])
        .output()
        .expect("run smoke-gate run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "unexpected stderr: {stderr}");
}

/// Verifies config validation accepts a stock file.
#[test]
fn cli_config_validate_accepts_stock_file() {
    let config = write_config("[api]\nport = 9100\n");
    let output = Command::new(smoke_gate_bin())
        .args(["config", "validate", "--config", config.path().to_string_lossy().as_ref()])
        .output()
        .expect("run smoke-gate config validate");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"), "unexpected stdout: {stdout}");
}

/// Verifies config validation rejects invalid values with a clear message.
#[test]
fn cli_config_validate_rejects_invalid_file() {
    let config = write_config("[readiness]\nmax_attempts = 0\n");
    let output = Command::new(smoke_gate_bin())
        .args(["config", "validate", "--config", config.path().to_string_lossy().as_ref()])
        .output()
        .expect("run smoke-gate config validate");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max_attempts"), "unexpected stderr: {stderr}");
}

/// Verifies an invalid language environment value fails closed.
#[test]
fn cli_rejects_invalid_lang_env() {
    let output = Command::new(smoke_gate_bin())
        .arg("--version")
        .env("SMOKE_GATE_LANG", "klingon")
        .output()
        .expect("run smoke-gate --version");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SMOKE_GATE_LANG"), "unexpected stderr: {stderr}");
}

/// Verifies the Catalan locale emits the machine-translation notice.
#[test]
fn cli_catalan_locale_emits_disclaimer() {
    let output = Command::new(smoke_gate_bin())
        .args(["--lang", "ca", "--version"])
        .output()
        .expect("run smoke-gate --version");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nota:"), "unexpected stderr: {stderr}");
}
