// crates/smoke-gate-cli/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Exercises the translation catalog and placeholder substitution.
// Purpose: Ensure CLI user-facing strings route through stable i18n helpers.
// Dependencies: smoke-gate-cli i18n module and the `t!` macro.
// ============================================================================

//! ## Overview
//! Validates the Smoke Gate CLI i18n catalog behavior:
//! - Message arguments capture key/value substitutions.
//! - Translation falls back to keys on misses.
//! - The [`t!`](smoke_gate_cli::t) macro formats placeholders correctly.

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

use smoke_gate_cli::i18n::Locale;
use smoke_gate_cli::i18n::MessageArg;
use smoke_gate_cli::i18n::translate;
use smoke_gate_cli::t;

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Confirms message arguments capture key/value pairs.
#[test]
fn message_arg_new_captures_key_and_value() {
    let arg = MessageArg::new("error", "connection refused");
    assert_eq!(arg.key, "error");
    assert_eq!(arg.value, "connection refused");
}

/// Confirms catalog entries resolve and replace placeholders.
#[test]
fn translate_substitutes_placeholders() {
    let args = vec![MessageArg::new("error", "boom")];
    let result = translate("run.config.load_failed", args);
    assert_eq!(result, "Failed to load configuration: boom");
}

/// Confirms missing keys fall back to the key string.
#[test]
fn translate_falls_back_to_key() {
    let result = translate("missing.key", Vec::new());
    assert_eq!(result, "missing.key");
}

/// Confirms the t! macro formats named arguments.
#[test]
fn t_macro_formats_message() {
    let rendered = t!("main.version", version = "0.1.0");
    assert!(rendered.contains("smoke-gate"));
    assert!(rendered.contains("0.1.0"));
}

/// Confirms progress entries format ordinal, verdict, and name.
#[test]
fn progress_entry_formats_all_fields() {
    let rendered =
        t!("run.progress.entry", ordinal = 3, total = 19, verdict = "PASS", name = "api-health");
    assert_eq!(rendered, "[3/19] PASS api-health");
}

/// Confirms locale parsing tolerates case and region tags.
#[test]
fn locale_parse_accepts_region_tags() {
    assert_eq!(Locale::parse("CA_es"), Some(Locale::Ca));
    assert_eq!(Locale::parse("en-US"), Some(Locale::En));
    assert_eq!(Locale::parse("fr"), None);
    assert_eq!(Locale::parse(""), None);
}
