// crates/smoke-gate-core/tests/report.rs
// ============================================================================
// Module: Report Formatter Tests
// Description: Unit tests for summary rendering.
// Purpose: Verify banners, counters, success rate, and the troubleshooting checklist.
// Dependencies: smoke-gate-core
// ============================================================================

//! ## Overview
//! Exercises the pure rendering contract: zero-checks success rate is `0.0`,
//! a clean run yields the success banner with templated service URLs, and any
//! failure yields the failure banner with the ordered troubleshooting
//! checklist referencing the target host.

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

use smoke_gate_core::Check;
use smoke_gate_core::CheckError;
use smoke_gate_core::EnvironmentLabel;
use smoke_gate_core::NullProgressSink;
use smoke_gate_core::Observation;
use smoke_gate_core::RunSummary;
use smoke_gate_core::TargetHost;
use smoke_gate_core::runtime::ServiceEndpoints;
use smoke_gate_core::runtime::SuiteRunner;
use smoke_gate_core::runtime::format_summary;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Endpoints templated from the canonical test target.
fn endpoints() -> ServiceEndpoints {
    ServiceEndpoints {
        web_base: "http://deploy.example.com".to_string(),
        api_base: "http://deploy.example.com:55000".to_string(),
    }
}

/// Builds a finalized summary with the given pass/fail shape.
fn summary_with(passes: usize, failures: usize) -> RunSummary {
    let mut runner = SuiteRunner::new(
        EnvironmentLabel::new("staging"),
        TargetHost::new("deploy.example.com"),
        NullProgressSink,
    );
    let ok = || -> Result<Observation, CheckError> { Ok(Observation::success()) };
    let bad = || -> Result<Observation, CheckError> { Ok(Observation::failure("boom")) };
    for index in 0..passes {
        runner.run_check(Check::expect_success(format!("pass-{index}")), &ok);
    }
    for index in 0..failures {
        runner.run_check(Check::expect_success(format!("fail-{index}")), &bad);
    }
    runner.finalize()
}

// ============================================================================
// SECTION: Success Rate
// ============================================================================

#[test]
fn empty_summary_has_zero_rate_without_fault() {
    let summary = summary_with(0, 0);
    assert_eq!(summary.total, 0);
    let rate = summary.success_rate();
    assert!((rate - 0.0).abs() < f64::EPSILON, "expected 0.0, got {rate}");
    let lines = format_summary(&summary, &endpoints());
    assert!(lines.iter().any(|line| line == "Success rate: 0.0%"), "missing rate line: {lines:?}");
}

#[test]
fn success_rate_renders_one_decimal_place() {
    let summary = summary_with(2, 1);
    let lines = format_summary(&summary, &endpoints());
    assert!(lines.iter().any(|line| line == "Success rate: 66.7%"), "missing rate line: {lines:?}");
}

// ============================================================================
// SECTION: Success Banner
// ============================================================================

#[test]
fn clean_run_renders_success_banner_and_service_urls() {
    let summary = summary_with(3, 0);
    let lines = format_summary(&summary, &endpoints());
    assert!(lines.iter().any(|line| line == "All checks passed. Deployment verified."));
    assert!(lines.iter().any(|line| line == "Failed: 0"));
    assert!(lines.iter().any(|line| line.contains("http://deploy.example.com:55000/docs")));
    assert!(lines.iter().any(|line| line.contains("http://deploy.example.com:55000/openapi.json")));
    assert!(!lines.iter().any(|line| line.contains("Troubleshooting")));
}

// ============================================================================
// SECTION: Failure Banner
// ============================================================================

#[test]
fn failing_run_renders_checklist_in_order() {
    let summary = summary_with(1, 1);
    let lines = format_summary(&summary, &endpoints());
    assert!(lines.iter().any(|line| line == "1 check(s) failed. Deployment NOT verified."));
    assert!(lines.iter().any(|line| line.contains("FAIL fail-0: boom")));
    let is_step = |line: &&String| {
        let bytes = line.as_bytes();
        bytes.len() > 3 && bytes[0] == b' ' && bytes[1] == b' ' && bytes[2].is_ascii_digit() && bytes[3] == b'.'
    };
    let troubleshooting: Vec<&String> = lines.iter().filter(is_step).collect();
    assert_eq!(troubleshooting.len(), 6, "checklist wrong size: {lines:?}");
    assert!(troubleshooting[0].contains("deploy.example.com"));
}

// ============================================================================
// SECTION: Structured Output
// ============================================================================

#[test]
fn summary_serializes_with_stable_field_names() {
    let summary = summary_with(1, 1);
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["environment"], "staging");
    assert_eq!(value["target"], "deploy.example.com");
    assert_eq!(value["total"], 2);
    assert_eq!(value["passed"], 1);
    assert_eq!(value["failed"], 1);
    let outcomes = value["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["verdict"], "pass");
    assert_eq!(outcomes[1]["observed"], "failure");
}

#[test]
fn header_identifies_environment_and_target() {
    let summary = summary_with(1, 0);
    let lines = format_summary(&summary, &endpoints());
    assert!(lines.iter().any(|line| line == "Environment: staging"));
    assert!(lines.iter().any(|line| line == "Target:      deploy.example.com"));
}
