// crates/smoke-gate-core/src/runtime/report.rs
// ============================================================================
// Module: Smoke Gate Report Formatter
// Description: Pure text rendering over a finalized run summary.
// Purpose: Produce operator-facing success/failure reports with a troubleshooting checklist.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The report formatter is a pure rendering step over an already-finalized
//! [`RunSummary`]. It emits environment/target identification, counters, the
//! success rate (one decimal place, zero checks defined as `0.0`), and then
//! either a success banner with templated service URLs or a failure banner
//! with an ordered troubleshooting checklist referencing the target host.
//! The only branch is the single failed-count check.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::outcome::Verdict;
use crate::core::summary::RunSummary;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Horizontal rule used for report banners.
const BANNER: &str = "============================================================";
/// Horizontal rule used to separate the verdict section.
const RULE: &str = "------------------------------------------------------------";

// ============================================================================
// SECTION: Service Endpoints
// ============================================================================

/// Base URLs of the deployed tiers, derived from configuration.
///
/// # Invariants
/// - Values are templates derived from the target host, never re-probed.
/// - Base URLs carry scheme, host, and port without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    /// Base URL of the web tier (e.g. `http://host`).
    pub web_base: String,
    /// Base URL of the API tier (e.g. `http://host:55000`).
    pub api_base: String,
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders a finalized run summary into report lines.
#[must_use]
pub fn format_summary(summary: &RunSummary, endpoints: &ServiceEndpoints) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(BANNER.to_string());
    lines.push("Smoke test report".to_string());
    lines.push(BANNER.to_string());
    lines.push(format!("Environment: {}", summary.environment));
    lines.push(format!("Target:      {}", summary.target));
    lines.push(format!("Total:  {}", summary.total));
    lines.push(format!("Passed: {}", summary.passed));
    lines.push(format!("Failed: {}", summary.failed));
    lines.push(format!("Success rate: {:.1}%", summary.success_rate()));
    lines.push(RULE.to_string());
    if summary.is_success() {
        push_success_section(&mut lines, endpoints);
    } else {
        push_failure_section(&mut lines, summary, endpoints);
    }
    lines.push(BANNER.to_string());
    lines
}

/// Appends the success banner and templated service URLs.
fn push_success_section(lines: &mut Vec<String>, endpoints: &ServiceEndpoints) {
    lines.push("All checks passed. Deployment verified.".to_string());
    lines.push("Service URLs:".to_string());
    lines.push(format!("  Web:     {}/", endpoints.web_base));
    lines.push(format!("  API:     {}/", endpoints.api_base));
    lines.push(format!("  Docs:    {}/docs", endpoints.api_base));
    lines.push(format!("  OpenAPI: {}/openapi.json", endpoints.api_base));
    lines.push(format!("  Health:  {}/health", endpoints.api_base));
}

/// Appends the failure banner, failing checks, and the troubleshooting checklist.
fn push_failure_section(
    lines: &mut Vec<String>,
    summary: &RunSummary,
    endpoints: &ServiceEndpoints,
) {
    lines.push(format!("{} check(s) failed. Deployment NOT verified.", summary.failed));
    lines.push("Failing checks:".to_string());
    for outcome in &summary.outcomes {
        if outcome.verdict == Verdict::Fail {
            let detail = outcome.detail.as_deref().unwrap_or("no detail captured");
            lines.push(format!("  FAIL {}: {detail}", outcome.check.name));
        }
    }
    let target = summary.target.as_str();
    lines.push("Troubleshooting:".to_string());
    lines.push(format!("  1. Check container status on {target}: docker ps"));
    lines.push(format!("  2. Inspect service logs on {target}: docker logs <container>"));
    lines.push(format!("  3. Probe the API manually: curl -v {}/health", endpoints.api_base));
    lines.push(format!("  4. Probe the web tier manually: curl -v {}/health", endpoints.web_base));
    lines.push(format!(
        "  5. Confirm firewall/security-group rules expose the web and api ports on {target}"
    ));
    lines.push("  6. Re-run the deployment and retry once services settle".to_string());
}
