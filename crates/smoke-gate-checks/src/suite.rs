// crates/smoke-gate-checks/src/suite.rs
// ============================================================================
// Module: Suite Assembly
// Description: Assembles and drives the fixed smoke suite from configuration.
// Purpose: Turn a validated config into the ordered 19-check run.
// Dependencies: smoke-gate-core, smoke-gate-config
// ============================================================================

//! ## Overview
//! The suite is fixed: the same 19 checks run in the same order on every
//! invocation, so two runs against an unchanged deployment produce identical
//! summaries. The readiness probe runs first and is downgraded to a warning
//! on timeout; checks always run. An unconfigured process check still runs
//! and observes a failure, so a misconfigured deployment cannot silently
//! shrink the suite.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::time::Duration;

use smoke_gate_config::SmokeGateConfig;
use smoke_gate_core::Check;
use smoke_gate_core::CheckError;
use smoke_gate_core::CheckOperation;
use smoke_gate_core::EnvironmentLabel;
use smoke_gate_core::Observation;
use smoke_gate_core::ProgressSink;
use smoke_gate_core::RunSummary;
use smoke_gate_core::ServiceEndpoints;
use smoke_gate_core::Sleeper;
use smoke_gate_core::SuiteRunner;
use smoke_gate_core::TargetHost;

use crate::http::HttpCheckConfig;
use crate::http::HttpChecker;
use crate::http::UploadPayload;
use crate::probe::ReadinessProber;
use crate::process::ProcessCheck;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Built-in 1x1 transparent PNG used as the default analyze sample.
pub const SAMPLE_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Number of checks in the fixed suite.
pub const SUITE_SIZE: u64 = 19;

/// Marker expected somewhere in an HTML page body.
const HTML_MARKER: &str = "<html";

/// Detail reported when a tier has no process check configured.
const PROCESS_CHECK_UNCONFIGURED: &str = "process check not configured";

// ============================================================================
// SECTION: Suite Plan
// ============================================================================

/// A fully resolved smoke suite, ready to execute.
///
/// # Invariants
/// - The check list and order are fixed at 19 entries.
/// - All URLs are derived once from config and target, never re-derived.
pub struct SuitePlan {
    /// HTTP checker shared by all HTTP checks.
    checker: HttpChecker,
    /// HTTP settings, reused by the readiness prober.
    http_config: HttpCheckConfig,
    /// Environment label for the summary.
    environment: EnvironmentLabel,
    /// Target host for the summary.
    target: TargetHost,
    /// Web tier base URL.
    web_base: String,
    /// Api tier base URL.
    api_base: String,
    /// Readiness probe URL on the api tier.
    readiness_url: String,
    /// HTTP status treated as ready.
    readiness_status: u16,
    /// Readiness attempt budget.
    readiness_attempts: u32,
    /// Delay between readiness attempts.
    readiness_delay: Duration,
    /// Analyze endpoint URL on the api tier.
    analyze_url: String,
    /// Multipart field name carrying the image.
    analyze_field: String,
    /// Sample image payload for the happy-path analyze checks.
    sample: UploadPayload,
    /// Web tier process check, when configured.
    web_process: Option<ProcessCheck>,
    /// Api tier process check, when configured.
    api_process: Option<ProcessCheck>,
}

impl SuitePlan {
    /// Resolves a suite plan from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] when the HTTP client cannot be built or a
    /// configured sample image cannot be read.
    pub fn new(
        config: &SmokeGateConfig,
        environment: EnvironmentLabel,
        target: TargetHost,
    ) -> Result<Self, CheckError> {
        let allow_http = config.web.scheme == "http" || config.api.scheme == "http";
        let http_config = HttpCheckConfig {
            allow_http,
            timeout_ms: config.http.timeout_ms,
            user_agent: config.http.user_agent.clone(),
            ..HttpCheckConfig::default()
        };
        let checker = HttpChecker::new(http_config.clone())?;
        let web_base = config.web.base_url(&target);
        let api_base = config.api.base_url(&target);
        let sample_bytes = match &config.analyze.sample_image {
            Some(path) => fs::read(path).map_err(|err| {
                CheckError::InvalidInput(format!(
                    "cannot read sample image {}: {err}",
                    path.display()
                ))
            })?,
            None => SAMPLE_PNG.to_vec(),
        };
        let web_process = match &config.web.process_check {
            Some(command) => Some(ProcessCheck::new(command.clone())?),
            None => None,
        };
        let api_process = match &config.api.process_check {
            Some(command) => Some(ProcessCheck::new(command.clone())?),
            None => None,
        };
        Ok(Self {
            checker,
            http_config,
            environment,
            target,
            readiness_url: format!("{api_base}{}", config.readiness.path),
            readiness_status: config.readiness.expected_status,
            readiness_attempts: config.readiness.max_attempts,
            readiness_delay: Duration::from_millis(config.readiness.retry_delay_ms),
            analyze_url: format!("{api_base}{}", config.analyze.path),
            analyze_field: config.analyze.field_name.clone(),
            sample: UploadPayload::png("sample.png", sample_bytes),
            web_base,
            api_base,
            web_process,
            api_process,
        })
    }

    /// Runs the readiness probe followed by the full check suite.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] when the prober client cannot be built. Check
    /// faults never abort the run; they become observed failures.
    pub fn execute<P: ProgressSink, S: Sleeper>(
        &self,
        sink: P,
        sleeper: S,
        skip_probe: bool,
    ) -> Result<RunSummary, CheckError> {
        let mut runner =
            SuiteRunner::new(self.environment.clone(), self.target.clone(), sink);
        if !skip_probe {
            let prober = ReadinessProber::new(&self.http_config, sleeper)?;
            let ready = prober.wait_for_ready(
                &self.readiness_url,
                self.readiness_status,
                self.readiness_attempts,
                self.readiness_delay,
            );
            if !ready {
                runner.warn(&format!(
                    "{} not ready after {} attempts; running checks anyway",
                    self.readiness_url, self.readiness_attempts
                ));
            }
        }
        self.run_checks(&mut runner);
        Ok(runner.finalize())
    }

    /// Runs the 19 checks in their fixed order.
    fn run_checks<P: ProgressSink>(&self, runner: &mut SuiteRunner<P>) {
        let checker = &self.checker;
        let web_root = format!("{}/", self.web_base);
        let web_health = format!("{}/health", self.web_base);
        let api_health = format!("{}/health", self.api_base);
        let api_docs = format!("{}/docs", self.api_base);
        let api_openapi = format!("{}/openapi.json", self.api_base);

        let op = || checker.status_is(&web_health, 200);
        runner.run_check(Check::expect_success("web-health-status"), &op);
        let op = || checker.status_is(&web_root, 200);
        runner.run_check(Check::expect_success("web-root-status"), &op);
        let op = || checker.body_contains(&web_root, HTML_MARKER);
        runner.run_check(Check::expect_success("web-root-html"), &op);

        let op = || checker.status_is(&api_health, 200);
        runner.run_check(Check::expect_success("api-health-status"), &op);
        let op = || checker.json_field_present(&api_health, "status");
        runner.run_check(Check::expect_success("api-health-json"), &op);
        let op = || checker.json_field_equals(&api_health, "status", "ok");
        runner.run_check(Check::expect_success("api-health-value"), &op);

        let op = || checker.status_is(&api_docs, 200);
        runner.run_check(Check::expect_success("api-docs-status"), &op);
        let op = || checker.body_contains(&api_docs, HTML_MARKER);
        runner.run_check(Check::expect_success("api-docs-html"), &op);

        let op = || checker.status_is(&api_openapi, 200);
        runner.run_check(Check::expect_success("api-openapi-status"), &op);
        let op = || checker.json_object_parses(&api_openapi);
        runner.run_check(Check::expect_success("api-openapi-json"), &op);
        let op = || checker.json_field_present(&api_openapi, "openapi");
        runner.run_check(Check::expect_success("api-openapi-marker"), &op);

        let op = || checker.upload_accepted(&self.analyze_url, &self.analyze_field, &self.sample);
        runner.run_check(Check::expect_success("analyze-image-status"), &op);
        let op = || {
            checker.upload_json_field(
                &self.analyze_url,
                &self.analyze_field,
                &self.sample,
                "face_count",
            )
        };
        runner.run_check(Check::expect_success("analyze-face-count"), &op);
        let op = || {
            checker.upload_json_field(&self.analyze_url, &self.analyze_field, &self.sample, "faces")
        };
        runner.run_check(Check::expect_success("analyze-face-list"), &op);

        let empty = UploadPayload::png("empty.png", Vec::new());
        let op = || checker.upload_accepted(&self.analyze_url, &self.analyze_field, &empty);
        runner.run_check(Check::expect_failure("analyze-empty-file"), &op);
        let missing = UploadPayload::MissingField;
        let op = || checker.upload_accepted(&self.analyze_url, &self.analyze_field, &missing);
        runner.run_check(Check::expect_failure("analyze-missing-file"), &op);
        let malformed = UploadPayload::png("garbage.png", b"not a png at all".to_vec());
        let op = || checker.upload_accepted(&self.analyze_url, &self.analyze_field, &malformed);
        runner.run_check(Check::expect_failure("analyze-malformed-image"), &op);

        runner.run_check(
            Check::expect_success("web-process-running"),
            process_operation(self.web_process.as_ref()),
        );
        runner.run_check(
            Check::expect_success("api-process-running"),
            process_operation(self.api_process.as_ref()),
        );
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Operation observing that no process check is configured for a tier.
fn unconfigured_process() -> Result<Observation, CheckError> {
    Ok(Observation::failure(PROCESS_CHECK_UNCONFIGURED))
}

/// Selects the process operation for a tier, configured or not.
fn process_operation(check: Option<&ProcessCheck>) -> &dyn CheckOperation {
    match check {
        Some(configured) => configured,
        None => &unconfigured_process,
    }
}

/// Derives the report endpoints for a config and target.
#[must_use]
pub fn service_endpoints(config: &SmokeGateConfig, target: &TargetHost) -> ServiceEndpoints {
    ServiceEndpoints {
        web_base: config.web.base_url(target),
        api_base: config.api.base_url(target),
    }
}
