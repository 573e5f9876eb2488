// crates/smoke-gate-checks/src/lib.rs
// ============================================================================
// Module: Smoke Gate Checks
// Description: Built-in deployment checks and suite assembly.
// Purpose: Provide the concrete HTTP, process, and readiness checks that make
//          up the fixed smoke suite.
// Dependencies: smoke-gate-core, smoke-gate-config, reqwest, serde_json
// ============================================================================

//! ## Overview
//! This crate ships the concrete check implementations behind the smoke
//! suite: bounded HTTP probes against the web and api tiers, multipart upload
//! checks against the analyze endpoint, out-of-band process inspection, and
//! the readiness prober that gates (but never blocks) the run. Checks are
//! deterministic with respect to the remote service and fail closed: any
//! transport fault surfaces as an observed failure with diagnostic detail.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod http;
pub mod probe;
pub mod process;
pub mod suite;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use http::HttpCheckConfig;
pub use http::HttpChecker;
pub use http::UploadPayload;
pub use probe::ReadinessProber;
pub use process::ProcessCheck;
pub use suite::SAMPLE_PNG;
pub use suite::SUITE_SIZE;
pub use suite::SuitePlan;
pub use suite::service_endpoints;
