// crates/smoke-gate-core/src/lib.rs
// ============================================================================
// Module: Smoke Gate Core
// Description: Data model and runtime for the deployment smoke-test harness.
// Purpose: Provide checks, outcomes, run summaries, and the sequential runner.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Smoke Gate core defines the check data model (name, expected polarity,
//! observation, outcome), the accumulating [`RunSummary`], the sequential
//! [`runtime::SuiteRunner`], and the pure report formatter. The core never
//! performs I/O itself: check operations and progress output are injected
//! through the [`CheckOperation`] and [`ProgressSink`] interfaces, and delays
//! are injected through [`Sleeper`] so retry loops stay deterministic under
//! test.
//! Invariants:
//! - `total == passed + failed == outcomes.len()` after every check.
//! - A failing check operation is a data point, never a harness abort.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::check::Check;
pub use core::check::Observation;
pub use core::check::Polarity;
pub use core::identifiers::CheckName;
pub use core::identifiers::EnvironmentLabel;
pub use core::identifiers::TargetHost;
pub use core::outcome::Outcome;
pub use core::outcome::Verdict;
pub use core::summary::RunSummary;
pub use core::time::Sleeper;
pub use core::time::SystemSleeper;
pub use interfaces::CheckError;
pub use interfaces::CheckOperation;
pub use interfaces::NullProgressSink;
pub use interfaces::ProgressSink;
pub use runtime::ServiceEndpoints;
pub use runtime::SuiteRunner;
pub use runtime::format_summary;
