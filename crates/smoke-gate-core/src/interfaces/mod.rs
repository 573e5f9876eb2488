// crates/smoke-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Smoke Gate Interfaces
// Description: Backend-agnostic interfaces for check execution and progress.
// Purpose: Define the contract surfaces used by the suite runner.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the runner invokes checks and reports progress
//! without embedding transport details. A [`CheckOperation`] mixes HTTP
//! calls, remote-process inspection, and arbitrary predicates under one
//! capability: execute once and return an observed polarity plus detail.
//! Operation faults surface as [`CheckError`]; the runner converts them into
//! observed failures so one broken check never aborts the rest of the suite.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::check::Observation;
use crate::core::outcome::Outcome;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Faults raised while invoking a check operation.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - A `CheckError` is harness-level (malformed input, client construction);
///   ordinary endpoint misbehavior is an observed failure, not an error.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The operation could not be invoked at all.
    #[error("check operation fault: {0}")]
    Operation(String),
    /// The operation's input could not be prepared (file, URL, command).
    #[error("check input invalid: {0}")]
    InvalidInput(String),
}

// ============================================================================
// SECTION: Check Operation
// ============================================================================

/// Capability that executes one check and yields its observation.
///
/// # Invariants
/// - Implementations are executed exactly once per run by the runner.
/// - Expected endpoint misbehavior must be returned as an
///   [`Observation`] with failure polarity, not as an error.
pub trait CheckOperation {
    /// Executes the check once.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] only for harness-level faults; the runner
    /// converts such faults into observed failures.
    fn execute(&self) -> Result<Observation, CheckError>;
}

impl<F> CheckOperation for F
where
    F: Fn() -> Result<Observation, CheckError>,
{
    fn execute(&self) -> Result<Observation, CheckError> {
        self()
    }
}

// ============================================================================
// SECTION: Progress Sink
// ============================================================================

/// Receiver for live per-check progress and advisory warnings.
///
/// # Invariants
/// - `on_check` is called exactly once per executed check, in order, with a
///   1-based ordinal.
/// - Sinks must not fail; output problems are the sink's own concern.
pub trait ProgressSink {
    /// Reports one classified outcome as soon as it is recorded.
    fn on_check(&mut self, ordinal: u64, outcome: &Outcome);

    /// Reports an advisory warning (e.g. readiness timeout).
    fn on_warning(&mut self, message: &str);
}

/// Progress sink that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn on_check(&mut self, _ordinal: u64, _outcome: &Outcome) {}

    fn on_warning(&mut self, _message: &str) {}
}
