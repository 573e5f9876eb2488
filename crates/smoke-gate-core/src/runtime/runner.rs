// crates/smoke-gate-core/src/runtime/runner.rs
// ============================================================================
// Module: Smoke Gate Suite Runner
// Description: Sequential check execution with pass/fail bookkeeping.
// Purpose: Execute each check exactly once and accumulate outcomes monotonically.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The suite runner owns the accumulating [`RunSummary`] for one invocation
//! and mutates it on the single calling thread. Each check runs to completion
//! before the next begins; checks may have ordering dependencies, so the
//! runner never reorders or parallelizes them. Operation faults are caught
//! and recorded as observed failures with the fault message as detail; only
//! the caller's preconditions can stop a run early.
//!
//! State machine: `Idle -> Running (per check: execute -> classify -> record)
//! -> Finalized`. Finalization consumes the runner, so there is no transition
//! back out of the terminal state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::check::Check;
use crate::core::check::Observation;
use crate::core::identifiers::EnvironmentLabel;
use crate::core::identifiers::TargetHost;
use crate::core::outcome::Outcome;
use crate::core::outcome::Verdict;
use crate::core::summary::RunSummary;
use crate::interfaces::CheckOperation;
use crate::interfaces::ProgressSink;

// ============================================================================
// SECTION: Suite Runner
// ============================================================================

/// Sequential smoke-suite runner.
///
/// # Invariants
/// - `total == passed + failed == outcomes.len()` after every `run_check`.
/// - Each operation is executed exactly once, whether it succeeds or not.
/// - No early exit: a failing check never prevents subsequent checks.
pub struct SuiteRunner<S> {
    /// Accumulating summary owned for the duration of the run.
    summary: RunSummary,
    /// Sink receiving live per-check progress lines.
    sink: S,
}

impl<S: ProgressSink> SuiteRunner<S> {
    /// Creates a runner for the given environment and target.
    #[must_use]
    pub const fn new(environment: EnvironmentLabel, target: TargetHost, sink: S) -> Self {
        Self {
            summary: RunSummary::new(environment, target),
            sink,
        }
    }

    /// Executes a check exactly once and records its classified outcome.
    ///
    /// A fault while invoking the operation is not a harness error: it is
    /// converted into an observed failure with the fault message as detail,
    /// and the run continues.
    pub fn run_check(&mut self, check: Check, operation: &dyn CheckOperation) -> Verdict {
        let observation = match operation.execute() {
            Ok(observation) => observation,
            Err(fault) => Observation::failure(fault.to_string()),
        };
        let outcome = Outcome::classify(check, observation);
        let verdict = outcome.verdict;
        self.summary.record(outcome);
        let ordinal = self.summary.total;
        if let Some(recorded) = self.summary.outcomes.last() {
            self.sink.on_check(ordinal, recorded);
        }
        verdict
    }

    /// Forwards an advisory warning to the progress sink.
    pub fn warn(&mut self, message: &str) {
        self.sink.on_warning(message);
    }

    /// Returns the summary accumulated so far.
    #[must_use]
    pub const fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Finalizes the run, consuming the runner.
    #[must_use]
    pub fn finalize(self) -> RunSummary {
        self.summary
    }
}
