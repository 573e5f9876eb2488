// crates/smoke-gate-core/src/core/summary.rs
// ============================================================================
// Module: Smoke Gate Run Summary
// Description: Aggregate pass/fail state of one complete suite execution.
// Purpose: Accumulate outcomes monotonically for report rendering and CI gating.
// Dependencies: crate::core::{identifiers, outcome}, serde
// ============================================================================

//! ## Overview
//! The run summary is owned by the suite runner for the duration of one
//! invocation, accumulates monotonically, and is consumed by the report
//! formatter once finalized. Counters and the outcome sequence always agree:
//! `total == passed + failed == outcomes.len()` after every recorded check,
//! not only at the end.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::EnvironmentLabel;
use crate::core::identifiers::TargetHost;
use crate::core::outcome::Outcome;
use crate::core::outcome::Verdict;

// ============================================================================
// SECTION: Run Summary
// ============================================================================

/// Aggregate pass/fail state of one smoke-test run.
///
/// # Invariants
/// - `total == passed + failed == outcomes.len()` after every recorded check.
/// - Counters only ever increase; outcomes are appended in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Environment label supplied at invocation (opaque, reporting only).
    pub environment: EnvironmentLabel,
    /// Target host supplied at invocation (opaque, reporting only).
    pub target: TargetHost,
    /// Number of checks executed so far.
    pub total: u64,
    /// Number of checks classified as passing.
    pub passed: u64,
    /// Number of checks classified as failing.
    pub failed: u64,
    /// Classified outcomes in execution order.
    pub outcomes: Vec<Outcome>,
}

impl RunSummary {
    /// Creates an empty summary for the given environment and target.
    #[must_use]
    pub const fn new(environment: EnvironmentLabel, target: TargetHost) -> Self {
        Self {
            environment,
            target,
            total: 0,
            passed: 0,
            failed: 0,
            outcomes: Vec::new(),
        }
    }

    /// Appends an outcome and updates the counters.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome.verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Fail => self.failed += 1,
        }
        self.total += 1;
        self.outcomes.push(outcome);
    }

    /// Returns the success rate as a percentage.
    ///
    /// The zero-checks case is defined as `0.0`, not a division fault.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Check counts are far below 2^52.")]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.passed as f64) / (self.total as f64) * 100.0
    }

    /// Returns true when no recorded check failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Returns true when counters and the outcome sequence agree.
    #[must_use]
    pub fn counters_consistent(&self) -> bool {
        self.total == self.passed + self.failed && self.outcomes.len() as u64 == self.total
    }
}
