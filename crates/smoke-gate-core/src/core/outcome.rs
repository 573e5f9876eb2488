// crates/smoke-gate-core/src/core/outcome.rs
// ============================================================================
// Module: Smoke Gate Outcomes
// Description: Classified results of executed checks.
// Purpose: Record observed polarity against expectation as a pass/fail verdict.
// Dependencies: crate::core::check, serde
// ============================================================================

//! ## Overview
//! An [`Outcome`] is created immediately after a check executes and is never
//! mutated afterwards. Classification is a single rule: the check passes when
//! the observed polarity equals the expected polarity, which makes
//! expected-failure checks pass exactly when their operation fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::check::Check;
use crate::core::check::Observation;
use crate::core::check::Polarity;

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// Pass/fail verdict of a classified check.
///
/// # Invariants
/// - Variants are stable for serialization and report matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Observed polarity matched the expectation.
    Pass,
    /// Observed polarity did not match the expectation.
    Fail,
}

impl Verdict {
    /// Returns a stable upper-case label for operator-facing output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }

    /// Returns true for a passing verdict.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Classified result of one executed check.
///
/// # Invariants
/// - `verdict == Pass` iff `observed == check.expected`.
/// - Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The check that was executed.
    pub check: Check,
    /// Polarity the operation actually produced.
    pub observed: Polarity,
    /// Optional diagnostic detail captured from the operation.
    pub detail: Option<String>,
    /// Pass/fail verdict against the expected polarity.
    pub verdict: Verdict,
}

impl Outcome {
    /// Classifies an observation against the check's expected polarity.
    #[must_use]
    pub fn classify(check: Check, observation: Observation) -> Self {
        let verdict = if observation.polarity == check.expected {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        Self {
            check,
            observed: observation.polarity,
            detail: observation.detail,
            verdict,
        }
    }

    /// Returns at most `max_lines` leading lines of the diagnostic detail.
    ///
    /// Long captured bodies would swamp the live progress log; the excerpt
    /// keeps per-check lines readable while the full detail stays in the
    /// summary.
    #[must_use]
    pub fn detail_excerpt(&self, max_lines: usize) -> Option<String> {
        let detail = self.detail.as_deref()?;
        let mut lines = detail.lines();
        let excerpt: Vec<&str> = lines.by_ref().take(max_lines).collect();
        if excerpt.is_empty() {
            return None;
        }
        let truncated = lines.next().is_some();
        let mut text = excerpt.join("\n");
        if truncated {
            text.push_str("\n...");
        }
        Some(text)
    }
}
