// crates/smoke-gate-core/src/core/check.rs
// ============================================================================
// Module: Smoke Gate Checks
// Description: Check definitions, polarities, and raw observations.
// Purpose: Model a named verification step with an expected outcome polarity.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A [`Check`] pairs a human-readable name with the polarity its operation is
//! expected to produce. Expected-failure checks let the same runner primitive
//! validate error paths (a malformed upload must be rejected) alongside happy
//! paths. Executing a check yields an [`Observation`]: the polarity that was
//! actually observed plus optional diagnostic detail.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::CheckName;

// ============================================================================
// SECTION: Polarity
// ============================================================================

/// Success/failure polarity of a check operation.
///
/// # Invariants
/// - Variants are stable for serialization and report matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// The operation succeeded (e.g. the endpoint answered as required).
    Success,
    /// The operation failed (e.g. non-matching status, connection error).
    Failure,
}

impl Polarity {
    /// Maps a boolean success signal to a polarity.
    #[must_use]
    pub const fn from_success(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }

    /// Returns a stable label for the polarity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

// ============================================================================
// SECTION: Check Definition
// ============================================================================

/// A single named verification step with an expected outcome polarity.
///
/// # Invariants
/// - Immutable once created; executed exactly once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    /// Human-readable check name (unique within a suite).
    pub name: CheckName,
    /// Polarity the operation is expected to produce.
    pub expected: Polarity,
}

impl Check {
    /// Creates a check whose operation is expected to succeed.
    #[must_use]
    pub fn expect_success(name: impl Into<String>) -> Self {
        Self {
            name: CheckName::new(name),
            expected: Polarity::Success,
        }
    }

    /// Creates a check whose operation is expected to fail (error-path test).
    #[must_use]
    pub fn expect_failure(name: impl Into<String>) -> Self {
        Self {
            name: CheckName::new(name),
            expected: Polarity::Failure,
        }
    }
}

// ============================================================================
// SECTION: Observation
// ============================================================================

/// Raw result of executing a check operation once.
///
/// # Invariants
/// - Never mutated after creation.
/// - `detail` carries captured output or error text, not interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Polarity the operation actually produced.
    pub polarity: Polarity,
    /// Optional diagnostic detail (captured output or error message).
    pub detail: Option<String>,
}

impl Observation {
    /// Creates a success observation without detail.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            polarity: Polarity::Success,
            detail: None,
        }
    }

    /// Creates a failure observation with diagnostic detail.
    #[must_use]
    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            polarity: Polarity::Failure,
            detail: Some(detail.into()),
        }
    }

    /// Creates an observation from a boolean success signal and detail.
    #[must_use]
    pub fn from_signal(success: bool, detail: impl Into<String>) -> Self {
        Self {
            polarity: Polarity::from_success(success),
            detail: Some(detail.into()),
        }
    }
}
