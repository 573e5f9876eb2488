// crates/smoke-gate-core/src/core/identifiers.rs
// ============================================================================
// Module: Smoke Gate Identifiers
// Description: Opaque identifiers for checks, environments, and targets.
// Purpose: Provide strongly typed, serializable labels with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the opaque string labels used throughout Smoke Gate.
//! Labels serialize transparently as strings and are never normalized or
//! validated by these types; callers supply them as-is (environment and
//! target come from the CLI invocation, check names from the suite builder).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Name of a single smoke check.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
/// - Unique within one suite (enforced by the suite builder, not here).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckName(String);

impl CheckName {
    /// Creates a new check name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the check name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Deployment environment label (e.g. `staging`, `production`).
///
/// # Invariants
/// - Opaque UTF-8 string supplied by the caller; used only for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentLabel(String);

impl EnvironmentLabel {
    /// Creates a new environment label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the environment label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Target host of a smoke-test run (hostname or IP, no scheme).
///
/// # Invariants
/// - Opaque UTF-8 string supplied by the caller; endpoint URLs are derived
///   from it by configuration, never by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetHost(String);

impl TargetHost {
    /// Creates a new target host label.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self(host.into())
    }

    /// Returns the target host as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
