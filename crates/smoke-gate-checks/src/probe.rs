// crates/smoke-gate-checks/src/probe.rs
// ============================================================================
// Module: Readiness Prober
// Description: Bounded polling of the api health endpoint before the suite.
// Purpose: Give a freshly deployed service time to come up without ever
//          blocking or failing the run.
// Dependencies: smoke-gate-core, reqwest
// ============================================================================

//! ## Overview
//! The prober polls a health endpoint until it answers with the expected
//! status or the attempt budget runs out. It is purely advisory: connection
//! errors and status mismatches both count as "not ready yet", and the only
//! outcome is a boolean the caller may downgrade to a warning. Delays go
//! through an injected [`Sleeper`] so retry loops are deterministic in tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::blocking::Client;
use smoke_gate_core::CheckError;
use smoke_gate_core::Sleeper;

use crate::http::HttpCheckConfig;
use crate::http::build_client;

// ============================================================================
// SECTION: Prober Implementation
// ============================================================================

/// Readiness prober polling a health endpoint with bounded retries.
///
/// # Invariants
/// - Never errors once constructed; every probe outcome is a boolean.
/// - Sleeps only between attempts, never after the last one.
pub struct ReadinessProber<S: Sleeper> {
    /// HTTP client used for probe requests.
    client: Client,
    /// Sleeper used between attempts.
    sleeper: S,
}

impl<S: Sleeper> ReadinessProber<S> {
    /// Creates a prober sharing the checker's HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] when the HTTP client cannot be created.
    pub fn new(config: &HttpCheckConfig, sleeper: S) -> Result<Self, CheckError> {
        let client = build_client(config)?;
        Ok(Self {
            client,
            sleeper,
        })
    }

    /// Polls `url` until it answers `expected_status` or attempts run out.
    ///
    /// Returns true when the endpoint answered with the expected status
    /// within the budget.
    #[must_use]
    pub fn wait_for_ready(
        &self,
        url: &str,
        expected_status: u16,
        max_attempts: u32,
        retry_delay: Duration,
    ) -> bool {
        for attempt in 1..=max_attempts {
            let ready = self
                .client
                .get(url)
                .send()
                .is_ok_and(|response| response.status().as_u16() == expected_status);
            if ready {
                return true;
            }
            if attempt < max_attempts {
                self.sleeper.sleep(retry_delay);
            }
        }
        false
    }
}
