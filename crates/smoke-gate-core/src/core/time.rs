// crates/smoke-gate-core/src/core/time.rs
// ============================================================================
// Module: Smoke Gate Time Model
// Description: Injected delay dependency for retry loops.
// Purpose: Keep readiness polling deterministic and testable without real sleeps.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The core never sleeps directly. Retry loops receive a [`Sleeper`] so tests
//! can record requested delays and simulate elapsed time instantly while
//! production code blocks the calling thread via [`SystemSleeper`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::thread;
use std::time::Duration;

// ============================================================================
// SECTION: Sleeper
// ============================================================================

/// Injected delay dependency for bounded retry loops.
pub trait Sleeper {
    /// Blocks the calling thread for the given duration.
    fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSleeper;

impl Sleeper for SystemSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
