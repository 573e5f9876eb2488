// crates/smoke-gate-cli/src/lib.rs
// ============================================================================
// Module: Smoke Gate CLI Library
// Description: Shared CLI support code (localization catalog).
// Purpose: Expose the i18n catalog to the binary and its tests.
// Dependencies: Standard library only.
// ============================================================================

//! ## Overview
//! Library side of the `smoke-gate` binary. It carries the localization
//! catalog and the [`t!`](crate::t) macro so user-facing strings stay in one
//! place and integration tests can assert against them.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
