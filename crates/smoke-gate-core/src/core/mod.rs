// crates/smoke-gate-core/src/core/mod.rs
// ============================================================================
// Module: Smoke Gate Core Model
// Description: Check, outcome, and summary types for smoke-test runs.
// Purpose: Group the data-model submodules of the core crate.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! The core model captures one smoke-test run: named checks with expected
//! polarities, observations produced by executing them, classified outcomes,
//! and the accumulating run summary consumed by the report formatter.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod check;
pub mod identifiers;
pub mod outcome;
pub mod summary;
pub mod time;
