// crates/smoke-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Smoke Gate Runtime
// Description: Suite runner and report formatter.
// Purpose: Group the execution-side submodules of the core crate.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! The runtime drives one sequential suite execution ([`SuiteRunner`]) and
//! renders the finalized summary into operator-facing text
//! ([`report::format_summary`]).

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod report;
pub mod runner;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use report::ServiceEndpoints;
pub use report::format_summary;
pub use runner::SuiteRunner;
