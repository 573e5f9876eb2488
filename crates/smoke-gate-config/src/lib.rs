// crates/smoke-gate-config/src/lib.rs
// ============================================================================
// Module: Smoke Gate Config Library
// Description: Canonical config model and validation for Smoke Gate.
// Purpose: Single source of truth for smoke-gate.toml semantics.
// Dependencies: smoke-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `smoke-gate-config` defines the canonical configuration model for the
//! smoke harness. Configuration is loaded from a TOML file with strict size
//! and path limits; missing or invalid configuration fails closed so a broken
//! config can never silently shrink or soften the check suite.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
