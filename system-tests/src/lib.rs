// system-tests/src/lib.rs
// ============================================================================
// Module: Smoke Gate System Tests Library
// Description: Shared stub services for end-to-end smoke suite scenarios.
// Purpose: Provide loopback web and api tier stubs for system-test suites.
// Dependencies: tiny_http
// ============================================================================

//! ## Overview
//! This crate hosts the loopback stub services used by the system-test
//! suites in `system-tests/tests`. The stubs emulate the face-analysis
//! deployment: a web tier serving an HTML root and a health endpoint, and an
//! api tier serving health JSON, interactive docs, the OpenAPI document, and
//! a multipart analyze endpoint with configurable rejection behavior.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod stubs;
