// crates/smoke-gate-checks/src/process.rs
// ============================================================================
// Module: Process Check
// Description: Out-of-band process inspection via a configured command.
// Purpose: Verify that tier processes are running on the target host.
// Dependencies: smoke-gate-core
// ============================================================================

//! ## Overview
//! A process check runs a configured command line (for example
//! `ssh host docker inspect -f '{{.State.Running}}' web`) and maps its exit
//! status to an observation. Exit 0 observes Success; a non-zero exit or a
//! spawn failure observes Failure with captured output as detail, so a dead
//! process never aborts the run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::process::Command;

use smoke_gate_core::CheckError;
use smoke_gate_core::CheckOperation;
use smoke_gate_core::Observation;

// ============================================================================
// SECTION: Process Check
// ============================================================================

/// Out-of-band process check driven by a configured command line.
///
/// # Invariants
/// - The command vector is non-empty (enforced at construction).
#[derive(Debug, Clone)]
pub struct ProcessCheck {
    /// Command and arguments, argv form.
    command: Vec<String>,
}

impl ProcessCheck {
    /// Creates a process check from an argv-form command line.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] when the command vector is empty.
    pub fn new(command: Vec<String>) -> Result<Self, CheckError> {
        if command.is_empty() {
            return Err(CheckError::InvalidInput(
                "process check command must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            command,
        })
    }

    /// Runs the command and maps its exit status to an observation.
    fn observe(&self) -> Observation {
        let Some((program, args)) = self.command.split_first() else {
            return Observation::failure("process check command must be non-empty");
        };
        let output = match Command::new(program).args(args).output() {
            Ok(output) => output,
            Err(err) => {
                return Observation::failure(format!(
                    "process check failed to start ({program}): {err}"
                ));
            }
        };
        if output.status.success() {
            return Observation::success();
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let diagnostic = if stderr.trim().is_empty() { stdout } else { stderr };
        Observation::failure(format!(
            "process check exited with {}: {}",
            output.status,
            diagnostic.trim()
        ))
    }
}

impl CheckOperation for ProcessCheck {
    fn execute(&self) -> Result<Observation, CheckError> {
        Ok(self.observe())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
