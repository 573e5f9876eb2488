// crates/smoke-gate-core/tests/proptest_runner.rs
// ============================================================================
// Module: Runner Property-Based Tests
// Description: Property tests for counter and classification invariants.
// Purpose: Detect bookkeeping drift across arbitrary check sequences.
// ============================================================================

//! Property-based tests for suite-runner invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use smoke_gate_core::Check;
use smoke_gate_core::CheckError;
use smoke_gate_core::EnvironmentLabel;
use smoke_gate_core::NullProgressSink;
use smoke_gate_core::Observation;
use smoke_gate_core::Polarity;
use smoke_gate_core::TargetHost;
use smoke_gate_core::Verdict;
use smoke_gate_core::runtime::SuiteRunner;

/// One scripted check step: expected polarity, observed signal, fault flag.
#[derive(Debug, Clone)]
struct Step {
    expect_success: bool,
    observe_success: bool,
    fault: bool,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(expect_success, observe_success, fault)| Step {
        expect_success,
        observe_success,
        fault,
    })
}

fn run_steps(steps: &[Step]) -> smoke_gate_core::RunSummary {
    let mut runner = SuiteRunner::new(
        EnvironmentLabel::new("prop"),
        TargetHost::new("localhost"),
        NullProgressSink,
    );
    for (index, step) in steps.iter().enumerate() {
        let check = if step.expect_success {
            Check::expect_success(format!("step-{index}"))
        } else {
            Check::expect_failure(format!("step-{index}"))
        };
        let fault = step.fault;
        let observe_success = step.observe_success;
        let operation = move || -> Result<Observation, CheckError> {
            if fault {
                return Err(CheckError::Operation("injected".to_string()));
            }
            Ok(Observation::from_signal(observe_success, "signal"))
        };
        runner.run_check(check, &operation);
        prop_assert_state(runner.summary().counters_consistent());
    }
    runner.finalize()
}

/// Panics when the counter invariant is violated mid-run.
fn prop_assert_state(consistent: bool) {
    assert!(consistent, "counters diverged from outcome sequence");
}

proptest! {
    #[test]
    fn counters_hold_for_arbitrary_sequences(steps in prop::collection::vec(step_strategy(), 0 .. 32)) {
        let summary = run_steps(&steps);
        prop_assert_eq!(summary.total, summary.passed + summary.failed);
        prop_assert_eq!(summary.outcomes.len() as u64, summary.total);
    }

    #[test]
    fn classification_matches_polarity_rule(steps in prop::collection::vec(step_strategy(), 1 .. 16)) {
        let summary = run_steps(&steps);
        for (outcome, step) in summary.outcomes.iter().zip(&steps) {
            let observed_success = !step.fault && step.observe_success;
            prop_assert_eq!(outcome.observed, Polarity::from_success(observed_success));
            let expected_pass = observed_success == step.expect_success;
            prop_assert_eq!(outcome.verdict.is_pass(), expected_pass);
        }
    }

    #[test]
    fn reruns_classify_identically(steps in prop::collection::vec(step_strategy(), 0 .. 16)) {
        let first = run_steps(&steps);
        let second = run_steps(&steps);
        prop_assert_eq!(first.passed, second.passed);
        prop_assert_eq!(first.failed, second.failed);
        let first_verdicts: Vec<Verdict> = first.outcomes.iter().map(|o| o.verdict).collect();
        let second_verdicts: Vec<Verdict> = second.outcomes.iter().map(|o| o.verdict).collect();
        prop_assert_eq!(first_verdicts, second_verdicts);
    }
}
