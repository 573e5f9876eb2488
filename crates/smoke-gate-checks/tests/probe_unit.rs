// crates/smoke-gate-checks/tests/probe_unit.rs
// ============================================================================
// Module: Readiness Prober Tests
// Description: Deterministic retry-loop tests with a recording sleeper.
// Purpose: Verify attempt budgets, delay placement, and advisory outcomes.
// ============================================================================

//! ## Overview
//! The prober is tested against loopback stubs with an injected sleeper that
//! records requested delays instead of blocking. No test here sleeps for
//! real.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::net::TcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use smoke_gate_checks::HttpCheckConfig;
use smoke_gate_checks::ReadinessProber;
use smoke_gate_core::Sleeper;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Sleeper recording requested delays instead of blocking.
#[derive(Clone, Default)]
struct RecordingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    fn recorded(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// Loopback HTTP settings shared by all prober tests.
fn local_config() -> HttpCheckConfig {
    HttpCheckConfig {
        allow_http: true,
        timeout_ms: 5_000,
        ..HttpCheckConfig::default()
    }
}

/// Serves `count` requests, each answering with the given status.
fn serve_statuses(count: usize, status: u16) -> (String, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = thread::spawn(move || {
        for _ in 0..count {
            if let Ok(request) = server.recv() {
                let response = Response::from_string("probe").with_status_code(status);
                let _ = request.respond(response);
            }
        }
    });
    (format!("http://{addr}/health"), handle)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn ready_on_first_attempt_never_sleeps() {
    let (url, handle) = serve_statuses(1, 200);
    let sleeper = RecordingSleeper::default();
    let prober = ReadinessProber::new(&local_config(), sleeper.clone()).unwrap();
    let ready = prober.wait_for_ready(&url, 200, 5, Duration::from_millis(100));
    handle.join().unwrap();
    assert!(ready, "endpoint answering 200 should be ready");
    assert!(sleeper.recorded().is_empty(), "no delay before or after a ready answer");
}

#[test]
fn exhausted_budget_reports_not_ready() {
    let (url, handle) = serve_statuses(3, 503);
    let sleeper = RecordingSleeper::default();
    let prober = ReadinessProber::new(&local_config(), sleeper.clone()).unwrap();
    let ready = prober.wait_for_ready(&url, 200, 3, Duration::from_millis(250));
    handle.join().unwrap();
    assert!(!ready, "persistent 503 should exhaust the budget");
    let delays = sleeper.recorded();
    assert_eq!(delays.len(), 2, "sleeps happen between attempts, not after the last");
    assert!(delays.iter().all(|delay| *delay == Duration::from_millis(250)));
}

#[test]
fn becomes_ready_mid_budget() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let url = format!("http://{addr}/health");
    let handle = thread::spawn(move || {
        let statuses = [503, 200];
        for status in statuses {
            if let Ok(request) = server.recv() {
                let response = Response::from_string("probe").with_status_code(status);
                let _ = request.respond(response);
            }
        }
    });
    let sleeper = RecordingSleeper::default();
    let prober = ReadinessProber::new(&local_config(), sleeper.clone()).unwrap();
    let ready = prober.wait_for_ready(&url, 200, 5, Duration::from_millis(50));
    handle.join().unwrap();
    assert!(ready, "second attempt should observe readiness");
    assert_eq!(sleeper.recorded().len(), 1);
}

#[test]
fn connection_error_counts_as_not_ready() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let sleeper = RecordingSleeper::default();
    let prober = ReadinessProber::new(&local_config(), sleeper.clone()).unwrap();
    let ready = prober.wait_for_ready(&format!("http://{addr}/health"), 200, 2, Duration::ZERO);
    assert!(!ready, "refused connections should never count as ready");
    assert_eq!(sleeper.recorded().len(), 1);
}
