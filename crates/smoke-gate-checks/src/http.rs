// crates/smoke-gate-checks/src/http.rs
// ============================================================================
// Module: HTTP Checks
// Description: Bounded HTTP checks against the deployed tiers.
// Purpose: Provide status, body, JSON, and multipart upload observations
//          with strict limits.
// Dependencies: smoke-gate-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! The HTTP checker issues bounded requests and maps what it sees to check
//! observations. Redirects are disabled, every request carries an explicit
//! timeout, and response bodies are read under a hard size limit. Transport
//! faults (connection refused, timeout, oversized body) surface as
//! [`CheckError`] so the runner can fold them into observed failures;
//! content mismatches (wrong status, missing JSON field) are ordinary
//! failure observations with diagnostic detail.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::multipart::Part;
use reqwest::redirect::Policy;
use serde_json::Value;
use smoke_gate_core::CheckError;
use smoke_gate_core::Observation;
use url::Url;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the HTTP checker.
///
/// # Invariants
/// - `allow_http = false` blocks cleartext `http://` URLs.
/// - `max_response_bytes` is enforced as a hard upper bound on response bodies.
/// - `timeout_ms` applies to the full request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCheckConfig {
    /// Allow cleartext HTTP (staging deployments typically need this).
    pub allow_http: bool,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for HttpCheckConfig {
    fn default() -> Self {
        Self {
            allow_http: true,
            timeout_ms: 10_000,
            max_response_bytes: 1024 * 1024,
            user_agent: "smoke-gate/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Upload Payloads
// ============================================================================

/// Multipart payload shapes used by the analyze checks.
#[derive(Debug, Clone)]
pub enum UploadPayload {
    /// A file part with the given name and contents.
    File {
        /// Filename reported in the multipart part headers.
        filename: String,
        /// MIME type reported for the part.
        content_type: String,
        /// Raw file contents (may be empty for rejection probes).
        bytes: Vec<u8>,
    },
    /// A form that deliberately omits the file field.
    MissingField,
}

impl UploadPayload {
    /// Builds a PNG file payload from raw bytes.
    #[must_use]
    pub fn png(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::File {
            filename: filename.into(),
            content_type: "image/png".to_string(),
            bytes,
        }
    }
}

// ============================================================================
// SECTION: Checker Implementation
// ============================================================================

/// HTTP checker issuing bounded requests against the deployed tiers.
///
/// # Invariants
/// - Redirects are not followed.
/// - Responses exceeding configured limits fail closed.
pub struct HttpChecker {
    /// Checker configuration, including limits and policy.
    config: HttpCheckConfig,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl HttpChecker {
    /// Creates a new HTTP checker with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] when the HTTP client cannot be created.
    pub fn new(config: HttpCheckConfig) -> Result<Self, CheckError> {
        let client = build_client(&config)?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Observes whether a GET returns the expected status code.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] on transport faults.
    pub fn status_is(&self, url: &str, expected: u16) -> Result<Observation, CheckError> {
        let fetched = self.fetch(url)?;
        if fetched.status == expected {
            Ok(Observation::success())
        } else {
            Ok(Observation::failure(format!(
                "expected status {expected}, got {} from {url}",
                fetched.status
            )))
        }
    }

    /// Observes whether a GET body contains the given marker string.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] on transport faults.
    pub fn body_contains(&self, url: &str, marker: &str) -> Result<Observation, CheckError> {
        let fetched = self.fetch(url)?;
        let body = String::from_utf8_lossy(&fetched.body);
        if body.contains(marker) {
            Ok(Observation::success())
        } else {
            Ok(Observation::failure(format!("body from {url} does not contain '{marker}'")))
        }
    }

    /// Observes whether a GET body parses as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] on transport faults.
    pub fn json_object_parses(&self, url: &str) -> Result<Observation, CheckError> {
        let fetched = self.fetch(url)?;
        match parse_json_object(&fetched.body) {
            Ok(_) => Ok(Observation::success()),
            Err(detail) => Ok(Observation::failure(format!("{detail} from {url}"))),
        }
    }

    /// Observes whether a GET body is a JSON object carrying a field.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] on transport faults.
    pub fn json_field_present(&self, url: &str, field: &str) -> Result<Observation, CheckError> {
        let fetched = self.fetch(url)?;
        match parse_json_object(&fetched.body) {
            Ok(map) if map.contains_key(field) => Ok(Observation::success()),
            Ok(_) => Ok(Observation::failure(format!("json from {url} lacks field '{field}'"))),
            Err(detail) => Ok(Observation::failure(format!("{detail} from {url}"))),
        }
    }

    /// Observes whether a JSON string field carries the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] on transport faults.
    pub fn json_field_equals(
        &self,
        url: &str,
        field: &str,
        expected: &str,
    ) -> Result<Observation, CheckError> {
        let fetched = self.fetch(url)?;
        let map = match parse_json_object(&fetched.body) {
            Ok(map) => map,
            Err(detail) => return Ok(Observation::failure(format!("{detail} from {url}"))),
        };
        match map.get(field) {
            Some(Value::String(value)) if value == expected => Ok(Observation::success()),
            Some(other) => Ok(Observation::failure(format!(
                "field '{field}' from {url} is {other}, expected \"{expected}\""
            ))),
            None => Ok(Observation::failure(format!("json from {url} lacks field '{field}'"))),
        }
    }

    /// Observes whether a multipart upload is accepted with HTTP 200.
    ///
    /// Rejection probes register this operation with expected polarity
    /// Failure: the deployment passes when the service refuses the payload.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] on transport faults.
    pub fn upload_accepted(
        &self,
        url: &str,
        field_name: &str,
        payload: &UploadPayload,
    ) -> Result<Observation, CheckError> {
        let posted = self.post_multipart(url, field_name, payload)?;
        if posted.status == 200 {
            Ok(Observation::success())
        } else {
            Ok(Observation::failure(format!(
                "upload to {url} returned status {}",
                posted.status
            )))
        }
    }

    /// Observes whether an accepted upload response carries a JSON field.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] on transport faults.
    pub fn upload_json_field(
        &self,
        url: &str,
        field_name: &str,
        payload: &UploadPayload,
        field: &str,
    ) -> Result<Observation, CheckError> {
        let posted = self.post_multipart(url, field_name, payload)?;
        if posted.status != 200 {
            return Ok(Observation::failure(format!(
                "upload to {url} returned status {}",
                posted.status
            )));
        }
        match parse_json_object(&posted.body) {
            Ok(map) if map.contains_key(field) => Ok(Observation::success()),
            Ok(_) => Ok(Observation::failure(format!(
                "analyze response from {url} lacks field '{field}'"
            ))),
            Err(detail) => Ok(Observation::failure(format!("{detail} from {url}"))),
        }
    }

    /// Issues a bounded GET and returns status plus limited body.
    fn fetch(&self, url: &str) -> Result<Fetched, CheckError> {
        let parsed = self.validate_url(url)?;
        let response = self
            .client
            .get(parsed.as_str())
            .send()
            .map_err(|err| CheckError::Operation(format!("GET {url} failed: {err}")))?;
        let status = response.status().as_u16();
        let body = read_response_limited(response, self.config.max_response_bytes)?;
        Ok(Fetched {
            status,
            body,
        })
    }

    /// Issues a bounded multipart POST and returns status plus limited body.
    fn post_multipart(
        &self,
        url: &str,
        field_name: &str,
        payload: &UploadPayload,
    ) -> Result<Fetched, CheckError> {
        let parsed = self.validate_url(url)?;
        let form = build_form(field_name, payload)?;
        let response = self
            .client
            .post(parsed.as_str())
            .multipart(form)
            .send()
            .map_err(|err| CheckError::Operation(format!("POST {url} failed: {err}")))?;
        let status = response.status().as_u16();
        let body = read_response_limited(response, self.config.max_response_bytes)?;
        Ok(Fetched {
            status,
            body,
        })
    }

    /// Validates URL scheme policy before any request is sent.
    fn validate_url(&self, url: &str) -> Result<Url, CheckError> {
        let parsed = Url::parse(url)
            .map_err(|_| CheckError::InvalidInput(format!("invalid url: {url}")))?;
        match parsed.scheme() {
            "https" => {}
            "http" if self.config.allow_http => {}
            _ => {
                return Err(CheckError::InvalidInput(format!(
                    "unsupported url scheme: {url}"
                )));
            }
        }
        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(CheckError::InvalidInput("url credentials are not allowed".to_string()));
        }
        Ok(parsed)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Status and bounded body of a completed request.
struct Fetched {
    /// HTTP status code.
    status: u16,
    /// Response body, read under the configured size limit.
    body: Vec<u8>,
}

/// Builds the blocking HTTP client for checks and the readiness prober.
pub(crate) fn build_client(config: &HttpCheckConfig) -> Result<Client, CheckError> {
    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(config.user_agent.clone())
        .redirect(Policy::none())
        .build()
        .map_err(|_| CheckError::Operation("http client build failed".to_string()))
}

/// Builds the multipart form for an upload payload.
fn build_form(field_name: &str, payload: &UploadPayload) -> Result<Form, CheckError> {
    match payload {
        UploadPayload::File {
            filename,
            content_type,
            bytes,
        } => {
            let part = Part::bytes(bytes.clone())
                .file_name(filename.clone())
                .mime_str(content_type)
                .map_err(|_| {
                    CheckError::InvalidInput(format!("invalid content type: {content_type}"))
                })?;
            Ok(Form::new().part(field_name.to_string(), part))
        }
        UploadPayload::MissingField => Ok(Form::new().text("note", "file field omitted")),
    }
}

/// Parses a body as a JSON object, reporting a short diagnostic on mismatch.
fn parse_json_object(body: &[u8]) -> Result<serde_json::Map<String, Value>, String> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!("json body is not an object ({})", json_kind(&other))),
        Err(_) => Err("body is not valid json".to_string()),
    }
}

/// Names a JSON value kind for diagnostics.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads the response body while enforcing a byte limit.
fn read_response_limited(
    response: reqwest::blocking::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, CheckError> {
    let expected_len = response.content_length();
    let max_bytes_u64 = u64::try_from(max_bytes)
        .map_err(|_| CheckError::Operation("response size limit exceeds u64".to_string()))?;
    if let Some(expected) = expected_len
        && expected > max_bytes_u64
    {
        return Err(CheckError::Operation("http response exceeds size limit".to_string()));
    }
    let mut buf = Vec::new();
    let limit = max_bytes_u64.saturating_add(1);
    let mut handle = response.take(limit);
    handle
        .read_to_end(&mut buf)
        .map_err(|_| CheckError::Operation("failed to read response".to_string()))?;
    if buf.len() > max_bytes {
        return Err(CheckError::Operation("http response exceeds size limit".to_string()));
    }
    Ok(buf)
}
