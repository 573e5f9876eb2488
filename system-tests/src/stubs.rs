// system-tests/src/stubs.rs
// ============================================================================
// Module: Tier Stubs
// Description: Loopback stand-ins for the deployed web and api tiers.
// Purpose: Serve deterministic responses so suite scenarios are repeatable.
// Dependencies: tiny_http
// ============================================================================

//! ## Overview
//! Each stub binds an ephemeral loopback port and serves requests on a
//! background thread until dropped. The api stub implements the analyze
//! contract of the original face-analysis service: a missing `image` field
//! is answered with 422, an empty or undecodable upload with 400, and a
//! valid PNG with a JSON body carrying `filename`, `face_count`, and
//! `faces`. Options flip individual behaviors so scenarios can simulate an
//! unready, permissive, or partially broken deployment.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;

use tiny_http::Header;
use tiny_http::Request;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// PNG file signature expected at the start of a valid upload.
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];

/// Analyze response when face fields are present.
const ANALYZE_OK: &str = "{\"filename\":\"sample.png\",\"face_count\":0,\"faces\":[]}";

/// Analyze response missing the face fields.
const ANALYZE_PARTIAL: &str = "{\"filename\":\"sample.png\"}";

// ============================================================================
// SECTION: Options
// ============================================================================

/// Behavior switches for the web tier stub.
#[derive(Debug, Clone)]
pub struct WebOptions {
    /// Status answered on `/health`.
    pub health_status: u16,
    /// Whether `/` serves an HTML page.
    pub root_is_html: bool,
}

impl Default for WebOptions {
    fn default() -> Self {
        Self {
            health_status: 200,
            root_is_html: true,
        }
    }
}

/// Behavior switches for the api tier stub.
#[derive(Debug, Clone)]
pub struct ApiOptions {
    /// Status answered on `/health`.
    pub health_status: u16,
    /// JSON body answered on `/health`.
    pub health_body: String,
    /// Accept every upload with 200, skipping rejection logic.
    pub accept_all_uploads: bool,
    /// Omit `face_count` and `faces` from accepted analyze responses.
    pub omit_face_fields: bool,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            health_status: 200,
            health_body: "{\"status\":\"ok\"}".to_string(),
            accept_all_uploads: false,
            omit_face_fields: false,
        }
    }
}

// ============================================================================
// SECTION: Stub Tier
// ============================================================================

/// A stub tier bound to an ephemeral loopback port.
///
/// # Invariants
/// - The worker thread serves requests until the stub is dropped.
pub struct StubTier {
    /// Shared server handle used to unblock the worker on drop.
    server: Arc<Server>,
    /// Worker thread serving requests.
    worker: Option<JoinHandle<()>>,
    /// Bound loopback port.
    port: u16,
}

impl StubTier {
    /// Returns the bound loopback port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl Drop for StubTier {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Spawns a web tier stub.
///
/// # Errors
///
/// Returns an error string when the loopback socket cannot be bound.
pub fn spawn_web_tier(options: WebOptions) -> Result<StubTier, String> {
    spawn_tier(move |request| handle_web(request, &options))
}

/// Spawns an api tier stub.
///
/// # Errors
///
/// Returns an error string when the loopback socket cannot be bound.
pub fn spawn_api_tier(options: ApiOptions) -> Result<StubTier, String> {
    spawn_tier(move |request| handle_api(request, &options))
}

/// Binds an ephemeral port and serves requests with `handler` until dropped.
fn spawn_tier<H>(handler: H) -> Result<StubTier, String>
where
    H: Fn(Request) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = server.server_addr().to_ip().ok_or_else(|| "no bound address".to_string())?;
    let server = Arc::new(server);
    let worker_server = Arc::clone(&server);
    let worker = thread::spawn(move || {
        for request in worker_server.incoming_requests() {
            handler(request);
        }
    });
    Ok(StubTier {
        server,
        worker: Some(worker),
        port: addr.port(),
    })
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Routes a web tier request.
fn handle_web(request: Request, options: &WebOptions) {
    match request.url() {
        "/health" => respond(request, options.health_status, "text/plain", "ok"),
        "/" => {
            if options.root_is_html {
                respond(
                    request,
                    200,
                    "text/html",
                    "<html><head><title>Face Analysis</title></head><body>upload</body></html>",
                );
            } else {
                respond(request, 200, "text/plain", "maintenance");
            }
        }
        _ => respond(request, 404, "text/plain", "not found"),
    }
}

/// Routes an api tier request.
fn handle_api(mut request: Request, options: &ApiOptions) {
    let url = request.url().to_string();
    match url.as_str() {
        "/health" => {
            let body = options.health_body.clone();
            respond(request, options.health_status, "application/json", &body);
        }
        "/docs" => respond(
            request,
            200,
            "text/html",
            "<html><head><title>Face Analysis API</title></head><body>docs</body></html>",
        ),
        "/openapi.json" => respond(
            request,
            200,
            "application/json",
            "{\"openapi\":\"3.1.0\",\"info\":{\"title\":\"Face Analysis API\"},\"paths\":{}}",
        ),
        "/analyze" => {
            let mut body = Vec::new();
            let _ = request.as_reader().read_to_end(&mut body);
            let (status, reply) = analyze_reply(&body, options);
            respond(request, status, "application/json", reply);
        }
        _ => respond(request, 404, "text/plain", "not found"),
    }
}

/// Computes the analyze endpoint reply for a raw multipart body.
fn analyze_reply<'a>(body: &[u8], options: &'a ApiOptions) -> (u16, &'a str) {
    let accepted = if options.omit_face_fields { ANALYZE_PARTIAL } else { ANALYZE_OK };
    if options.accept_all_uploads {
        return (200, accepted);
    }
    let Some(content) = image_part(body) else {
        return (422, "{\"detail\":[{\"msg\":\"Field required\"}]}");
    };
    if content.is_empty() {
        return (400, "{\"detail\":\"Empty file\"}");
    }
    if !content.starts_with(PNG_MAGIC) {
        return (400, "{\"detail\":\"Invalid or unsupported image file\"}");
    }
    (200, accepted)
}

/// Extracts the content of the `image` multipart field, when present.
fn image_part(body: &[u8]) -> Option<&[u8]> {
    let start = find_subslice(body, b"name=\"image\"")?;
    let rest = &body[start..];
    let header_end = find_subslice(rest, b"\r\n\r\n")? + 4;
    let content = rest.get(header_end..)?;
    let end = find_subslice(content, b"\r\n--")?;
    content.get(..end)
}

/// Returns the offset of `needle` inside `haystack`, when present.
fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Sends a response with a status, content type, and body.
fn respond(request: Request, status: u16, content_type: &str, body: &str) {
    let response = Response::from_string(body).with_status_code(status);
    match Header::from_bytes("Content-Type", content_type) {
        Ok(header) => {
            let _ = request.respond(response.with_header(header));
        }
        Err(_) => {
            let _ = request.respond(response);
        }
    }
}
