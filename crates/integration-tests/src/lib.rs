//! Test support for the Canopy workspace.
//!
//! [`MockApi`] stands in for the platform backend: it binds an
//! ephemeral port, answers each request with the next queued
//! [`MockResponse`], and records everything it saw so tests can assert
//! on verbs, paths, and bodies. [`fixtures`] builds the JSON documents
//! the real backend would send.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fixtures;

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use canopy_client::{AdminApi, RestClient, Signals, StorefrontApi};
use canopy_core::StoreId;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Store ID the wiring helpers scope their clients to.
pub const STORE: &str = "store_1";

/// Publishable token the storefront helpers authenticate with.
pub const PUBLISHABLE_TOKEN: &str = "pk_test_4XumcCnb19Zvc2";

/// Admin token the admin helper authenticates with.
pub const ADMIN_TOKEN: &str = "admin_9vXq2mRj8sLc4nTe";

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// The value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The body parsed as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

/// A canned response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: b"{}".to_vec(),
            delay_ms: 0,
        }
    }
}

impl MockResponse {
    /// A 200 response with a JSON body.
    #[must_use]
    pub fn json(body: &str) -> Self {
        Self {
            body: body.as_bytes().to_vec(),
            ..Self::default()
        }
    }

    /// An error response carrying the platform's error envelope.
    #[must_use]
    pub fn error(status: u16, code: &str, message: &str) -> Self {
        let envelope = serde_json::json!({
            "error": { "code": code, "message": message }
        });
        Self {
            status,
            body: envelope.to_string().into_bytes(),
            ..Self::default()
        }
    }

    /// A 429 response with a `Retry-After` header.
    #[must_use]
    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self {
            status: 429,
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("retry-after".to_string(), retry_after_secs.to_string()),
            ],
            body: b"{}".to_vec(),
            delay_ms: 0,
        }
    }

    /// Hold the response back for `ms` milliseconds.
    #[must_use]
    pub const fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// In-process stand-in for the platform API.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    /// Bind an ephemeral port and start serving queued responses.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let addr = listener.local_addr().expect("mock server has no address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for the server to start accepting
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Queue a response for the next request.
    pub async fn enqueue(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    /// Everything the mock has been asked so far.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// How many requests the mock has seen.
    pub async fn request_count(&self) -> usize {
        self.state.requests.lock().await.len()
    }

    /// The base URL clients should point at.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Drop captured requests and queued responses.
    pub async fn clear(&self) {
        self.state.requests.lock().await.clear();
        self.state.responses.lock().await.clear();
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
        .collect();

    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().await.push(CapturedRequest {
        method,
        path,
        query,
        headers,
        body,
    });

    let mock_resp = state.responses.lock().await.pop_front().unwrap_or_default();

    if mock_resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(mock_resp.delay_ms)).await;
    }

    let status = StatusCode::from_u16(mock_resp.status).expect("invalid mock status code");
    let mut builder = Response::builder().status(status);
    for (name, value) in mock_resp.headers {
        builder = builder.header(name, value);
    }
    builder
        .body(Body::from(mock_resp.body))
        .expect("failed to build mock response")
}

// =============================================================================
// Wiring helpers
// =============================================================================

/// A storefront client pointed at the mock, plus the signals it reports
/// to.
#[must_use]
pub fn storefront_api(mock: &MockApi) -> (StorefrontApi, Signals) {
    let signals = Signals::default();
    let rest = RestClient::new(&mock.base_url(), PUBLISHABLE_TOKEN, signals.clone());
    (StorefrontApi::new(rest, StoreId::new(STORE)), signals)
}

/// An admin client pointed at the mock.
#[must_use]
pub fn admin_api(mock: &MockApi) -> AdminApi {
    let rest = RestClient::new(&mock.base_url(), ADMIN_TOKEN, Signals::default());
    AdminApi::new(rest, StoreId::new(STORE))
}
