//! Mock inference backend for integration tests
//!
//! Stands in for the hosted text-to-image API, returning canned JPEG bytes
//! or error payloads and recording what the relay sent upstream.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Bytes served for successful generations; starts with the JPEG SOI marker
pub const DEFAULT_IMAGE_BYTES: &[u8] = b"\xff\xd8\xff\xe0mock-jpeg-bytes";

/// Mock inference backend that returns predictable responses
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockUpstreamState>,
}

struct MockUpstreamState {
    request_count: AtomicU32,
    /// Body of the most recent inference request
    last_body: Mutex<Option<Value>>,
    /// Authorization header of the most recent inference request
    last_authorization: Mutex<Option<String>>,
    response: MockResponse,
}

enum MockResponse {
    /// Respond 200 with raw image bytes
    Image(Vec<u8>),
    /// Respond with a model-loading JSON body
    ModelLoading { status: StatusCode },
    /// Respond with an arbitrary status and body text
    Error { status: StatusCode, body: String },
}

impl MockUpstream {
    /// Start a mock that serves [`DEFAULT_IMAGE_BYTES`]
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(MockResponse::Image(DEFAULT_IMAGE_BYTES.to_vec())).await
    }

    /// Start a mock that serves the given image bytes
    pub async fn start_with_image(bytes: &[u8]) -> anyhow::Result<Self> {
        Self::start_inner(MockResponse::Image(bytes.to_vec())).await
    }

    /// Start a mock that reports the model as still loading
    pub async fn start_model_loading(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(MockResponse::ModelLoading {
            status: StatusCode::from_u16(status).expect("valid status code"),
        })
        .await
    }

    /// Start a mock that fails every request with the given status and body
    pub async fn start_with_error(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(MockResponse::Error {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_owned(),
        })
        .await
    }

    async fn start_inner(response: MockResponse) -> anyhow::Result<Self> {
        let state = Arc::new(MockUpstreamState {
            request_count: AtomicU32::new(0),
            last_body: Mutex::new(None),
            last_authorization: Mutex::new(None),
            response,
        });

        let app = Router::new()
            .route("/models/test-image-model", routing::post(handle_inference))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Full inference endpoint URL for configuring the relay
    pub fn url(&self) -> String {
        format!("http://{}/models/test-image-model", self.addr)
    }

    /// Number of inference requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent inference request
    pub fn last_body(&self) -> Option<Value> {
        self.state.last_body.lock().unwrap().clone()
    }

    /// Authorization header of the most recent inference request
    pub fn last_authorization(&self) -> Option<String> {
        self.state.last_authorization.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_inference(
    State(state): State<Arc<MockUpstreamState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);
    *state.last_body.lock().unwrap() = Some(body);

    match &state.response {
        MockResponse::Image(bytes) => {
            (StatusCode::OK, [("content-type", "image/jpeg")], bytes.clone()).into_response()
        }
        MockResponse::ModelLoading { status } => (
            *status,
            Json(serde_json::json!({
                "error": "Model test-image-model is currently loading",
                "estimated_time": 30.0,
            })),
        )
            .into_response(),
        MockResponse::Error { status, body } => (*status, body.clone()).into_response(),
    }
}
