//! Request identification and body intake.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Expose the ID to handlers and the trace span
//! - Read request bodies under the configured size limit
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Client-supplied IDs are kept and echoed back

use axum::{
    body::{Body, Bytes},
    http::{HeaderName, Request, StatusCode},
};
use tower_http::request_id::{MakeRequestId, RequestId as TowerRequestId};
use tracing::Span;
use uuid::Uuid;

use crate::http::response::ApiError;

pub const X_REQUEST_ID: &str = "x-request-id";

pub fn request_id_header() -> HeaderName {
    HeaderName::from_static(X_REQUEST_ID)
}

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<TowerRequestId> {
        Uuid::new_v4()
            .to_string()
            .parse()
            .ok()
            .map(TowerRequestId::new)
    }
}

/// Access to the request ID attached by the request-id layer.
pub trait RequestIdExt {
    fn request_id(&self) -> &str;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> &str {
        self.headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

/// Span for the `TraceLayer`, tagged with method, path and request ID.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request.request_id(),
    )
}

/// Collect a request body of at most `limit` bytes.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, ApiError> {
    axum::body::to_bytes(body, limit).await.map_err(|e| {
        tracing::warn!(error = %e, limit, "Rejected request body");
        ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large")
    })
}
