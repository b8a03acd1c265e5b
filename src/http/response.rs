//! Response rendering.
//!
//! # Responsibilities
//! - Render every failure as `{"error": "<message>"}` with a JSON content type
//! - Render success bodies, degrading to a 500 when serialization fails
//!
//! # Design Decisions
//! - `ApiError` is infallible to render; it is the last stop of every error path
//! - Serialization failures are counted, never retried

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::observability::FailureCounter;

pub const INTERNAL_ERROR: &str = "Internal server error";

/// A terminal failure for the current request.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    challenge: Option<HeaderValue>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            challenge: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    /// 401 carrying a `WWW-Authenticate` challenge.
    pub fn unauthorized(challenge: HeaderValue) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "Unauthorized: Authentication required".to_string(),
            challenge: Some(challenge),
        }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response();
        if let Some(challenge) = self.challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, challenge);
        }
        response
    }
}

/// Serialize `value` as the JSON body of a `status` response.
///
/// A value that cannot be serialized turns into a 500 and is counted in `failures`.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    value: &T,
    failures: &FailureCounter,
) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response(),
        Err(e) => {
            failures.record("serialize");
            tracing::error!(error = %e, "Failed to serialize response body");
            ApiError::internal().into_response()
        }
    }
}
