//! Basic-Auth gate for destructive booking operations.

use axum::http::HeaderValue;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use subtle::ConstantTimeEq;

use crate::config::AuthConfig;

/// Validates `Authorization` header values against the configured credential.
#[derive(Clone)]
pub struct AuthGate {
    /// Full header value, e.g. `Basic YWRtaW46cGFzc3dvcmQ=`.
    expected: String,
    challenge: HeaderValue,
}

impl AuthGate {
    pub fn from_config(config: &AuthConfig) -> Self {
        let token = STANDARD.encode(format!("{}:{}", config.username, config.password));
        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{}\"", config.realm))
            .unwrap_or_else(|_| HeaderValue::from_static("Basic realm=\"BookingAPI\""));

        Self {
            expected: format!("Basic {}", token),
            challenge,
        }
    }

    /// True only for the exact header value encoding the configured credential.
    ///
    /// The comparison is constant-time over the expected value's length.
    pub fn validate(&self, header: Option<&str>) -> bool {
        match header {
            Some(value) => value.as_bytes().ct_eq(self.expected.as_bytes()).into(),
            None => false,
        }
    }

    /// Value for the `WWW-Authenticate` header sent with a 401.
    pub fn challenge(&self) -> HeaderValue {
        self.challenge.clone()
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("challenge", &self.challenge)
            .finish_non_exhaustive()
    }
}
