//! API port types shared by the raw HTTP boundary and the typed wrapper

use serde_json::Value;
use thiserror::Error;

/// Errors raised at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection dropped
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u64),
}

/// A successful (2xx) response: status code plus decoded JSON body
///
/// Bodies that are empty or not JSON decode to `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub const OK: u16 = 200;
    pub const ACCEPTED: u16 = 202;

    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(Self::OK, body)
    }

    /// `202 Accepted`: the server took the request but the resource is not ready
    pub fn is_accepted(&self) -> bool {
        self.status == Self::ACCEPTED
    }
}
