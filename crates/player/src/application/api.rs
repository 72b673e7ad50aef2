//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and decodes JSON bodies into the
//! domain types via serde_json.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiResponse, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    /// GET `path` and decode the body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.raw.get_json(path).await?;
        decode(response.body)
    }

    /// GET `path` without decoding, for callers that care about the status
    pub async fn get_response(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.raw.get_json(path).await
    }
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}
