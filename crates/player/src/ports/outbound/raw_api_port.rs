//! Raw API Port - Object-safe HTTP boundary
//!
//! `RawApiPort` is the object-safe boundary implemented by adapters, so the
//! composition root can store it behind `Arc<dyn ...>`. The application
//! layer wraps it in a typed `Api` that does the serde_json conversions.
//!
//! Each adapter instance is bound to one base URL; `path` is appended to it.

use super::{ApiError, ApiResponse};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// GET `path`; non-2xx statuses come back as `ApiError::HttpError`.
    async fn get_json(&self, path: &str) -> Result<ApiResponse, ApiError>;
}
