//! HTTP adapter implementing `RawApiPort`
//!
//! Desktop builds use reqwest; browser builds use gloo-net with a gloo timer
//! raced against the request. One adapter is bound to one API base URL.

use serde_json::Value;

use crate::ports::outbound::{ApiError, ApiResponse, RawApiPort};

/// JSON-over-HTTP adapter for one remote API
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
    timeout_ms: u64,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_millis(timeout_ms))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

/// Append `path` to `base` with exactly one `/` between them
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Turn a raw response into an `ApiResponse` or an `ApiError`
pub(crate) fn into_api_response(status: u16, text: &str) -> Result<ApiResponse, ApiError> {
    if !(200..300).contains(&status) {
        let message = if text.trim().is_empty() {
            format!("status {status}")
        } else {
            text.trim().to_string()
        };
        return Err(ApiError::HttpError { status, message });
    }

    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text).map_err(|e| ApiError::ParseError(e.to_string()))?
    };
    Ok(ApiResponse::new(status, body))
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                ApiError::Timeout(self.timeout_ms)
            } else {
                ApiError::RequestFailed(e.to_string())
            }
        };

        let response = self.client.get(&url).send().await.map_err(map_err)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(map_err)?;
        into_api_response(status, &text)
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<ApiResponse, ApiError> {
        use futures_util::future::{select, Either};

        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let request = gloo_net::http::Request::get(&url).send();
        let timeout =
            gloo_timers::future::TimeoutFuture::new(u32::try_from(self.timeout_ms).unwrap_or(u32::MAX));
        futures_util::pin_mut!(request);
        futures_util::pin_mut!(timeout);

        let response = match select(request, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::RequestFailed(e.to_string()))?,
            Either::Right(_) => return Err(ApiError::Timeout(self.timeout_ms)),
        };

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        into_api_response(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn join_url_normalises_slashes() {
        assert_eq!(join_url("https://api.test", "/games"), "https://api.test/games");
        assert_eq!(join_url("https://api.test/", "/games"), "https://api.test/games");
        assert_eq!(join_url("https://api.test/v1/", "games/1"), "https://api.test/v1/games/1");
    }

    #[test]
    fn success_body_is_decoded() {
        let response = into_api_response(200, r#"{"gameIds":["2025-01-15"]}"#).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, json!({ "gameIds": ["2025-01-15"] }));
    }

    #[test]
    fn empty_accepted_body_is_null() {
        let response = into_api_response(202, "").unwrap();
        assert!(response.is_accepted());
        assert_eq!(response.body, Value::Null);
    }

    #[test]
    fn non_success_status_is_an_error() {
        let err = into_api_response(404, "Not Found").unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 404,
                message: "Not Found".to_string()
            }
        );

        let err = into_api_response(500, "").unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = into_api_response(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[test]
    fn adapter_keeps_base_url() {
        let adapter = ApiAdapter::new("https://cyoa.test", 35_000);
        assert_eq!(adapter.base_url(), "https://cyoa.test");
        assert_eq!(adapter.url("/games/g1"), "https://cyoa.test/games/g1");
    }
}
