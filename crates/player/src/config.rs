//! Player configuration
//!
//! Desktop builds read the process environment (after loading a `.env` file);
//! browser builds bake the same variables in at compile time.

use url::Url;

use crate::ui::ShellKind;

pub const CYOA_API_BASE_URL_VAR: &str = "PARLOR_CYOA_API_BASE_URL";
pub const CONNECTIONS_API_BASE_URL_VAR: &str = "PARLOR_CONNECTIONS_API_BASE_URL";
pub const REQUEST_TIMEOUT_MS_VAR: &str = "PARLOR_REQUEST_TIMEOUT_MS";
pub const SHELL_VAR: &str = "PARLOR_SHELL";

pub const DEFAULT_CYOA_API_BASE_URL: &str = "http://localhost:3000/v1/cyoa";
pub const DEFAULT_CONNECTIONS_API_BASE_URL: &str = "http://localhost:3000/v1/connections";

/// Default request timeout in milliseconds (35 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 35_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub cyoa_api_base_url: String,
    pub connections_api_base_url: String,
    pub request_timeout_ms: u64,
    /// Layout forced by configuration; `None` lets the binary decide
    pub shell: Option<ShellKind>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            cyoa_api_base_url: DEFAULT_CYOA_API_BASE_URL.to_string(),
            connections_api_base_url: DEFAULT_CONNECTIONS_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            shell: None,
        }
    }
}

impl PlayerConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Err(e) = dotenvy::dotenv() {
                tracing::debug!("No .env file loaded: {}", e);
            }
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(|key| {
                match key {
                    CYOA_API_BASE_URL_VAR => option_env!("PARLOR_CYOA_API_BASE_URL"),
                    CONNECTIONS_API_BASE_URL_VAR => option_env!("PARLOR_CONNECTIONS_API_BASE_URL"),
                    REQUEST_TIMEOUT_MS_VAR => option_env!("PARLOR_REQUEST_TIMEOUT_MS"),
                    SHELL_VAR => option_env!("PARLOR_SHELL"),
                    _ => None,
                }
                .map(str::to_string)
            })
        }
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            cyoa_api_base_url: base_url(lookup(CYOA_API_BASE_URL_VAR), CYOA_API_BASE_URL_VAR)
                .unwrap_or(defaults.cyoa_api_base_url),
            connections_api_base_url: base_url(
                lookup(CONNECTIONS_API_BASE_URL_VAR),
                CONNECTIONS_API_BASE_URL_VAR,
            )
            .unwrap_or(defaults.connections_api_base_url),
            request_timeout_ms: lookup(REQUEST_TIMEOUT_MS_VAR)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            shell: lookup(SHELL_VAR).and_then(|s| parse_shell(&s)),
        }
    }
}

fn base_url(value: Option<String>, key: &str) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    match Url::parse(trimmed) {
        Ok(_) => Some(trimmed.trim_end_matches('/').to_string()),
        Err(e) => {
            tracing::warn!("Ignoring invalid {}={:?}: {}", key, trimmed, e);
            None
        }
    }
}

pub fn parse_shell(value: &str) -> Option<ShellKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "desktop" => Some(ShellKind::Desktop),
        "mobile" => Some(ShellKind::Mobile),
        _ => None,
    }
}
