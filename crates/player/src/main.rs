//! Parlor Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parlor_player::application::api::Api;
use parlor_player::config::PlayerConfig;
use parlor_player::infrastructure::http_client::ApiAdapter;
use parlor_player::ports::outbound::PlatformPort;
use parlor_player::ui::ShellKind;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parlor_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Parlor Player");

    let config = PlayerConfig::from_env();
    tracing::info!(
        cyoa = %config.cyoa_api_base_url,
        connections = %config.connections_api_base_url,
        timeout_ms = config.request_timeout_ms,
        "Loaded configuration"
    );

    // Platform
    let platform = parlor_player::infrastructure::platform::create_platform();
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // HTTP: one adapter per remote service
    let cyoa_api = Api::new(Arc::new(ApiAdapter::new(
        config.cyoa_api_base_url.clone(),
        config.request_timeout_ms,
    )));
    let connections_api = Api::new(Arc::new(ApiAdapter::new(
        config.connections_api_base_url.clone(),
        config.request_timeout_ms,
    )));

    // Shell kind (desktop vs mobile layout)
    let shell = config.shell.unwrap_or_else(detect_shell);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = match load_player_css() {
            Ok(css) => css,
            Err(e) => {
                tracing::warn!("Falling back to unstyled UI: {:#}", e);
                String::new()
            }
        };
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(parlor_player::ui::presentation::Services::new(
            cyoa_api,
            connections_api,
        ))
        .launch(parlor_player::ui::app);
}

#[cfg(target_arch = "wasm32")]
fn detect_shell() -> ShellKind {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);

    if width < 768.0 {
        ShellKind::Mobile
    } else {
        ShellKind::Desktop
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_shell() -> ShellKind {
    ShellKind::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> anyhow::Result<String> {
    use anyhow::Context;

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/output.css");
    std::fs::read_to_string(&css_path)
        .with_context(|| format!("reading stylesheet {}", css_path.display()))
}
