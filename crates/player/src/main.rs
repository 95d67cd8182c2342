//! Mucit Evreni player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mucit_player::application::api::RemoteDataClient;
use mucit_player::config::AppConfig;
use mucit_player::infrastructure::{HttpApiAdapter, ResilientApi};
use mucit_player::ports::outbound::{PlatformPort, RawApiPort, RemoteDataPort};
use mucit_player::ui::ShellKind;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mucit_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Mucit Evreni");

    let config = AppConfig::load();
    tracing::debug!(api = %config.api_base_url, "Configuration loaded");

    // Platform
    let platform = mucit_player::infrastructure::platform::create_platform(&config);
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // Remote store: HTTP -> retry -> typed client
    let http: Arc<dyn RawApiPort> = Arc::new(HttpApiAdapter::new(config.api_base_url.clone()));
    let resilient: Arc<dyn RawApiPort> = Arc::new(ResilientApi::new(http, config.retry.clone()));
    let remote: Arc<dyn RemoteDataPort> = Arc::new(RemoteDataClient::new(resilient));

    let services = mucit_player::ui::presentation::Services::new(
        remote,
        platform.clone(),
        &config.admin_passcode_sha256,
    );

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
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
        {
            std::env::var("MUCIT_SHELL")
                .ok()
                .and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
                    "desktop" => Some(ShellKind::Desktop),
                    "mobile" => Some(ShellKind::Mobile),
                    _ => None,
                })
                .unwrap_or_default()
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(platform)
        .with_context(shell)
        .with_context(services)
        .launch(mucit_player::ui::app);
}
