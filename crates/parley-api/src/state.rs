//! Application state wiring the relay together.
//!
//! AppState holds the one service both transports share: the relay, with
//! its generics pinned to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parley_core::relay::RelayService;
use parley_infra::backend::HttpChatBackend;
use parley_infra::config::{load_config, resolve_config_path};
use parley_infra::session::MemorySessionStore;

/// Concrete type alias for the relay generics pinned to infra implementations.
pub type ConcreteRelayService = RelayService<HttpChatBackend, MemorySessionStore>;

/// Shared application state.
///
/// Used by both the CLI chat loop and the WebSocket handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ConcreteRelayService>,
}

impl AppState {
    /// Initialize the application state: load config, wire the relay.
    pub async fn init(
        config_path: Option<PathBuf>,
        api_base_url: Option<String>,
    ) -> anyhow::Result<Self> {
        let path = config_path.unwrap_or_else(resolve_config_path);
        let mut config = load_config(&path).await;

        // CLI/env override beats the config file.
        if let Some(url) = api_base_url {
            config.api_base_url = url;
        }

        let backend = HttpChatBackend::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        );
        let relay = RelayService::new(backend, MemorySessionStore::new(), config);

        Ok(Self {
            relay: Arc::new(relay),
        })
    }
}
