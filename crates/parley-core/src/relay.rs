//! Relay service: forward a client message to the chat backend and return
//! the rendered reply.
//!
//! `RelayService` is generic over [`ChatBackend`] and [`SessionStore`] so
//! transports and tests can supply their own implementations. One call to
//! [`RelayService::handle`] performs at most two outbound backend calls
//! (session creation plus the message turn) and one store write on success.
//! Backend failures leave the store untouched and are never retried.

use tracing::{debug, info};

use parley_types::config::RelayConfig;
use parley_types::error::BackendError;

use crate::backend::ChatBackend;
use crate::image;
use crate::render;
use crate::session::SessionStore;

/// Outcome of relaying one non-empty message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayReply {
    /// A reply from the chat backend: rendered HTML for the web transport,
    /// raw markdown for terminal rendering.
    Chat { html: String, markdown: String },
    /// A synthesized image link; no backend call was made.
    Image { html: String, url: String },
}

/// Forwards user messages to the remote chat backend, tracking the remote
/// session id per correlation key.
pub struct RelayService<B: ChatBackend, S: SessionStore> {
    backend: B,
    store: S,
    config: RelayConfig,
}

impl<B: ChatBackend, S: SessionStore> RelayService<B, S> {
    /// Create a relay over the given backend and session store.
    pub fn new(backend: B, store: S, config: RelayConfig) -> Self {
        Self {
            backend,
            store,
            config,
        }
    }

    /// Relay one raw client message.
    ///
    /// - Empty or whitespace-only input is a no-op (`Ok(None)`), no error.
    /// - `image:`-prefixed input short-circuits to URL synthesis; the
    ///   backend is not contacted and the store is not touched.
    /// - Otherwise the correlation key is resolved to a remote session id
    ///   (creating one first when absent), the model hint is validated
    ///   against the allow-list, and the turn is forwarded. On success the
    ///   freshest session id is recorded; on failure the store is unchanged.
    pub async fn handle(
        &self,
        key: &str,
        raw: &str,
        model_hint: Option<&str>,
    ) -> Result<Option<RelayReply>, BackendError> {
        let message = raw.trim();
        if message.is_empty() {
            return Ok(None);
        }

        if let Some(prompt) = image::image_prompt(message) {
            let url = image::image_url(&self.config.image_url_base, prompt);
            let html = image::image_fragment(&url);
            debug!(%url, "Synthesized image link");
            return Ok(Some(RelayReply::Image { html, url }));
        }

        let session_id = match self.store.resolve(key) {
            Some(id) => id,
            None => {
                let id = self.backend.create_session().await?;
                info!(session_id = %id, "Created remote chat session");
                id
            }
        };

        let model = self.config.resolve_model(model_hint);
        let reply = self
            .backend
            .send_turn(Some(&session_id), message, model)
            .await?;
        debug!(session_id = %session_id, model, "Message turn completed");

        // The backend may re-issue the session id; always prefer the latest.
        let latest = reply.chat_id.unwrap_or(session_id);
        self.store.record(key, latest);

        let html = render::markdown_to_html(&reply.response);
        Ok(Some(RelayReply::Chat {
            html,
            markdown: reply.response,
        }))
    }

    /// The configuration this relay was built with.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Whether a live remote session is recorded for this key.
    pub fn has_session(&self, key: &str) -> bool {
        self.store.resolve(key).is_some()
    }

    /// Eagerly create a remote session whose id doubles as the correlation
    /// key (the page-load bootstrap shape: the id is handed to the client
    /// as a cookie).
    pub async fn open_session(&self) -> Result<String, BackendError> {
        let id = self.backend.create_session().await?;
        self.store.record(&id, id.clone());
        info!(session_id = %id, "Opened cookie-scoped chat session");
        Ok(id)
    }

    /// Ensure a remote session exists for this key, creating one if absent.
    pub async fn ensure_session(&self, key: &str) -> Result<String, BackendError> {
        if let Some(id) = self.store.resolve(key) {
            return Ok(id);
        }
        let id = self.backend.create_session().await?;
        self.store.record(key, id.clone());
        info!(session_id = %id, "Created remote chat session");
        Ok(id)
    }

    /// Drop any existing session for this key and start a fresh one.
    ///
    /// Backs the `new_chat` client event. On failure the old entry is
    /// already gone; the next message will create a session lazily.
    pub async fn reset_session(&self, key: &str) -> Result<String, BackendError> {
        self.store.remove(key);
        let id = self.backend.create_session().await?;
        self.store.record(key, id.clone());
        info!(session_id = %id, "Reset chat session");
        Ok(id)
    }

    /// Forget the session entry for a key (connection-scoped keys on
    /// disconnect).
    pub fn forget(&self, key: &str) {
        self.store.remove(key);
    }
}
