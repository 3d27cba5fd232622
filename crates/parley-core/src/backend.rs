//! ChatBackend trait definition.
//!
//! The abstraction over the remote chat API. Uses RPITIT (native async fn
//! in traits, Rust 2024 edition). The HTTP implementation lives in
//! parley-infra; tests use a recording fake.

use parley_types::error::BackendError;

/// One completed message turn from the remote chat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// The assistant's reply text (raw markdown).
    pub response: String,
    /// Session id echoed or re-issued by the backend. When present it is
    /// always fresher than whatever the caller sent.
    pub chat_id: Option<String>,
}

/// Trait for the remote chat backend (`POST /chat/new`, `POST /chat`).
pub trait ChatBackend: Send + Sync {
    /// Create a new remote chat session and return its opaque id.
    fn create_session(
        &self,
    ) -> impl std::future::Future<Output = Result<String, BackendError>> + Send;

    /// Forward one user message, threading the session id when known.
    fn send_turn(
        &self,
        session_id: Option<&str>,
        message: &str,
        model: &str,
    ) -> impl std::future::Future<Output = Result<ChatReply, BackendError>> + Send;
}
