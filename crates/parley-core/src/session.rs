//! Session store trait.
//!
//! Maps a client correlation key (cookie value or connection id) to the
//! remote session id issued by the chat backend. Implementations live in
//! parley-infra.
//!
//! The trait is synchronous: entries live in process memory for the
//! lifetime of the process, with no eviction and no persistence.

/// Correlation-key to remote-session-id bookkeeping.
///
/// Invariant: at most one live remote session id per key. An entry is only
/// written by the flow handling that client's current message; two rapid
/// messages from the same client race last-writer-wins (see DESIGN.md).
pub trait SessionStore: Send + Sync {
    /// Look up the remote session id for a correlation key.
    fn resolve(&self, key: &str) -> Option<String>;

    /// Record (or overwrite with a fresher) remote session id for a key.
    fn record(&self, key: &str, session_id: String);

    /// Forget a key. No-op if absent.
    fn remove(&self, key: &str);
}
