//! In-memory session store on a concurrent map.
//!
//! Entries live for the lifetime of the process; there is no eviction and
//! no capacity bound. Two in-flight turns for the same key race
//! last-writer-wins on `record` -- no per-key serialization is attempted
//! (see DESIGN.md).

use dashmap::DashMap;

use parley_core::session::SessionStore;

/// Process-local correlation-key to remote-session-id map.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries (diagnostics only).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn resolve(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn record(&self, key: &str, session_id: String) {
        self.entries.insert(key.to_string(), session_id);
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}
