//! Infrastructure implementations for Parley.
//!
//! Concrete implementations of the parley-core trait seams:
//! the reqwest-based [`backend::HttpChatBackend`], the dashmap-backed
//! [`session::MemorySessionStore`], and the config loader.

pub mod backend;
pub mod config;
pub mod session;
