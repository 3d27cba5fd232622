//! Shared domain types for Parley.
//!
//! This crate contains the types used across the relay: the transient
//! chat message shape, the relay configuration, and the backend error type.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
