//! Relay logic for Parley.
//!
//! This crate holds the message-relay core and its two trait seams:
//! [`backend::ChatBackend`] for the remote chat API and
//! [`session::SessionStore`] for correlation-key bookkeeping.
//! Implementations live in parley-infra; this crate performs no I/O of
//! its own.

pub mod backend;
pub mod image;
pub mod relay;
pub mod render;
pub mod session;
