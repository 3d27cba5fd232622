//! HTTP layer for Parley.
//!
//! Axum-based server exposing the bootstrap page, the WebSocket transport,
//! and a health check, with CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
