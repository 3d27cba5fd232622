//! Terminal transport for Parley.

pub mod chat;
