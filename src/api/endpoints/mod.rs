//! API endpoint handlers.
//!
//! Handlers are thin: parse input, call into `hospitals` / `pipeline`,
//! wrap the result in JSON.

pub mod chat;
pub mod health;
pub mod hospitals;
pub mod stats;
