//! HTTP surface of the hospital finder.
//!
//! Catalog queries and the chat recommendation are exposed under `/api/`,
//! with a plain banner at `/`. `api_router()` returns a `Router` that can
//! be mounted on any axum server instance; `start_api_server()` binds and
//! serves it in the background.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer, ApiSession};
pub use types::ApiContext;
