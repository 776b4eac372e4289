//! HTTP router.
//!
//! Middleware stack (outermost → innermost):
//! 1. CORS → 2. Access log → Handler

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::catalog::Catalog;

/// Build the API router over a read-only catalog.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7). Static
/// segments (`nearby`, `filter`) win over `:id`.
pub fn api_router(catalog: Arc<Catalog>, cors_origins: &[String]) -> Router {
    let ctx = ApiContext::new(catalog);

    Router::new()
        .route("/", get(endpoints::health::banner))
        .route("/api/hospitals", get(endpoints::hospitals::list))
        .route("/api/hospitals/nearby", get(endpoints::hospitals::nearby))
        .route("/api/hospitals/filter", get(endpoints::hospitals::filter))
        .route("/api/hospitals/:id", get(endpoints::hospitals::detail))
        .route("/api/chat", post(endpoints::chat::recommend))
        .route("/api/stats", get(endpoints::stats::summary))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::access_log::log_access))
        .layer(middleware::cors::cors_layer(cors_origins))
}
