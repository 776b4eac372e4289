//! Aggregate catalog statistics.

use axum::extract::State;
use axum::Json;

use crate::api::types::ApiContext;
use crate::hospitals::{self, CatalogStats};

/// `GET /api/stats`: hospital count, available beds, mean wait, ER count.
pub async fn summary(State(ctx): State<ApiContext>) -> Json<CatalogStats> {
    Json(hospitals::stats(&ctx.catalog))
}
