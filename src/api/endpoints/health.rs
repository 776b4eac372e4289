//! Service banner.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub total_hospitals: usize,
}

/// `GET /`: service banner and catalog size.
pub async fn banner(State(ctx): State<ApiContext>) -> Json<BannerResponse> {
    Json(BannerResponse {
        message: crate::config::APP_NAME,
        status: "running",
        total_hospitals: ctx.catalog.len(),
    })
}
