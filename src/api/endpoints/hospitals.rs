//! Hospital catalog endpoints.
//!
//! Four endpoints:
//! - `GET /api/hospitals`: full catalog
//! - `GET /api/hospitals/:id`: one hospital, or a not-found marker
//! - `GET /api/hospitals/nearby`: within a radius, closest first
//! - `GET /api/hospitals/filter`: bed type / availability / emergency

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, HospitalList};
use crate::config::DEFAULT_NEARBY_RADIUS;
use crate::geo::Coordinates;
use crate::hospitals::{self, FilterCriteria};

/// `GET /api/hospitals`: the whole catalog in source order.
pub async fn list(State(ctx): State<ApiContext>) -> Response {
    let all: Vec<_> = ctx.catalog.hospitals().iter().collect();
    Json(HospitalList::new(all)).into_response()
}

#[derive(Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
}

/// `GET /api/hospitals/:id`: a miss answers 200 with `{"error": "Hospital not found"}`.
pub async fn detail(
    State(ctx): State<ApiContext>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;

    let response = match hospitals::find_by_id(&ctx.catalog, id) {
        Some(hospital) => Json(hospital).into_response(),
        None => Json(NotFoundResponse {
            error: "Hospital not found",
        })
        .into_response(),
    };
    Ok(response)
}

#[derive(Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
}

/// `GET /api/hospitals/nearby?lat=&lng=&radius=`: radius defaults to 25.
pub async fn nearby(
    State(ctx): State<ApiContext>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;

    let lat = query
        .lat
        .ok_or_else(|| ApiError::BadRequest("lat is required".into()))?;
    let lng = query
        .lng
        .ok_or_else(|| ApiError::BadRequest("lng is required".into()))?;
    let origin = Coordinates { lat, lng };
    if !origin.is_finite() {
        return Err(ApiError::BadRequest("lat and lng must be finite numbers".into()));
    }

    let radius = query.radius.unwrap_or(DEFAULT_NEARBY_RADIUS);
    if !radius.is_finite() || radius < 0.0 {
        return Err(ApiError::BadRequest(
            "radius must be a non-negative number".into(),
        ));
    }

    let hits = hospitals::nearby(&ctx.catalog, origin, radius);
    Ok(Json(HospitalList::new(hits)).into_response())
}

#[derive(Deserialize)]
pub struct FilterQuery {
    #[serde(rename = "bedType")]
    pub bed_type: Option<String>,
    pub available: Option<String>,
    pub emergency: Option<String>,
}

/// `GET /api/hospitals/filter?bedType=&available=&emergency=`: all optional.
pub async fn filter(
    State(ctx): State<ApiContext>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;

    let criteria = FilterCriteria {
        bed_type: query.bed_type,
        available: parse_flag("available", query.available.as_deref())?,
        emergency: parse_flag("emergency", query.emergency.as_deref())?,
    };

    let matched = hospitals::filter(&ctx.catalog, &criteria);
    Ok(Json(HospitalList::new(matched)).into_response())
}

/// Parse a boolean query flag. Accepts true/false, 1/0, yes/no, on/off.
fn parse_flag(name: &str, value: Option<&str>) -> Result<Option<bool>, ApiError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(ApiError::BadRequest(format!(
            "{name} must be a boolean, got '{raw}'"
        ))),
    }
}
