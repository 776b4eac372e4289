//! Chat recommendation endpoint.
//!
//! `POST /api/chat` runs the recommendation pipeline on the user's message.
//! A pipeline failure never becomes an HTTP error: the client gets a
//! degraded body with urgency `"unknown"`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize, Serializer};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::HospitalRecord;
use crate::pipeline;

pub const DEGRADED_REASONING: &str = "Agent system unavailable";
pub const DEGRADED_URGENCY: &str = "unknown";

#[derive(Deserialize)]
pub struct ChatRequest {
    /// A missing message is treated as empty.
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(serialize_with = "hospital_or_empty")]
    pub hospital: Option<&'a HospitalRecord>,
    pub reasoning: String,
    pub urgency: &'static str,
}

impl ChatResponse<'_> {
    fn degraded(error: String) -> Self {
        Self {
            error: Some(error),
            hospital: None,
            reasoning: DEGRADED_REASONING.to_string(),
            urgency: DEGRADED_URGENCY,
        }
    }
}

/// Serialize a missing hospital as `{}` rather than `null`.
fn hospital_or_empty<S>(
    hospital: &Option<&HospitalRecord>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;

    match hospital {
        Some(h) => h.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// `POST /api/chat`: recommend one hospital for a symptom description.
pub async fn recommend(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let response = match pipeline::run_pipeline(&ctx.catalog, &req.message) {
        Ok(outcome) => ChatResponse {
            error: None,
            hospital: outcome.recommendation.hospital,
            reasoning: outcome.recommendation.reasoning,
            urgency: outcome.urgency.as_str(),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Recommendation pipeline failed");
            ChatResponse::degraded(e.to_string())
        }
    };

    Ok(Json(response).into_response())
}
