//! First-aid recommendation handler.

use auxilio_core::Error;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::types::{ErrorResponse, RecommendRequest, RecommendResponse};
use crate::AppState;

use super::helpers::error_response;

/// Recommend first aid for an injury category label.
///
/// The label is matched case-insensitively against the catalogue; one of the
/// matched category's recommendations is picked at random.
#[utoipa::path(
    post,
    path = "/recommend",
    tag = "recommend",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Matched category and recommendation", body = RecommendResponse),
        (status = 400, description = "Unrecognised category", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendRequest>,
) -> impl IntoResponse {
    state.metrics.inc_requests();

    match state.recommender.recommend(&req.word) {
        Ok(result) => {
            state.metrics.record_match(&result.category);
            Json(RecommendResponse::from(result)).into_response()
        }
        Err(e) => {
            if matches!(e, Error::UnknownCategory(_)) {
                state.metrics.inc_unknown_category();
            } else {
                state.metrics.inc_internal_errors();
            }
            error_response("Recommend", &e).into_response()
        }
    }
}
