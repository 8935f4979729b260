//! Catalogue listing handler.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::types::CategoriesResponse;
use crate::AppState;

/// List known injury categories in catalogue order.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "recommend",
    responses(
        (status = 200, description = "Known categories", body = CategoriesResponse)
    )
)]
pub async fn list_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(CategoriesResponse {
        categories: state
            .recommender
            .catalogue()
            .names()
            .map(String::from)
            .collect(),
    })
}
