//! Request and response bodies for the Auxilio REST API.

use auxilio_core::Recommendation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for an unrecognised injury label.
pub const UNKNOWN_CATEGORY_MESSAGE: &str = "Categoría no reconocida";

/// Request body for `POST /recommend`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RecommendRequest {
    /// Injury category label, case-insensitive. Missing means empty.
    #[serde(default)]
    pub word: String,
}

/// Response body for `POST /recommend`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendResponse {
    /// Matched category name.
    pub category: String,
    /// Advice picked for this request.
    pub recommendation: String,
    /// Distance between the query and the matched category.
    pub distance_score: f32,
    /// Every advice string of the matched category.
    pub all_options: Vec<String>,
}

impl From<Recommendation> for RecommendResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            category: r.category,
            recommendation: r.recommendation,
            distance_score: r.distance_score,
            all_options: r.all_options,
        }
    }
}

/// Response body for `GET /categories`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    /// Known category names in catalogue order.
    pub categories: Vec<String>,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` when the server answers.
    pub status: String,
    /// Server crate version.
    pub version: String,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}
