//! Shared handler helpers for the Auxilio REST API.
//!
//! Maps core errors onto HTTP responses so every handler reports them the
//! same way.

use auxilio_core::Error;
use axum::{http::StatusCode, Json};

use crate::types::{ErrorResponse, UNKNOWN_CATEGORY_MESSAGE};

/// 400 response for a label that is not in the catalogue.
#[must_use]
pub fn unknown_category() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: UNKNOWN_CATEGORY_MESSAGE.to_string(),
        }),
    )
}

/// Build an internal server error response without leaking implementation details.
///
/// Logs the full error server-side via `tracing::error!` and returns a generic
/// message to the client.
pub fn internal_error(
    context: &str,
    err: &dyn std::fmt::Display,
) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(%context, error = %err, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("{context}: internal error"),
        }),
    )
}

/// Maps a core error to its HTTP response.
///
/// Unknown labels are user errors (400); everything else breaks a catalogue
/// invariant and is reported as 500.
pub fn error_response(context: &str, err: &Error) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        Error::UnknownCategory(label) => {
            tracing::debug!(%label, "Rejected unknown category");
            unknown_category()
        }
        Error::DimensionMismatch { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        ),
        _ => internal_error(context, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_body() {
        let (status, Json(body)) = error_response("Recommend", &Error::UnknownCategory("x".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Categoría no reconocida");
    }

    #[test]
    fn test_invariant_violation_is_internal() {
        let (status, Json(body)) = error_response("Recommend", &Error::EmptyCatalogue);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Recommend: internal error");
    }

    #[test]
    fn test_internal_error_does_not_leak_details() {
        let detail = "No recommendations available for category 'secret'";
        let (status, Json(body)) = internal_error("Recommend", &detail);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("internal error"));
        assert!(!body.error.contains("secret"));
    }
}
