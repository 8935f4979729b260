//! Error types for auxilio-core.

use thiserror::Error;

/// Recommendation engine error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The label is not a catalogue key.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A catalogue or matcher was built with zero entries.
    #[error("Catalogue is empty")]
    EmptyCatalogue,

    /// A category was defined, or a selection attempted, without recommendations.
    #[error("No recommendations available for category '{0}'")]
    EmptyRecommendationSet(String),

    /// Two categories share the same name after lowercasing.
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    /// Query vector dimension does not match the fitted rows.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the fitted rows.
        expected: usize,
        /// Dimension of the query.
        actual: usize,
    },
}

impl Error {
    /// Returns true when the error was caused by caller input rather than a
    /// construction defect.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory(_) | Self::DimensionMismatch { .. }
        )
    }
}

/// Result type alias for recommendation operations.
pub type Result<T> = std::result::Result<T, Error>;
