//! Distance computation for nearest-neighbour matching.
//!
//! The matcher is written against the [`DistanceEngine`] trait so the metric
//! can be swapped without touching the search loop. Only scalar CPU code is
//! provided: catalogue vectors have three components.

use serde::{Deserialize, Serialize};

/// Distance metric used to compare feature vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Plain Euclidean (L2) distance.
    #[default]
    Euclidean,
    /// Squared Euclidean distance. Same ordering as `Euclidean`, no `sqrt`.
    SquaredEuclidean,
}

/// Trait for distance computation engines.
pub trait DistanceEngine: Send + Sync {
    /// Computes distance between two vectors of equal length.
    fn distance(&self, a: &[f32], b: &[f32]) -> f32;

    /// Batch distance computation (one query vs many candidates).
    ///
    /// Returns distances in the same order as candidates.
    fn batch_distance(&self, query: &[f32], candidates: &[&[f32]]) -> Vec<f32> {
        candidates.iter().map(|c| self.distance(query, c)).collect()
    }

    /// Returns the metric type for this engine.
    fn metric(&self) -> DistanceMetric;
}

/// CPU scalar distance computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuDistance {
    metric: DistanceMetric,
}

impl CpuDistance {
    /// Creates a new CPU distance engine with the given metric.
    #[must_use]
    pub fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }
}

impl DistanceEngine for CpuDistance {
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        match self.metric {
            DistanceMetric::Euclidean => squared_l2_scalar(a, b).sqrt(),
            DistanceMetric::SquaredEuclidean => squared_l2_scalar(a, b),
        }
    }

    fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

#[inline]
fn squared_l2_scalar(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}
