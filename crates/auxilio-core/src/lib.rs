//! # `Auxilio` Core
//!
//! First-aid recommendations by nearest-neighbour matching over a fixed
//! injury catalogue.
//!
//! ## Quick Start
//!
//! ```rust
//! use auxilio_core::Recommender;
//!
//! let recommender = Recommender::builtin();
//! let result = recommender.recommend("Quemadura")?;
//!
//! assert_eq!(result.category, "quemadura");
//! assert_eq!(result.distance_score, 0.0);
//! assert!(result.all_options.contains(&result.recommendation));
//! # Ok::<(), auxilio_core::Error>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(clippy::float_cmp, clippy::unwrap_used, clippy::cast_precision_loss)
)]

pub mod catalogue;
#[cfg(test)]
mod catalogue_tests;
pub mod distance;
pub mod error;
pub mod matcher;
#[cfg(test)]
mod matcher_tests;
pub mod recommender;
pub mod selector;

pub use catalogue::{Catalogue, Category, FeatureVector, FALLBACK_CATEGORY, FEATURE_DIM};
pub use distance::{CpuDistance, DistanceEngine, DistanceMetric};
pub use error::{Error, Result};
pub use matcher::{Matcher, Neighbor};
pub use recommender::{Recommendation, Recommender};
pub use selector::select;
