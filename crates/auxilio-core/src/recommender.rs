//! Label-to-recommendation orchestration.
//!
//! [`Recommender`] owns the catalogue and the matcher fitted on it. Both are
//! built once at startup and only read afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalogue::{to_query, Catalogue};
use crate::error::{Error, Result};
use crate::matcher::Matcher;
use crate::selector::select;

/// Result of a recommendation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Matched category name.
    pub category: String,
    /// The advice string picked for this call.
    pub recommendation: String,
    /// Distance between the query vector and the matched category.
    pub distance_score: f32,
    /// Every recommendation of the matched category, in definition order.
    pub all_options: Vec<String>,
}

/// Nearest-neighbour recommender over a fixed catalogue.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalogue: Catalogue,
    matcher: Matcher,
}

impl Recommender {
    /// Creates a recommender and fits its matcher on `catalogue`.
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        let matcher = Matcher::from_catalogue(&catalogue);
        tracing::info!(
            categories = catalogue.len(),
            dimension = matcher.dimension(),
            "Recommender ready"
        );
        Self { catalogue, matcher }
    }

    /// Recommender over the built-in catalogue.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Catalogue::builtin())
    }

    /// The catalogue this recommender searches.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Recommends first aid for `label` using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCategory`] if `label` (lowercased) is not in
    /// the catalogue. Any other error is an invariant violation.
    pub fn recommend(&self, label: &str) -> Result<Recommendation> {
        self.recommend_with_rng(label, &mut rand::thread_rng())
    }

    /// Recommends first aid for `label`, drawing from `rng`.
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        label: &str,
        rng: &mut R,
    ) -> Result<Recommendation> {
        let label = label.to_lowercase();
        let vector = self.catalogue.lookup_vector(&label)?;

        // The queried category wins ties against earlier rows sharing its vector.
        let neighbor = self.matcher.search_preferring(&to_query(&vector), &label)?;

        let options = self.catalogue.recommendations_for(&neighbor.name)?;
        let choice = select(options, rng)
            .map_err(|_| Error::EmptyRecommendationSet(neighbor.name.clone()))?;

        tracing::debug!(
            label = %label,
            category = %neighbor.name,
            distance = neighbor.distance,
            "Matched category"
        );

        Ok(Recommendation {
            category: neighbor.name,
            recommendation: choice.to_string(),
            distance_score: neighbor.distance,
            all_options: options.to_vec(),
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::builtin()
    }
}
