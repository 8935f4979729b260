//! Exact nearest-neighbour search over catalogue vectors.
//!
//! A [`Matcher`] is fitted once from `(name, vector)` rows and then queried
//! any number of times through `&self`. The scan is brute force: the
//! catalogue has a handful of rows.
//!
//! # Tie-breaking
//!
//! Rows are scanned in fit order and a row replaces the current best only on
//! a strictly smaller distance, so the first row at the minimum distance wins.
//! [`Matcher::search_preferring`] lets a caller name the row that should win
//! among equally distant rows instead.

use crate::catalogue::{to_query, Catalogue};
use crate::distance::{CpuDistance, DistanceEngine};
use crate::error::{Error, Result};

/// Nearest row returned by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Position of the row in fit order.
    pub index: usize,
    /// Row name.
    pub name: String,
    /// Distance from the query under the matcher's metric.
    pub distance: f32,
}

#[derive(Debug, Clone)]
struct Row {
    name: String,
    vector: Vec<f32>,
}

/// Fitted nearest-neighbour search structure.
#[derive(Debug, Clone)]
pub struct Matcher<E: DistanceEngine = CpuDistance> {
    engine: E,
    rows: Vec<Row>,
    dimension: usize,
}

impl Matcher<CpuDistance> {
    /// Fits a Euclidean matcher over `rows`, keeping their order.
    pub fn fit<N, V>(rows: impl IntoIterator<Item = (N, V)>) -> Result<Self>
    where
        N: Into<String>,
        V: Into<Vec<f32>>,
    {
        Self::with_engine(CpuDistance::default(), rows)
    }

    /// Fits a Euclidean matcher over every catalogue entry in definition order.
    #[must_use]
    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        let rows = catalogue
            .list_categories()
            .map(|(name, features)| Row {
                name: name.to_string(),
                vector: to_query(features).to_vec(),
            })
            .collect::<Vec<_>>();
        let dimension = rows.first().map_or(0, |r| r.vector.len());
        Self {
            engine: CpuDistance::default(),
            rows,
            dimension,
        }
    }
}

impl<E: DistanceEngine> Matcher<E> {
    /// Fits a matcher with a custom distance engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if rows differ in length.
    pub fn with_engine<N, V>(engine: E, rows: impl IntoIterator<Item = (N, V)>) -> Result<Self>
    where
        N: Into<String>,
        V: Into<Vec<f32>>,
    {
        let rows: Vec<Row> = rows
            .into_iter()
            .map(|(name, vector)| Row {
                name: name.into(),
                vector: vector.into(),
            })
            .collect();

        let dimension = rows.first().map_or(0, |r| r.vector.len());
        if let Some(bad) = rows.iter().find(|r| r.vector.len() != dimension) {
            return Err(Error::DimensionMismatch {
                expected: dimension,
                actual: bad.vector.len(),
            });
        }

        Ok(Self {
            engine,
            rows,
            dimension,
        })
    }

    /// Returns the row closest to `query`; the first in fit order on ties.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCatalogue`] if the matcher has no rows
    /// - [`Error::DimensionMismatch`] if `query` has the wrong length
    pub fn search(&self, query: &[f32]) -> Result<Neighbor> {
        self.nearest(query, None)
    }

    /// Like [`search`](Self::search), but when the row named `preferred` is
    /// among the rows tied at the minimum distance, that row is returned.
    pub fn search_preferring(&self, query: &[f32], preferred: &str) -> Result<Neighbor> {
        self.nearest(query, Some(preferred))
    }

    /// Number of fitted rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the matcher has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of every fitted vector (0 when empty).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Distance engine in use.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn nearest(&self, query: &[f32], preferred: Option<&str>) -> Result<Neighbor> {
        if self.rows.is_empty() {
            return Err(Error::EmptyCatalogue);
        }
        if query.len() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let candidates: Vec<&[f32]> = self.rows.iter().map(|r| r.vector.as_slice()).collect();
        let distances = self.engine.batch_distance(query, &candidates);

        let mut best = 0;
        for (i, &d) in distances.iter().enumerate().skip(1) {
            if d < distances[best] {
                best = i;
            }
        }

        if let Some(preferred) = preferred {
            if let Some(i) = self
                .rows
                .iter()
                .position(|r| r.name == preferred)
                .filter(|&i| distances[i] <= distances[best])
            {
                best = i;
            }
        }

        Ok(Neighbor {
            index: best,
            name: self.rows[best].name.clone(),
            distance: distances[best],
        })
    }
}
