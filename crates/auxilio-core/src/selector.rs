//! Uniform random choice of one recommendation.
//!
//! The random source is always supplied by the caller. Production code passes
//! `rand::thread_rng()`; tests pass a seeded `StdRng`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// Picks one option uniformly at random.
///
/// # Errors
///
/// Returns [`Error::EmptyRecommendationSet`] if `options` is empty. A
/// validated catalogue never produces an empty list.
pub fn select<'a, R: Rng + ?Sized>(options: &'a [String], rng: &mut R) -> Result<&'a str> {
    options
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| Error::EmptyRecommendationSet(String::new()))
}
