//! Tests for the `matcher` module.

use super::matcher::*;
use crate::catalogue::Catalogue;
use crate::distance::{CpuDistance, DistanceEngine, DistanceMetric};
use crate::error::Error;

fn builtin_matcher() -> Matcher {
    Matcher::from_catalogue(&Catalogue::builtin())
}

#[test]
fn test_every_catalogue_vector_matches_at_zero_distance() {
    let catalogue = Catalogue::builtin();
    let matcher = builtin_matcher();

    for category in catalogue.iter() {
        let hit = matcher.search(&category.features_f32()).unwrap();
        assert!(hit.distance.abs() < f32::EPSILON, "{}", category.name);
        assert_eq!(
            catalogue.lookup_vector(&hit.name).unwrap(),
            category.features,
            "{} matched a row with a different vector",
            category.name
        );
    }
}

#[test]
fn test_tie_break_returns_first_in_definition_order() {
    let matcher = builtin_matcher();
    for _ in 0..100 {
        let hit = matcher.search(&[2.0, 2.0, 1.0]).unwrap();
        assert_eq!(hit.name, "raspon");
        assert_eq!(hit.index, 3);
    }
    assert_eq!(matcher.search(&[3.0, 3.0, 2.0]).unwrap().name, "corte");
}

#[test]
fn test_search_preferring_resolves_ties_to_preferred_row() {
    let matcher = builtin_matcher();

    let hit = matcher.search_preferring(&[2.0, 2.0, 1.0], "moreton").unwrap();
    assert_eq!(hit.name, "moreton");
    assert_eq!(hit.index, 4);
    assert!(hit.distance.abs() < f32::EPSILON);

    let hit = matcher.search_preferring(&[3.0, 3.0, 2.0], "picadura").unwrap();
    assert_eq!(hit.name, "picadura");
}

#[test]
fn test_search_preferring_ignores_preference_when_not_tied() {
    let matcher = builtin_matcher();
    let hit = matcher
        .search_preferring(&[2.0, 2.0, 1.0], "atragantamiento")
        .unwrap();
    assert_eq!(hit.name, "raspon");

    let hit = matcher.search_preferring(&[0.0, 0.0, 0.0], "missing").unwrap();
    assert_eq!(hit.name, "otro");
}

#[test]
fn test_non_exact_query_finds_closest_row() {
    let matcher = builtin_matcher();

    let hit = matcher.search(&[4.2, 3.9, 3.1]).unwrap();
    assert_eq!(hit.name, "quemadura");
    assert!(hit.distance > 0.0);

    let hit = matcher.search(&[5.0, 5.0, 4.0]).unwrap();
    assert_eq!(hit.name, "atragantamiento");
    assert!((hit.distance - 1.0).abs() < 1e-5);
}

#[test]
fn test_empty_matcher_reports_empty_catalogue() {
    let matcher = Matcher::fit(Vec::<(String, Vec<f32>)>::new()).unwrap();
    assert!(matcher.is_empty());
    assert_eq!(matcher.search(&[0.0, 0.0, 0.0]), Err(Error::EmptyCatalogue));
}

#[test]
fn test_query_dimension_is_checked() {
    let matcher = builtin_matcher();
    assert_eq!(matcher.dimension(), 3);
    assert_eq!(
        matcher.search(&[1.0, 1.0]),
        Err(Error::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    );
}

#[test]
fn test_fit_rejects_ragged_rows() {
    let err = Matcher::fit(vec![("a", vec![0.0_f32, 0.0]), ("b", vec![1.0_f32])]).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_custom_engine() {
    let matcher = Matcher::with_engine(
        CpuDistance::new(DistanceMetric::SquaredEuclidean),
        vec![("near", vec![1.0_f32, 0.0]), ("far", vec![3.0_f32, 0.0])],
    )
    .unwrap();

    let hit = matcher.search(&[0.0, 0.0]).unwrap();
    assert_eq!(hit.name, "near");
    assert!((hit.distance - 1.0).abs() < 1e-6);
    assert_eq!(matcher.engine().metric(), DistanceMetric::SquaredEuclidean);
    assert_eq!(matcher.len(), 2);
}
