//! Tests for the `catalogue` module.

use super::catalogue::*;
use crate::error::Error;

#[test]
fn test_builtin_definition_order() {
    let catalogue = Catalogue::builtin();
    let names: Vec<&str> = catalogue.names().collect();
    assert_eq!(
        names,
        vec![
            "otro",
            "normal",
            "corte",
            "raspon",
            "moreton",
            "quemadura",
            "picadura",
            "desmayo",
            "atragantamiento",
        ]
    );
    assert_eq!(catalogue.len(), 9);
    assert!(!catalogue.is_empty());
    assert!(catalogue.contains(FALLBACK_CATEGORY));
}

#[test]
fn test_every_category_satisfies_invariants() {
    let catalogue = Catalogue::builtin();
    for category in catalogue.iter() {
        assert!(
            !category.recommendations.is_empty(),
            "{} has no recommendations",
            category.name
        );
        assert_eq!(category.features.len(), FEATURE_DIM);
        assert_eq!(category.name, category.name.to_lowercase());
    }
}

#[test]
fn test_lookup_vector_is_case_insensitive() {
    let catalogue = Catalogue::builtin();
    assert_eq!(catalogue.lookup_vector("quemadura"), Ok([4, 4, 3]));
    assert_eq!(catalogue.lookup_vector("QUEMADURA"), Ok([4, 4, 3]));
    assert_eq!(catalogue.lookup_vector("QuemaDura"), Ok([4, 4, 3]));
}

#[test]
fn test_lookup_vector_is_exact_match_only() {
    let catalogue = Catalogue::builtin();
    assert_eq!(
        catalogue.lookup_vector("fractura"),
        Err(Error::UnknownCategory("fractura".to_string()))
    );
    assert!(catalogue.lookup_vector("cort").is_err());
    assert!(catalogue.lookup_vector(" corte").is_err());
    assert!(catalogue.lookup_vector("").is_err());
}

#[test]
fn test_recommendations_for() {
    let catalogue = Catalogue::builtin();
    let recs = catalogue.recommendations_for("Picadura").unwrap();
    assert_eq!(recs.len(), 4);
    assert!(recs[0].starts_with("Extrae el aguijón"));

    assert_eq!(catalogue.recommendations_for("otro").unwrap().len(), 3);
    assert!(matches!(
        catalogue.recommendations_for("fractura"),
        Err(Error::UnknownCategory(_))
    ));
}

#[test]
fn test_list_categories_pairs_names_with_vectors() {
    let catalogue = Catalogue::builtin();
    let listed: Vec<(&str, FeatureVector)> =
        catalogue.list_categories().map(|(n, v)| (n, *v)).collect();
    assert_eq!(listed[3], ("raspon", [2, 2, 1]));
    assert_eq!(listed[4], ("moreton", [2, 2, 1]));
    assert_eq!(listed[8], ("atragantamiento", [5, 5, 5]));
}

#[test]
fn test_recommendation_text_is_verbatim() {
    let catalogue = Catalogue::builtin();
    let last = catalogue
        .recommendations_for("atragantamiento")
        .unwrap()
        .last()
        .unwrap();
    assert!(last.ends_with("no puede coughing."));
}

#[test]
fn test_new_rejects_empty_catalogue() {
    assert_eq!(Catalogue::new(Vec::new()).unwrap_err(), Error::EmptyCatalogue);
}

#[test]
fn test_new_rejects_empty_recommendations() {
    let err = Catalogue::new(vec![Category::new("vacio", [0, 0, 0], Vec::<String>::new())])
        .unwrap_err();
    assert_eq!(err, Error::EmptyRecommendationSet("vacio".to_string()));
}

#[test]
fn test_new_rejects_duplicates_after_lowercasing() {
    let err = Catalogue::new(vec![
        Category::new("corte", [3, 3, 2], ["a"]),
        Category::new("CORTE", [1, 1, 1], ["b"]),
    ])
    .unwrap_err();
    assert_eq!(err, Error::DuplicateCategory("corte".to_string()));
}

#[test]
fn test_get_index_follows_definition_order() {
    let catalogue = Catalogue::builtin();
    assert_eq!(catalogue.get_index(0).unwrap().name, "otro");
    assert_eq!(catalogue.get_index(6).unwrap().name, "picadura");
    assert!(catalogue.get_index(9).is_none());
}

#[test]
fn test_features_f32() {
    let category = Category::new("quemadura", [4, 4, 3], ["x"]);
    assert_eq!(category.features_f32(), [4.0, 4.0, 3.0]);
}
