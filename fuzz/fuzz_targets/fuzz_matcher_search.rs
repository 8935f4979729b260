//! Fuzz target for nearest-neighbour search with arbitrary query vectors.
//!
//! Finds panics on NaN, infinities and wrong dimensions.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_matcher_search
//! ```

#![no_main]

use arbitrary::Arbitrary;
use auxilio_core::{Catalogue, Error, Matcher};
use libfuzzer_sys::fuzz_target;

/// Fuzzing input for a matcher query.
#[derive(Arbitrary, Debug)]
struct SearchInput {
    query: Vec<f32>,
}

fuzz_target!(|input: SearchInput| {
    let catalogue = Catalogue::builtin();
    let matcher = Matcher::from_catalogue(&catalogue);

    match matcher.search(&input.query) {
        Ok(hit) => {
            assert!(hit.index < catalogue.len());
            assert_eq!(catalogue.get_index(hit.index).map(|c| c.name.as_str()), Some(hit.name.as_str()));
        }
        Err(Error::DimensionMismatch { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, input.query.len());
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
