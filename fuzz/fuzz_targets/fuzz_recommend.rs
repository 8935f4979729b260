//! Fuzz target for label handling in `Recommender::recommend`.
//!
//! Arbitrary UTF-8 labels must either match a catalogue entry exactly or be
//! rejected as an unknown category. No other error and no panic is allowed.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_recommend
//! ```

#![no_main]

use auxilio_core::{Error, Recommender};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|label: &str| {
    let recommender = Recommender::builtin();
    match recommender.recommend(label) {
        Ok(result) => {
            assert_eq!(result.category, label.to_lowercase());
            assert!(result.all_options.contains(&result.recommendation));
        }
        Err(Error::UnknownCategory(_)) => {
            assert!(!recommender.catalogue().contains(label));
        }
        Err(e) => panic!("unexpected error for {label:?}: {e}"),
    }
});
