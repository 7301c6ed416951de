//! Property-based tests for the query-string codec
//!
//! Tests invariants:
//! - Round trip: decode(encode(s)) == s for every reachable state
//! - Encoding is canonical: re-encoding a decoded string is stable
//! - Decoding arbitrary input never panics and yields page >= 1

use proptest::prelude::*;

use crate::core::query_string::{decode, encode, to_search};
use crate::core::{Catalog, Facets, Movie, SelectionState};
use crate::tests::common::fixtures::arb_selection;

proptest! {
    /// Property: decode(encode(s)) == s
    #[test]
    fn prop_roundtrip(state in arb_selection()) {
        let encoded = encode(&state);
        prop_assert_eq!(decode(&encoded), state.clone(), "encoded as {}", encoded);
        prop_assert_eq!(decode(&to_search(&state)), state);
    }

    /// Property: page 1 is never written out
    #[test]
    fn prop_page_one_omitted(state in arb_selection()) {
        let encoded = encode(&state.go_to_page(1));
        prop_assert!(!encoded.contains("page="));
    }

    /// Property: encode(decode(q)) is a fixed point after one pass
    #[test]
    fn prop_canonical_form_is_stable(query in "[a-z=&%0-9+?]{0,40}") {
        let canonical = encode(&decode(&query));
        prop_assert_eq!(encode(&decode(&canonical)), canonical);
    }

    /// Property: arbitrary input decodes to a valid state
    #[test]
    fn prop_decode_total(query in ".{0,60}") {
        let state = decode(&query);
        prop_assert!(state.page >= 1);
        prop_assert!(state.genres.iter().all(|g| !g.is_empty()));
    }

    /// Property: every genre a loadable catalog offers survives the URL
    #[test]
    fn prop_catalog_genres_roundtrip(labels in prop::collection::vec("[ a-z&=]{0,4}", 1..6)) {
        let movies: Vec<Movie> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Movie::new(i as u32 + 1, "Title", 2000, &[label.as_str()]))
            .collect();
        // blank labels are refused at load time; anything accepted must round trip
        if let Ok(catalog) = Catalog::new(movies) {
            for genre in Facets::from_movies(catalog.movies()).genres {
                let state = SelectionState::default().toggle_genre(&genre);
                prop_assert_eq!(decode(&encode(&state)), state);
            }
        }
    }
}
