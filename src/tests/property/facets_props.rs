//! Property-based tests for facet extraction
//!
//! Tests invariants:
//! - Genres are unique and strictly ascending
//! - Years are unique and strictly ascending
//! - Every movie's genres and year appear in the facets

use proptest::prelude::*;

use crate::core::facets::{extract_genres, extract_years};
use crate::core::Facets;
use crate::tests::common::fixtures::{alpha_beta_gamma, arb_movies};

proptest! {
    /// Property: genres are strictly ascending (so sorted and duplicate-free)
    #[test]
    fn prop_genres_sorted_unique(movies in arb_movies(30)) {
        let genres = extract_genres(&movies);
        prop_assert!(genres.windows(2).all(|w| w[0] < w[1]), "not strictly ascending: {:?}", genres);
    }

    /// Property: years are strictly ascending
    #[test]
    fn prop_years_sorted_unique(movies in arb_movies(30)) {
        let years = extract_years(&movies);
        prop_assert!(years.windows(2).all(|w| w[0] < w[1]), "not strictly ascending: {:?}", years);
    }

    /// Property: facets cover every value present in the catalog
    #[test]
    fn prop_facets_cover_catalog(movies in arb_movies(30)) {
        let genres = extract_genres(&movies);
        let years = extract_years(&movies);
        for movie in &movies {
            prop_assert!(years.contains(&movie.year));
            for genre in &movie.genre {
                prop_assert!(genres.contains(genre));
            }
        }
    }
}

#[test]
fn test_three_movie_facets() {
    let facets = Facets::from_movies(&alpha_beta_gamma());
    assert_eq!(facets.genres, vec!["comedy", "drama"]);
    assert_eq!(facets.years, vec![1999, 2000]);
}
