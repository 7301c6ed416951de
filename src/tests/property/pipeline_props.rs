//! Property-based tests for the query pipeline
//!
//! Tests invariants:
//! - Adding a genre never drops an already matching movie (OR semantics)
//! - Adding a year constraint never grows the match set (AND semantics)
//! - Sorting is stable for equal keys
//! - Pages partition the filtered set; zero pages iff zero matches
//! - Pages past the end are empty and echo the requested page
//! - Same input, same output

use proptest::prelude::*;

use crate::core::pipeline::{self, collate, matches, PAGE_SIZE};
use crate::core::{Movie, SelectionState, SortMode};
use crate::tests::common::fixtures::{arb_movies, arb_selection, arb_sort_mode, GENRES};

fn matched_ids(movies: &[Movie], state: &SelectionState) -> Vec<u32> {
    movies.iter().filter(|m| matches(m, state)).map(|m| m.id).collect()
}

/// Every movie on every page, in page order.
fn all_pages(movies: &[Movie], state: &SelectionState) -> (Vec<Movie>, usize) {
    let first = pipeline::run(movies, &state.go_to_page(1));
    let mut items = Vec::new();
    for page in 1..=first.total_pages as u32 {
        items.extend(pipeline::run(movies, &state.go_to_page(page)).page_items);
    }
    (items, first.total_pages)
}

proptest! {
    /// Property: adding a genre keeps every movie that matched before
    #[test]
    fn prop_adding_genre_is_monotonic(
        movies in arb_movies(40),
        base in arb_selection(),
        extra in prop::sample::select(GENRES.to_vec()),
    ) {
        prop_assume!(!base.genres.is_empty());
        prop_assume!(!base.is_genre_selected(extra));
        let before = matched_ids(&movies, &base);
        let after = matched_ids(&movies, &base.toggle_genre(extra));
        for id in before {
            prop_assert!(after.contains(&id), "movie {} dropped after adding {}", id, extra);
        }
    }

    /// Property: adding a year constraint only narrows the match set
    #[test]
    fn prop_adding_year_narrows(
        movies in arb_movies(40),
        base in arb_selection(),
        year in 1990i32..2000,
    ) {
        let unconstrained = base.set_year(None);
        let before = matched_ids(&movies, &unconstrained);
        let after = matched_ids(&movies, &unconstrained.set_year(Some(year)));
        prop_assert!(after.len() <= before.len());
        for id in after {
            prop_assert!(before.contains(&id));
        }
    }

    /// Property: ties keep catalog order (ids ascend within equal keys)
    #[test]
    fn prop_sort_is_stable(movies in arb_movies(40), sort in arb_sort_mode()) {
        let state = SelectionState::default().set_sort(sort);
        let (sorted, _) = all_pages(&movies, &state);
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let tie = match sort {
                SortMode::None => true,
                SortMode::Alphabetical => collate(&a.title, &b.title).is_eq(),
                SortMode::ByYear => a.year == b.year,
            };
            if tie {
                prop_assert!(a.id < b.id, "{:?} before {:?} breaks stability", a, b);
            }
        }
    }

    /// Property: sorted output is ordered by the sort key
    #[test]
    fn prop_sort_orders_by_key(movies in arb_movies(40), sort in arb_sort_mode()) {
        let state = SelectionState::default().set_sort(sort);
        let (sorted, _) = all_pages(&movies, &state);
        for pair in sorted.windows(2) {
            match sort {
                SortMode::None => {}
                SortMode::Alphabetical => prop_assert!(collate(&pair[0].title, &pair[1].title).is_le()),
                SortMode::ByYear => prop_assert!(pair[0].year <= pair[1].year),
            }
        }
    }

    /// Property: pages partition the filtered set
    #[test]
    fn prop_pages_cover_filtered(movies in arb_movies(60), state in arb_selection()) {
        let filtered = matched_ids(&movies, &state).len();
        let (items, total_pages) = all_pages(&movies, &state);
        prop_assert_eq!(items.len(), filtered);
        prop_assert_eq!(total_pages == 0, filtered == 0);
        prop_assert_eq!(total_pages, filtered.div_ceil(PAGE_SIZE));
    }

    /// Property: every page holds at most PAGE_SIZE movies
    #[test]
    fn prop_page_size_bound(movies in arb_movies(60), state in arb_selection()) {
        let result = pipeline::run(&movies, &state);
        prop_assert!(result.page_items.len() <= PAGE_SIZE);
    }

    /// Property: a page past the end is empty and keeps its number
    #[test]
    fn prop_page_past_end_empty(movies in arb_movies(40), state in arb_selection(), past in 1u32..5) {
        let total = pipeline::run(&movies, &state).total_pages as u32;
        let beyond = state.go_to_page(total + past);
        let result = pipeline::run(&movies, &beyond);
        prop_assert!(result.page_items.is_empty());
        prop_assert_eq!(result.current_page, total + past);
    }

    /// Property: identical input yields identical output
    #[test]
    fn prop_deterministic(movies in arb_movies(40), state in arb_selection()) {
        prop_assert_eq!(pipeline::run(&movies, &state), pipeline::run(&movies, &state));
    }
}
