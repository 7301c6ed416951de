//! Test Fixtures
//!
//! Shared catalogs and proptest strategies for movies and selections.

use proptest::prelude::*;

use crate::core::{Movie, SelectionState, SortMode};

/// Genre vocabulary used by generated catalogs.
pub const GENRES: [&str; 6] = ["drama", "comedy", "action", "horror", "sci-fi", "romance"];

/// The three-movie catalog used by the concrete scenarios.
pub fn alpha_beta_gamma() -> Vec<Movie> {
    vec![
        Movie::new(1, "Alpha", 2000, &["drama"]),
        Movie::new(2, "Beta", 1999, &["comedy"]),
        Movie::new(3, "Gamma", 2000, &["drama", "comedy"]),
    ]
}

fn arb_genre() -> impl Strategy<Value = String> {
    prop::sample::select(GENRES.to_vec()).prop_map(str::to_string)
}

/// Small title space so duplicates (and therefore sort ties) are common.
fn arb_title() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Alien".to_string()),
        Just("alien".to_string()),
        Just("Amélie".to_string()),
        Just("Heat".to_string()),
        "[A-Za-z ]{1,12}",
    ]
}

/// A catalog with unique, ascending ids.
pub fn arb_movies(max_len: usize) -> impl Strategy<Value = Vec<Movie>> {
    prop::collection::vec(
        (
            arb_title(),
            1990i32..2000,
            prop::collection::vec(arb_genre(), 0..4),
        ),
        0..max_len,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, year, genre))| Movie {
                id: i as u32 + 1,
                title,
                year,
                genre,
            })
            .collect()
    })
}

pub fn arb_sort_mode() -> impl Strategy<Value = SortMode> {
    prop::sample::select(SortMode::ALL.to_vec())
}

/// Any reachable selection: genres may be arbitrary non-empty labels.
pub fn arb_selection() -> impl Strategy<Value = SelectionState> {
    (
        prop::collection::vec(
            prop_oneof![arb_genre(), "[a-zA-Z0-9 &=+%?#/-]{1,10}"],
            0..5,
        ),
        prop::option::of(1900i32..2100),
        arb_sort_mode(),
        1u32..50,
    )
        .prop_map(|(genres, year, sort, page)| {
            let mut state = SelectionState::default();
            for genre in genres {
                if !state.is_genre_selected(&genre) {
                    state = state.toggle_genre(&genre);
                }
            }
            state.set_year(year).set_sort(sort).go_to_page(page)
        })
}
