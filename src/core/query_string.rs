//! Query-string codec for [`SelectionState`].
//!
//! The query string is the only wire format:
//!
//! | key     | values                 | omitted when      |
//! |---------|------------------------|-------------------|
//! | `genre` | repeatable label       | no genre selected |
//! | `year`  | integer                | all years         |
//! | `sort`  | `alphabet` \| `year`   | catalog order     |
//! | `page`  | positive integer       | page 1            |
//!
//! Decoding never fails. Anything unparseable falls back to its default.

use url::form_urlencoded;

use super::selection::{SelectionState, SortMode};

pub const GENRE_KEY: &str = "genre";
pub const YEAR_KEY: &str = "year";
pub const SORT_KEY: &str = "sort";
pub const PAGE_KEY: &str = "page";

/// Decode a query string (leading `?` optional) into a selection.
///
/// Repeated `genre` values accumulate in order; for the single-valued keys
/// the last occurrence wins.
pub fn decode(query: &str) -> SelectionState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = SelectionState::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            GENRE_KEY => {
                if !value.is_empty() {
                    state.genres.insert(value.into_owned());
                }
            }
            YEAR_KEY => state.year = value.trim().parse::<i32>().ok(),
            SORT_KEY => state.sort = SortMode::from_param(&value),
            PAGE_KEY => {
                state.page = value
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|&p| p >= 1)
                    .unwrap_or(1)
            }
            _ => {}
        }
    }

    state
}

/// Encode a selection as its canonical (minimal) query string, without `?`.
pub fn encode(state: &SelectionState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for genre in &state.genres {
        serializer.append_pair(GENRE_KEY, genre);
    }
    if let Some(year) = state.year {
        serializer.append_pair(YEAR_KEY, &year.to_string());
    }
    if let Some(sort) = state.sort.as_param() {
        serializer.append_pair(SORT_KEY, sort);
    }
    if state.page > 1 {
        serializer.append_pair(PAGE_KEY, &state.page.to_string());
    }

    serializer.finish()
}

/// `encode` with a leading `?`, or an empty string for the default state.
pub fn to_search(state: &SelectionState) -> String {
    let encoded = encode(state);
    if encoded.is_empty() {
        encoded
    } else {
        format!("?{encoded}")
    }
}
