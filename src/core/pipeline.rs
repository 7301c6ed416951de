//! Query Pipeline
//!
//! `filter -> sort -> paginate`, recomputed from scratch for every render.
//! Pure and deterministic: the same movies and selection always produce the
//! same result.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::catalog::Movie;
use super::selection::{SelectionState, SortMode};

/// Movies shown per page.
pub const PAGE_SIZE: usize = 8;

/// One page of the filtered, sorted catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// At most `page_size` movies.
    pub page_items: Vec<Movie>,
    /// `ceil(filtered_count / page_size)`; zero when nothing matches.
    pub total_pages: usize,
    /// The requested page, echoed back unclamped.
    pub current_page: u32,
    pub filtered_count: usize,
}

/// Run the pipeline with the default page size.
pub fn run(movies: &[Movie], state: &SelectionState) -> QueryResult {
    run_with_page_size(movies, state, PAGE_SIZE)
}

/// Run the pipeline. A `page_size` of 0 is treated as [`PAGE_SIZE`].
pub fn run_with_page_size(
    movies: &[Movie],
    state: &SelectionState,
    page_size: usize,
) -> QueryResult {
    let page_size = if page_size == 0 { PAGE_SIZE } else { page_size };

    let mut filtered: Vec<&Movie> = movies.iter().filter(|m| matches(m, state)).collect();
    sort_movies(&mut filtered, state.sort);

    let filtered_count = filtered.len();
    let total_pages = filtered_count.div_ceil(page_size);

    let start = (state.page.max(1) as usize - 1).saturating_mul(page_size);
    let page_items = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    QueryResult {
        page_items,
        total_pages,
        current_page: state.page,
        filtered_count,
    }
}

/// Genre filter is ANY-of-selected; the year filter is AND-ed on top.
pub fn matches(movie: &Movie, state: &SelectionState) -> bool {
    let genre_ok = state.genres.is_empty() || state.genres.iter().any(|g| movie.has_genre(g));
    let year_ok = state.year.map_or(true, |year| movie.year == year);
    genre_ok && year_ok
}

/// Stable in-place sort.
fn sort_movies(movies: &mut [&Movie], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::Alphabetical => movies.sort_by(|a, b| collate(&a.title, &b.title)),
        SortMode::ByYear => movies.sort_by_key(|m| m.year),
    }
}

/// Locale-aware string comparison.
///
/// Three levels: base letters (accents and case ignored), then accents,
/// then case with lowercase ordered before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_cmp(a, b))
}

fn primary_key(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.nfd();
    let mut b_chars = b.nfd();
    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) if x == y => continue,
            (Some(x), Some(y)) => {
                // lower < upper when the letters otherwise agree
                return match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                };
            }
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
        }
    }
}

/// State of the pagination controls for a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    /// One entry per page, `1..=total_pages`.
    pub pages: Vec<u32>,
    pub current_page: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationControls {
    pub fn from_result(result: &QueryResult) -> Self {
        let total = u32::try_from(result.total_pages).unwrap_or(u32::MAX);
        Self {
            pages: (1..=total).collect(),
            current_page: result.current_page,
            prev_enabled: result.current_page > 1,
            next_enabled: result.current_page < total,
        }
    }

    pub fn prev_page(&self) -> Option<u32> {
        self.prev_enabled.then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.next_enabled.then(|| self.current_page + 1)
    }
}
