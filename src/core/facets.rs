//! Facet extraction: the filterable dimensions derived from the catalog.

use std::collections::BTreeSet;

use super::catalog::Movie;

/// Distinct genres and years present in a catalog, both ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub genres: Vec<String>,
    pub years: Vec<i32>,
}

impl Facets {
    pub fn from_movies(movies: &[Movie]) -> Self {
        Self {
            genres: extract_genres(movies),
            years: extract_years(movies),
        }
    }
}

/// Every genre label that appears on some movie, deduplicated and sorted.
pub fn extract_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .flat_map(|m| m.genre.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every release year, first occurrence kept, sorted numerically.
pub fn extract_years(movies: &[Movie]) -> Vec<i32> {
    let mut years: Vec<i32> = Vec::new();
    for movie in movies {
        if !years.contains(&movie.year) {
            years.push(movie.year);
        }
    }
    years.sort_unstable();
    years
}
