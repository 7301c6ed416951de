//! Catalog Store
//!
//! The read-only list of movies the browser works over. Built once at
//! startup (either the built-in sample list or a JSON file) and never
//! mutated afterwards; every other module borrows it as `&[Movie]`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{CatalogError, Result};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: i32,
    /// Genre labels in the order the catalog lists them.
    pub genre: Vec<String>,
}

impl Movie {
    pub fn new(id: u32, title: &str, year: i32, genre: &[&str]) -> Self {
        Self {
            id,
            title: title.to_string(),
            year,
            genre: genre.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Genres joined for display, e.g. `"drama, comedy"`.
    pub fn genre_label(&self) -> String {
        self.genre.join(", ")
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| g == genre)
    }
}

/// Immutable, ordered collection of movies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank genre labels.
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateId(movie.id));
            }
            if movie.genre.iter().any(|g| g.trim().is_empty()) {
                return Err(CatalogError::EmptyGenre(movie.id));
            }
        }
        Ok(Self { movies })
    }

    /// Parse a JSON array of movies.
    pub fn from_json(json: &str) -> Result<Self> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Self::new(movies)
    }

    /// Load a JSON catalog file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&contents)?;
        log::info!(
            "Loaded {} movies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The sample catalog shipped with the browser.
    pub fn builtin() -> Self {
        Self {
            movies: builtin_movies(),
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

fn builtin_movies() -> Vec<Movie> {
    vec![
        Movie::new(1, "The Shawshank Redemption", 1994, &["drama"]),
        Movie::new(2, "The Godfather", 1972, &["crime", "drama"]),
        Movie::new(3, "The Dark Knight", 2008, &["action", "crime", "drama"]),
        Movie::new(4, "Pulp Fiction", 1994, &["crime", "drama"]),
        Movie::new(5, "Forrest Gump", 1994, &["drama", "romance"]),
        Movie::new(6, "Inception", 2010, &["action", "sci-fi", "thriller"]),
        Movie::new(7, "The Matrix", 1999, &["action", "sci-fi"]),
        Movie::new(8, "Interstellar", 2014, &["adventure", "drama", "sci-fi"]),
        Movie::new(9, "Spirited Away", 2001, &["animation", "adventure", "fantasy"]),
        Movie::new(10, "Parasite", 2019, &["comedy", "drama", "thriller"]),
        Movie::new(11, "Amélie", 2001, &["comedy", "romance"]),
        Movie::new(12, "The Lion King", 1994, &["animation", "adventure", "drama"]),
        Movie::new(13, "Gladiator", 2000, &["action", "adventure", "drama"]),
        Movie::new(14, "Back to the Future", 1985, &["adventure", "comedy", "sci-fi"]),
        Movie::new(15, "Alien", 1979, &["horror", "sci-fi"]),
        Movie::new(16, "The Shining", 1980, &["drama", "horror"]),
        Movie::new(17, "Toy Story", 1995, &["animation", "adventure", "comedy"]),
        Movie::new(18, "Se7en", 1995, &["crime", "drama", "thriller"]),
        Movie::new(19, "Casablanca", 1942, &["drama", "romance", "war"]),
        Movie::new(20, "Mad Max: Fury Road", 2015, &["action", "adventure", "sci-fi"]),
        Movie::new(21, "Whiplash", 2014, &["drama", "music"]),
        Movie::new(22, "The Grand Budapest Hotel", 2014, &["adventure", "comedy", "crime"]),
        Movie::new(23, "Get Out", 2017, &["horror", "mystery", "thriller"]),
        Movie::new(24, "La La Land", 2016, &["comedy", "drama", "music", "romance"]),
    ]
}
