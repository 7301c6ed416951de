use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a catalog.
///
/// Selection and query-string handling never fail; malformed parameters are
/// absorbed by defaulting, so this is the only error type in the core.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate movie id in catalog: {0}")]
    DuplicateId(u32),

    /// A blank label could never be selected through the query string.
    #[error("Movie {0} has an empty genre label")]
    EmptyGenre(u32),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
