//! Catalog browser view: facet controls, the movie grid and pagination.
//!
//! Every handler dispatches through [`CatalogState`](crate::services::catalog_state::CatalogState),
//! nothing here writes selection signals directly.

mod facet_panel;
mod movie_grid;
mod pagination;

pub use facet_panel::{capitalize, FacetPanel, ALL_YEARS};
pub use movie_grid::{MovieCard, MovieGrid, EMPTY_MESSAGE, EMPTY_PAGE_MESSAGE};
pub use pagination::Pagination;
