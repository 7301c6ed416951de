pub mod catalog;
pub mod error;
pub mod facets;
pub mod pipeline;
pub mod query_string;
pub mod selection;
pub mod sync;

#[cfg(feature = "tui")]
pub mod logging;

pub use catalog::{Catalog, Movie};
pub use error::CatalogError;
pub use facets::Facets;
pub use pipeline::{PaginationControls, QueryResult, PAGE_SIZE};
pub use selection::{Action, SelectionState, SortMode};
pub use sync::{FieldChanges, History, MemoryHistory, UrlSync};
