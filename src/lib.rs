/// Movie Catalog - faceted catalog browser
///
/// Core library providing the catalog store, facet extraction, the
/// filter/sort/paginate pipeline and the query-string synchronized
/// selection state, plus a terminal browser behind the `tui` feature.

#[cfg(feature = "tui")]
pub mod config;
pub mod core;
#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
