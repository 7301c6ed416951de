//! Property-based tests for the catalog core
//!
//! Invariants checked with proptest:
//!
//! - `facets_props`: extracted genres and years are unique and ascending
//! - `query_string_props`: `decode(encode(s)) == s`, decoding never panics
//! - `pipeline_props`: filter monotonicity, stable sorting, pagination
//!   coverage, out-of-range pages
//! - `sync_props`: publishing is idempotent and external navigation never
//!   pushes history
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod facets_props;
mod pipeline_props;
mod query_string_props;
mod sync_props;
