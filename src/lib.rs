#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Centralized constants for buckets, formatting, and pagination.
pub mod constants;
/// Record payload types.
pub mod data;
/// Lenient calendar-date parsing helpers.
pub mod dates;
/// Filter specification and predicate evaluation.
pub mod filter;
/// Aggregate metrics over filtered results.
pub mod metrics;
/// The pure filter→sort→paginate pipeline and its memoizing cache.
pub mod pipeline;
/// Pure per-record display projections.
pub mod projection;
/// Tri-state hierarchical location selection.
pub mod selection;
/// Record fetch and watchlist boundaries.
pub mod source;
/// Record store and fetch lifecycle.
pub mod store;
/// Location reference taxonomy.
pub mod taxonomy;
/// Shared type aliases.
pub mod types;

mod errors;

pub use data::{Location, Record, RecordKind, SeriesPoint};
pub use errors::DashboardError;
pub use filter::{FilterSpec, TermBucket};
pub use pipeline::{
    PageSize, PageSpec, PageView, PipelineCache, SortDirection, SortKey, SortSpec, ViewState,
    filter_and_sort, paginate, run_pipeline,
};
pub use projection::{
    format_percent, format_thousands_currency, growth_percent, initials, latest_of_series,
};
pub use selection::SelectionState;
pub use source::{InMemorySource, InMemoryWatchlist, RecordSource, Watchlist};
pub use store::{LoadState, RecordStore};
pub use taxonomy::{LocationTaxonomy, default_taxonomy};
pub use types::{CategoryName, CountyName, LocationName, RecordId, SubmarketName};
