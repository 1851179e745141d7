use thiserror::Error;

use crate::types::SourceId;

/// Error type for record fetch, watchlist, and configuration failures.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("record source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: SourceId, reason: String },
    #[error("watchlist backend failure: {0}")]
    Watchlist(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}
