//! External boundaries: record fetch and watchlist persistence.
//!
//! The engine never performs I/O itself; it consumes the result of a fetch as
//! an opaque immutable collection and keys watchlist calls by record id.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::data::Record;
use crate::errors::DashboardError;
use crate::types::RecordId;

/// Backing-service boundary that produces a record collection.
///
/// One outstanding request per mount; a fresh fetch simply replaces the store
/// when it resolves. For a fixed backend state the fetch should be
/// deterministic.
pub trait RecordSource: Send + Sync {
    /// Stable source identifier used in errors and logs.
    fn id(&self) -> &str;
    /// Fetch the full collection.
    fn fetch(&self) -> Result<Vec<Record>, DashboardError>;
}

/// Fixed in-memory source for tests and demos.
pub struct InMemorySource {
    id: String,
    records: Vec<Record>,
}

impl InMemorySource {
    /// Create a source that returns clones of `records` on every fetch.
    pub fn new(id: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            id: id.into(),
            records,
        }
    }
}

impl RecordSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch(&self) -> Result<Vec<Record>, DashboardError> {
        Ok(self.records.clone())
    }
}

/// Save-for-later persistence boundary, keyed by record id.
pub trait Watchlist: Send + Sync {
    /// Whether `id` is currently saved.
    fn is_saved(&self, id: &RecordId) -> bool;
    /// Set the saved flag for `id`; returns the new flag value.
    fn set_saved(&self, id: &RecordId, saved: bool) -> Result<bool, DashboardError>;
}

/// In-memory watchlist for tests and demos.
#[derive(Default)]
pub struct InMemoryWatchlist {
    saved: RwLock<HashSet<RecordId>>,
}

impl InMemoryWatchlist {
    /// Empty watchlist.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Watchlist for InMemoryWatchlist {
    fn is_saved(&self, id: &RecordId) -> bool {
        self.saved
            .read()
            .map(|guard| guard.contains(id))
            .unwrap_or(false)
    }

    fn set_saved(&self, id: &RecordId, saved: bool) -> Result<bool, DashboardError> {
        let mut guard = self
            .saved
            .write()
            .map_err(|_| DashboardError::Watchlist("lock poisoned".to_string()))?;
        if saved {
            guard.insert(id.clone());
        } else {
            guard.remove(id);
        }
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RecordKind;

    fn record(name: &str) -> Record {
        Record {
            id: format!("buyer::{name}"),
            kind: RecordKind::Buyer { fund_size: None },
            display_name: name.to_string(),
            location: None,
            score: 0.0,
            sector: None,
            lease_expiration: None,
            time_series: Vec::new(),
            logo_url: None,
        }
    }

    #[test]
    fn in_memory_source_returns_same_collection_each_fetch() {
        let source = InMemorySource::new("in_memory", vec![record("a"), record("b")]);
        assert_eq!(source.id(), "in_memory");
        let first = source.fetch().unwrap();
        let second = source.fetch().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn watchlist_toggles_by_record_id() {
        let watchlist = InMemoryWatchlist::new();
        let id = "buyer::a".to_string();
        assert!(!watchlist.is_saved(&id));
        assert!(watchlist.set_saved(&id, true).unwrap());
        assert!(watchlist.is_saved(&id));
        assert!(!watchlist.set_saved(&id, false).unwrap());
        assert!(!watchlist.is_saved(&id));
    }
}
