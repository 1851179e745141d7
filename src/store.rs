use tracing::{info, warn};

use crate::data::Record;
use crate::errors::DashboardError;

/// Observable state of the one outstanding fetch per mount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch in flight; the store holds the previous (possibly empty) data.
    #[default]
    Pending,
    /// Fetch resolved; the store was replaced wholesale.
    Ready,
    /// Fetch failed; the store was left empty and the message is shown to
    /// the user.
    Failed(String),
}

/// Holds the raw record collection for the current fetch cycle.
///
/// The collection is immutable between replacements. Every replacement bumps
/// a monotonically increasing revision, which is what the pipeline cache keys
/// on to invalidate its ordered intermediate.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    state: LoadState,
    revision: u64,
}

impl RecordStore {
    /// Empty store in the `Pending` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current records; empty while pending or failed.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Current load lifecycle state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Revision of the current collection; bumped on every replacement.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mark a fresh fetch in flight, keeping current data visible.
    pub fn begin_fetch(&mut self) {
        self.state = LoadState::Pending;
    }

    /// Apply a resolved fetch: replace the collection wholesale on success,
    /// or empty the store and record the failure message.
    pub fn apply(&mut self, result: Result<Vec<Record>, DashboardError>) {
        match result {
            Ok(records) => {
                info!(count = records.len(), "record store replaced");
                self.records = records;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                warn!(error = %err, "record fetch failed; store emptied");
                self.records = Vec::new();
                self.state = LoadState::Failed(err.to_string());
            }
        }
        self.revision = self.revision.saturating_add(1);
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the current collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
