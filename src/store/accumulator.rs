use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, trace};

use crate::translate::{CanonicalHandRecord, HandId};

/// Errors from reading the accumulated hands.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum StoreError {
    /// Nothing captured yet. Callers should ask for more hands, not fail.
    #[error("No hands captured yet")]
    EmptyStore,
}

/// Every hand seen during one run, keyed by hand number.
///
/// The first record stored for a hand number wins. Later views of the same
/// hand, whether live or from history, are ignored.
#[derive(Debug, Clone, Default)]
pub struct HandAccumulator {
    records: BTreeMap<HandId, CanonicalHandRecord>,
}

impl HandAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` unless its hand is already known.
    ///
    /// Returns `true` when the record was newly stored.
    pub fn insert(&mut self, record: CanonicalHandRecord) -> bool {
        if self.records.contains_key(record.id()) {
            trace!(id = %record.id(), "Hand already stored");
            return false;
        }
        debug!(id = %record.id(), "Saved hand");
        self.records.insert(record.id().clone(), record);
        true
    }

    /// Number of distinct hands stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &HandId) -> bool {
        self.records.contains_key(id)
    }

    pub fn get(&self, id: &HandId) -> Option<&CanonicalHandRecord> {
        self.records.get(id)
    }

    /// All stored hands concatenated in ascending hand number order.
    ///
    /// Leaves the store untouched.
    pub fn export_all(&self) -> Result<String, StoreError> {
        if self.records.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        Ok(self.records.values().map(|r| r.text()).collect())
    }
}
