//! Atomic snapshot publication for breakdown tables.

use std::sync::{Arc, RwLock};

use super::BreakdownTable;

/// Holds the current breakdown snapshot and swaps it atomically on refresh.
///
/// Readers take an `Arc` to the snapshot and keep computing against it even
/// if a refresh publishes a new table mid-flight; an in-progress estimation
/// can never observe a partially rebuilt table.
#[derive(Debug)]
pub struct BreakdownStore {
    current: RwLock<Arc<BreakdownTable>>,
}

impl BreakdownStore {
    /// A store holding an empty table, used before the first refresh.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(BreakdownTable::empty())),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<BreakdownTable> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the current snapshot with a freshly built table.
    pub fn publish(&self, table: BreakdownTable) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(table);
    }
}

impl Default for BreakdownStore {
    fn default() -> Self {
        Self::new()
    }
}
