//! In-process snapshot store

use crate::StoreError;
use spindle_domain::traits::SnapshotStore;
use spindle_domain::Record;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Snapshot held in memory
///
/// `replace` swaps the whole `Arc` under a write lock; `load` clones the
/// current `Arc`, so readers keep their snapshot even if it is replaced.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshot: RwLock<Option<Arc<[Record]>>>,
}

impl MemorySnapshotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    type Error = StoreError;

    fn replace(&self, records: &[Record]) -> Result<(), Self::Error> {
        let fresh: Arc<[Record]> = records.to_vec().into();
        let mut guard = self.snapshot.write().map_err(|_| StoreError::LockPoisoned)?;
        *guard = Some(fresh);
        Ok(())
    }

    fn load(&self) -> Result<Arc<[Record]>, Self::Error> {
        let guard = self.snapshot.read().map_err(|_| StoreError::LockPoisoned)?;
        guard
            .clone()
            .ok_or_else(|| StoreError::SnapshotMissing(PathBuf::from(":memory:")))
    }

    fn exists(&self) -> bool {
        self.snapshot
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}
