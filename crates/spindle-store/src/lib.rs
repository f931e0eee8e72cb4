//! Spindle Storage Layer
//!
//! Implements the `SnapshotStore` trait for the extracted record snapshot.
//!
//! # Architecture
//!
//! - [`JsonSnapshotStore`]: one JSON file, replaced atomically on every ingest
//! - [`MemorySnapshotStore`]: an in-process snapshot behind a read-write lock
//!
//! Both stores replace the whole snapshot at once. A reader holds the
//! `Arc<[Record]>` it loaded, so a concurrent ingest never changes the records
//! a running query sees.
//!
//! # Examples
//!
//! ```no_run
//! use spindle_domain::traits::SnapshotStore;
//! use spindle_domain::Record;
//! use spindle_store::JsonSnapshotStore;
//!
//! let store = JsonSnapshotStore::new("data.json");
//! store.replace(&[Record::new("1", "2024-01-01 08:00:00", "A", 10.5)]).unwrap();
//! assert_eq!(store.load().unwrap().len(), 1);
//! ```

#![warn(missing_docs)]

mod json;
mod memory;

use std::path::PathBuf;
use thiserror::Error;

pub use json::{JsonSnapshotStore, SNAPSHOT_VERSION};
pub use memory::MemorySnapshotStore;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No snapshot has been written yet
    #[error("No snapshot found at {0}")]
    SnapshotMissing(PathBuf),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot content is not usable
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A writer panicked while holding the snapshot lock
    #[error("Snapshot lock poisoned")]
    LockPoisoned,
}
