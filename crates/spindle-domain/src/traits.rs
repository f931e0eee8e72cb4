//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the core and its collaborators.
//! Implementations live in other crates.

use crate::Record;
use std::sync::Arc;

/// Trait for persisting the extracted record snapshot
///
/// Implemented by the infrastructure layer (spindle-store). A snapshot is
/// replaced as a whole; readers must observe either the previous or the new
/// snapshot, never a mix of both.
pub trait SnapshotStore {
    /// Error type for store operations
    type Error;

    /// Replace the stored snapshot with `records`
    fn replace(&self, records: &[Record]) -> Result<(), Self::Error>;

    /// Load the current snapshot
    fn load(&self) -> Result<Arc<[Record]>, Self::Error>;

    /// Whether a snapshot has been stored
    fn exists(&self) -> bool;
}

/// Trait for the page-segmented text of a source document
///
/// Implemented by whatever turns a document into plain text lines
/// (spindle-extractor ships a plain-text implementation).
pub trait PageSource {
    /// Error type for reading the document
    type Error;

    /// Ordered pages, each an ordered list of lines
    fn pages(&self) -> Result<Vec<Vec<String>>, Self::Error>;
}
