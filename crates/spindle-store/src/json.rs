//! JSON file snapshot store

use crate::StoreError;
use serde::{Deserialize, Serialize};
use spindle_domain::traits::SnapshotStore;
use spindle_domain::Record;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Current snapshot file format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    records: &'a [Record],
}

/// Accepted on-disk shapes: the versioned envelope, or a bare record array
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Envelope { version: u32, records: Vec<Record> },
    Bare(Vec<Record>),
}

/// Snapshot persisted as a single JSON file
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a reader opens either the previous file or the new one.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store backed by `path`; nothing is touched until the first write
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn decode(&self, contents: &str) -> Result<Vec<Record>, StoreError> {
        match serde_json::from_str::<SnapshotFile>(contents)? {
            SnapshotFile::Envelope { version, records } if version == SNAPSHOT_VERSION => {
                Ok(records)
            }
            SnapshotFile::Envelope { version, .. } => Err(StoreError::InvalidData(format!(
                "Unsupported snapshot version {} in {}",
                version,
                self.path.display()
            ))),
            SnapshotFile::Bare(records) => {
                debug!("Loaded bare record array from {}", self.path.display());
                Ok(records)
            }
        }
    }
}

impl SnapshotStore for JsonSnapshotStore {
    type Error = StoreError;

    fn replace(&self, records: &[Record]) -> Result<(), Self::Error> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer(
                &mut writer,
                &SnapshotRef {
                    version: SNAPSHOT_VERSION,
                    records,
                },
            )?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        info!(
            "Snapshot replaced: {} records at {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Arc<[Record]>, Self::Error> {
        if !self.path.exists() {
            return Err(StoreError::SnapshotMissing(self.path.clone()));
        }
        let contents = fs::read_to_string(&self.path)?;
        let records = self.decode(&contents)?;
        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records.into())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
