//! Ingest command implementation.

use crate::cli::IngestArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use spindle_domain::traits::SnapshotStore;
use spindle_extractor::{ExtractionResult, Extractor, TextDocument};
use spindle_store::JsonSnapshotStore;
use std::path::Path;
use tracing::info;

/// Extract records from `file` and replace the configured snapshot.
pub fn ingest(file: &Path, config: &Config) -> Result<ExtractionResult> {
    let extractor = Extractor::new(config.extractor.clone())?;
    let document = TextDocument::from_path(file)?;

    info!("Ingesting {}", file.display());
    let result = extractor.extract_document(&document)?;

    JsonSnapshotStore::new(&config.snapshot_path).replace(&result.records)?;
    Ok(result)
}

/// Execute the ingest command.
pub fn execute_ingest(args: IngestArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let result = ingest(&args.file, config)?;
    println!("{}", formatter.ingest_summary(&result.report));
    Ok(())
}
