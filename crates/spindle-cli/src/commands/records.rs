//! Records command implementation.

use crate::cli::RecordsArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use spindle_domain::traits::SnapshotStore;
use spindle_domain::Record;
use spindle_store::{JsonSnapshotStore, StoreError};

/// Load stored records, filtered by shift and truncated to `limit`.
pub fn list_records(args: &RecordsArgs, config: &Config) -> Result<Vec<Record>> {
    let records = match JsonSnapshotStore::new(&config.snapshot_path).load() {
        Ok(records) => records,
        Err(StoreError::SnapshotMissing(_)) => return Err(CliError::NotLoaded),
        Err(e) => return Err(e.into()),
    };

    Ok(records
        .iter()
        .filter(|r| args.shift.as_ref().map_or(true, |shift| &r.shift == shift))
        .take(args.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect())
}

/// Execute the records command.
pub fn execute_records(args: RecordsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let records = list_records(&args, config)?;
    println!("{}", formatter.format_records(&records)?);
    Ok(())
}
