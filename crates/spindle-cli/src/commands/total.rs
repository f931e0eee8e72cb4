//! Total command implementation.

use crate::cli::TotalArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use spindle_aggregator::aggregate_batch;
use spindle_domain::traits::SnapshotStore;
use spindle_domain::{AggregateOutcome, Query};
use spindle_store::{JsonSnapshotStore, StoreError};

/// Collect the queries named on the command line.
pub fn build_queries(args: TotalArgs) -> Result<Vec<Query>> {
    let mut queries = Vec::new();

    if let Some(shift) = args.shift {
        let (start, end) = match (args.start, args.end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(CliError::InvalidInput(
                    "--shift needs both --start and --end".to_string(),
                ))
            }
        };
        queries.push(Query::parse(&shift, &start, &end)?);
    }
    queries.extend(args.entries);

    if queries.is_empty() {
        return Err(CliError::InvalidInput(
            "Give --shift/--start/--end or at least one --entry".to_string(),
        ));
    }
    Ok(queries)
}

/// Total the stored snapshot over `queries`.
pub fn total(queries: &[Query], config: &Config) -> Result<AggregateOutcome> {
    let records = match JsonSnapshotStore::new(&config.snapshot_path).load() {
        Ok(records) => records,
        Err(StoreError::SnapshotMissing(_)) => return Err(CliError::NotLoaded),
        Err(e) => return Err(e.into()),
    };
    Ok(aggregate_batch(&records, queries))
}

/// Execute the total command.
pub fn execute_total(args: TotalArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let queries = build_queries(args)?;
    let outcome = total(&queries, config)?;
    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}
