//! Spindle Domain Layer
//!
//! Shared value types for the production-log pipeline. Everything here is pure
//! data and validation; extraction, aggregation and persistence live in the
//! other workspace crates and only agree on the shapes defined below.
//!
//! ## Key Concepts
//!
//! - **Record**: one production event recovered from a fixed-stride line block
//! - **RecordLayout**: the stride and field offsets of that block
//! - **Query**: shift label plus an inclusive time window
//! - **AggregateOutcome**: a summed length, or an explicit "no data" signal
//!
//! ## Architecture
//!
//! ```text
//! PageSource → Extractor → [Record] → SnapshotStore → Aggregator → AggregateOutcome
//! ```
//!
//! The trait seams in [`traits`] describe the collaborators (document text
//! extraction, snapshot persistence) without tying the core to any of them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod layout;
pub mod outcome;
pub mod query;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use layout::RecordLayout;
pub use outcome::AggregateOutcome;
pub use query::{Query, QueryError};
pub use record::{parse_timestamp, Record, RecordError, TimestampError, TIMESTAMP_FORMAT};
