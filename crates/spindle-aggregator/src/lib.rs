//! Spindle Aggregator
//!
//! Sums the measured length of records for one shift over an inclusive time
//! window.
//!
//! Aggregation never fails. A record whose timestamp cannot be parsed is
//! left out of the sum; a window that matches nothing yields
//! [`AggregateOutcome::NoData`] rather than a zero total.
//!
//! # Examples
//!
//! ```
//! use spindle_aggregator::aggregate;
//! use spindle_domain::{AggregateOutcome, Query, Record};
//!
//! let records = vec![
//!     Record::new("1", "2024-01-01 08:00:00", "A", 10.5),
//!     Record::new("2", "2024-01-01 09:00:00", "A", 5.0),
//!     Record::new("3", "2024-01-01 08:30:00", "B", 100.0),
//! ];
//! let query = Query::parse("A", "2024-01-01 07:00:00", "2024-01-01 08:45:00").unwrap();
//!
//! let outcome = aggregate(&records, &query);
//! assert_eq!(outcome, AggregateOutcome::Total { total: 10.5, matched: 1 });
//! assert_eq!(outcome.barcode_payload().as_deref(), Some("TOTAL : 10.50"));
//! ```

#![warn(missing_docs)]

mod aggregate;

pub use aggregate::{aggregate, aggregate_batch, matches};
pub use spindle_domain::{AggregateOutcome, Query};
