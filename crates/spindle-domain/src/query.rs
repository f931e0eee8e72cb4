//! Aggregation queries

use crate::record::parse_timestamp;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised while building a [`Query`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The window ends before it starts
    #[error("Inverted range: start {start} is after end {end}")]
    InvertedRange {
        /// Requested start
        start: NaiveDateTime,
        /// Requested end
        end: NaiveDateTime,
    },

    /// A bound is not in the `YYYY-MM-DD HH:MM:SS` format
    #[error("Invalid timestamp '{0}': expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp(String),

    /// The shift label is empty
    #[error("Shift label is empty")]
    EmptyShift,
}

/// Total-length request for one shift over an inclusive time window
///
/// Queries are built per request and dropped after aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Shift label to match exactly
    pub shift: String,

    /// Inclusive lower bound
    pub start: NaiveDateTime,

    /// Inclusive upper bound
    pub end: NaiveDateTime,
}

impl Query {
    /// Create a query, rejecting an empty shift or an inverted window
    pub fn new(
        shift: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, QueryError> {
        let shift = shift.into();
        if shift.is_empty() {
            return Err(QueryError::EmptyShift);
        }
        if start > end {
            return Err(QueryError::InvertedRange { start, end });
        }
        Ok(Self { shift, start, end })
    }

    /// Create a query without checking the window
    ///
    /// An inverted window is allowed and simply matches nothing.
    pub fn unchecked(shift: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            shift: shift.into(),
            start,
            end,
        }
    }

    /// Build a query from textual bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use spindle_domain::Query;
    ///
    /// let query = Query::parse("A", "2024-01-01 07:00:00", "2024-01-01 08:45:00").unwrap();
    /// assert_eq!(query.shift, "A");
    /// ```
    pub fn parse(shift: &str, start: &str, end: &str) -> Result<Self, QueryError> {
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;
        Self::new(shift, start, end)
    }

    /// Whether an instant lies inside the window, bounds included
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn parse_bound(raw: &str) -> Result<NaiveDateTime, QueryError> {
    parse_timestamp(raw.trim()).map_err(|_| QueryError::InvalidTimestamp(raw.to_string()))
}
