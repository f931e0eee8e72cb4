//! Aggregation outcome

use serde::Serialize;

/// Result of summing matched record lengths
///
/// `NoData` is kept apart from a zero total: a window that matched records
/// whose lengths add up to zero is still a successful aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AggregateOutcome {
    /// At least one record matched
    Total {
        /// Sum of `actual_length` over matched records
        total: f64,
        /// Number of records that contributed
        matched: usize,
    },

    /// No record matched both the shift and the window
    NoData,
}

impl AggregateOutcome {
    /// The summed total, if any record matched
    pub fn total(&self) -> Option<f64> {
        match self {
            AggregateOutcome::Total { total, .. } => Some(*total),
            AggregateOutcome::NoData => None,
        }
    }

    /// Number of matched records
    pub fn matched(&self) -> usize {
        match self {
            AggregateOutcome::Total { matched, .. } => *matched,
            AggregateOutcome::NoData => 0,
        }
    }

    /// Whether nothing matched
    pub fn is_no_data(&self) -> bool {
        matches!(self, AggregateOutcome::NoData)
    }

    /// Text encoded into the barcode symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use spindle_domain::AggregateOutcome;
    ///
    /// let outcome = AggregateOutcome::Total { total: 10.5, matched: 1 };
    /// assert_eq!(outcome.barcode_payload().as_deref(), Some("TOTAL : 10.50"));
    /// assert_eq!(AggregateOutcome::NoData.barcode_payload(), None);
    /// ```
    pub fn barcode_payload(&self) -> Option<String> {
        self.total().map(|total| format!("TOTAL : {:.2}", total))
    }

    /// Combine two outcomes, summing totals and match counts
    pub fn merge(self, other: AggregateOutcome) -> AggregateOutcome {
        match (self, other) {
            (AggregateOutcome::NoData, other) => other,
            (this, AggregateOutcome::NoData) => this,
            (
                AggregateOutcome::Total { total: a, matched: m },
                AggregateOutcome::Total { total: b, matched: n },
            ) => AggregateOutcome::Total {
                total: a + b,
                matched: m + n,
            },
        }
    }
}
