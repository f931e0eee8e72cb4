//! Result types for extraction

use crate::parser::SkipReason;
use spindle_domain::{Record, RecordError};

/// Result of an extraction run
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Records in page order, then line order
    pub records: Vec<Record>,

    /// Counters and rejected candidates
    pub report: ExtractionReport,
}

/// A candidate block that matched the anchor but could not be read
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionFailure {
    /// Zero-based page index
    pub page: usize,

    /// Zero-based line index of the anchor within its page
    pub line: usize,

    /// Why the block was rejected
    pub reason: SkipReason,
}

/// An emitted record whose printed values break a record invariant
///
/// The record is kept as printed; a negative or non-finite length is only
/// flagged here.
#[derive(Debug, Clone, PartialEq)]
pub struct IrregularRecord {
    /// Zero-based page index
    pub page: usize,

    /// Zero-based line index of the anchor within its page
    pub line: usize,

    /// Id of the emitted record
    pub id: String,

    /// The broken invariant
    pub error: RecordError,
}

/// Summary of an extraction run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionReport {
    /// Pages scanned
    pub pages_scanned: usize,

    /// Lines across all pages
    pub lines_scanned: usize,

    /// Records emitted
    pub records_emitted: usize,

    /// Anchored candidates that were skipped
    pub failures: Vec<ExtractionFailure>,

    /// Emitted records that failed [`Record::validate`]
    pub irregular: Vec<IrregularRecord>,
}

impl ExtractionReport {
    /// Rejected candidates whose page ended early
    pub fn truncated_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| matches!(f.reason, SkipReason::Truncated { .. }))
            .count()
    }

    /// Rejected candidates with an unreadable length line
    pub fn bad_length_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| matches!(f.reason, SkipReason::BadLength(_)))
            .count()
    }
}
