//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::{LineCursor, Step};
use crate::types::{ExtractionFailure, ExtractionReport, ExtractionResult, IrregularRecord};
use spindle_domain::traits::PageSource;
use spindle_domain::Record;
use tracing::{debug, info, warn};

/// The Extractor rebuilds records from page-segmented document lines
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract records from pages of lines
    ///
    /// Never fails: unreadable blocks are skipped one line at a time.
    pub fn extract<P, L>(&self, pages: &[P]) -> Vec<Record>
    where
        P: AsRef<[L]>,
        L: AsRef<str>,
    {
        self.extract_with_report(pages).records
    }

    /// Extract records and report what was skipped
    pub fn extract_with_report<P, L>(&self, pages: &[P]) -> ExtractionResult
    where
        P: AsRef<[L]>,
        L: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut report = ExtractionReport::default();

        for (page_idx, page) in pages.iter().enumerate() {
            let lines = page.as_ref();
            if page_idx == 0 {
                self.preview(lines);
            }

            report.pages_scanned += 1;
            report.lines_scanned += lines.len();

            for (line_idx, step) in LineCursor::new(lines, self.config.layout) {
                match step {
                    Step::Emit { record, .. } => {
                        if let Err(error) = record.validate() {
                            warn!(
                                "Record {} at page {} line {}: {}",
                                record.id, page_idx, line_idx, error
                            );
                            report.irregular.push(IrregularRecord {
                                page: page_idx,
                                line: line_idx,
                                id: record.id.clone(),
                                error,
                            });
                        }
                        records.push(record);
                    }
                    Step::Skip { reason } if reason.is_rejected_candidate() => {
                        warn!(
                            "Error parsing record at page {} line {}: {}",
                            page_idx, line_idx, reason
                        );
                        report.failures.push(ExtractionFailure {
                            page: page_idx,
                            line: line_idx,
                            reason,
                        });
                    }
                    Step::Skip { .. } => {}
                }
            }
        }

        report.records_emitted = records.len();

        info!(
            "Extraction complete: {} records from {} pages, {} candidates rejected, {} irregular",
            report.records_emitted,
            report.pages_scanned,
            report.failures.len(),
            report.irregular.len()
        );

        ExtractionResult { records, report }
    }

    /// Read a document and extract its records
    pub fn extract_document<S>(&self, source: &S) -> Result<ExtractionResult, ExtractorError>
    where
        S: PageSource,
        ExtractorError: From<S::Error>,
    {
        let pages = source.pages()?;
        Ok(self.extract_with_report(&pages))
    }

    fn preview<L: AsRef<str>>(&self, lines: &[L]) {
        for (idx, line) in lines.iter().take(self.config.preview_lines).enumerate() {
            debug!("page 0 line {}: {:?}", idx, line.as_ref());
        }
    }
}

/// Extract records with the default layout
///
/// # Examples
///
/// ```
/// let page = vec![
///     "17 LOOM-3", "Nylon", "2024-01-01 08:00:00", "A",
///     "-", "-", "-", "-", "12.5",
/// ];
/// let records = spindle_extractor::extract(&[page]);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].id, "17");
/// assert_eq!(records[0].actual_length, 12.5);
/// ```
pub fn extract<P, L>(pages: &[P]) -> Vec<Record>
where
    P: AsRef<[L]>,
    L: AsRef<str>,
{
    Extractor::default().extract(pages)
}
