//! Spindle Extractor
//!
//! Rebuilds production records from the text lines of a machine log.
//!
//! # Overview
//!
//! The log is printed as a repeating block of lines per production event.
//! There are no delimiters: a block starts at an anchor line (a number
//! followed by another token) and the fields sit at fixed offsets below it.
//!
//! # Architecture
//!
//! ```text
//! PageSource → pages → LineCursor (per page) → Step::Emit | Step::Skip → [Record]
//! ```
//!
//! # Recovery
//!
//! A block that cannot be read (page ends early, length line not a number)
//! only costs one line: the cursor moves to the next line and keeps looking
//! for anchors. A parsed block moves the cursor past the whole stride.
//! Pages never share state.
//!
//! # Example Usage
//!
//! ```no_run
//! use spindle_extractor::{Extractor, ExtractorConfig, TextDocument};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//! let document = TextDocument::from_path("machine_log.txt")?;
//!
//! let result = extractor.extract_document(&document)?;
//!
//! println!("Records: {}", result.records.len());
//! println!("Rejected: {}", result.report.failures.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod extractor;
mod parser;
mod types;


pub use config::ExtractorConfig;
pub use document::{TextDocument, PAGE_SEPARATOR};
pub use error::ExtractorError;
pub use extractor::{extract, Extractor};
pub use parser::{match_anchor, LineCursor, SkipReason, Step};
pub use types::{ExtractionFailure, ExtractionReport, ExtractionResult, IrregularRecord};
