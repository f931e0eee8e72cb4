//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while reading a document or loading configuration
///
/// Malformed record blocks are not errors; they are recovered from inside
/// the line scan and only show up in the extraction report.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The source document could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
