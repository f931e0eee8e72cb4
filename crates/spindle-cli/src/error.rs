//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extractor(#[from] spindle_extractor::ExtractorError),

    /// Snapshot store error
    #[error("Store error: {0}")]
    Store(#[from] spindle_store::StoreError),

    /// Query could not be built
    #[error("Invalid query: {0}")]
    Query(#[from] spindle_domain::QueryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No snapshot to query
    #[error("No data loaded. Run 'spindle ingest <FILE>' first.")]
    NotLoaded,
}
