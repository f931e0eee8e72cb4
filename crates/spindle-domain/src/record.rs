//! Record module - one production event reconstructed from the line stream

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed textual format of record timestamps and query bounds.
///
/// Instants are timezone-naive; the source document carries local machine time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a timestamp in [`TIMESTAMP_FORMAT`]
///
/// # Examples
///
/// ```
/// use spindle_domain::parse_timestamp;
///
/// assert!(parse_timestamp("2024-01-01 08:00:00").is_ok());
/// assert!(parse_timestamp("01/01/2024 08:00").is_err());
/// assert!(parse_timestamp("2024-1-1 8:0:0").is_err());
/// ```
///
/// chrono accepts unpadded fields, a signed year and a missing separator for
/// this format, so the parsed value must format back to exactly `raw`.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let parsed = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)?;
    if parsed.format(TIMESTAMP_FORMAT).to_string() != raw {
        return Err(TimestampError::NotCanonical(raw.to_string()));
    }
    Ok(parsed)
}

/// Errors from [`parse_timestamp`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimestampError {
    /// chrono could not read the text at all
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    /// Readable, but not written as zero-padded `YYYY-MM-DD HH:MM:SS`
    #[error("timestamp '{0}' is not in YYYY-MM-DD HH:MM:SS form")]
    NotCanonical(String),
}

/// Problems found by [`Record::validate`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// The identifier token is empty
    #[error("record id is empty")]
    EmptyId,

    /// The measured length is negative, NaN or infinite
    #[error("actual length {0} is not a finite non-negative number")]
    InvalidLength(f64),
}

/// A single production event
///
/// Records are produced only by the extractor and never mutated afterwards.
/// Duplicated ids are legitimate and are kept as separate records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier token from the anchor line
    pub id: String,

    /// Timestamp text, expected in [`TIMESTAMP_FORMAT`]
    ///
    /// Kept verbatim: an unparseable value is not an extraction error, it
    /// only makes the record unmatched at aggregation time.
    pub timestamp: String,

    /// Shift label, compared case-sensitively
    pub shift: String,

    /// Measured length
    ///
    /// Taken as printed. The extractor does not reject negative or non-finite
    /// values; [`Record::validate`] reports them.
    #[serde(with = "length_repr")]
    pub actual_length: f64,
}

/// JSON has no NaN or infinity, so those lengths are written as text
/// (`"NaN"`, `"inf"`, `"-inf"`) and read back with `f64::from_str`.
mod length_repr {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|e| D::Error::custom(format!("invalid length '{}': {}", raw, e))),
        }
    }
}

impl Record {
    /// Create a new record
    pub fn new(
        id: impl Into<String>,
        timestamp: impl Into<String>,
        shift: impl Into<String>,
        actual_length: f64,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: timestamp.into(),
            shift: shift.into(),
            actual_length,
        }
    }

    /// Parse the timestamp text, if it is well formed
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp).ok()
    }

    /// Check the record invariants
    ///
    /// The timestamp and shift are not checked: a blank shift line or an odd
    /// timestamp still yields a record, which then matches no query.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.is_empty() {
            return Err(RecordError::EmptyId);
        }
        if !self.actual_length.is_finite() || self.actual_length < 0.0 {
            return Err(RecordError::InvalidLength(self.actual_length));
        }
        Ok(())
    }
}
