//! Record layout - stride and field offsets of one record block

use serde::{Deserialize, Serialize};

/// Default number of lines occupied by one record block
pub const DEFAULT_STRIDE: usize = 9;

/// Position of the fields inside a record block, relative to the anchor line
///
/// The anchor line (offset 0) carries the id. The other offsets were read off
/// the machine log layout; lines between them hold printed fields that are
/// not part of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordLayout {
    /// Lines consumed by one successfully parsed block
    pub stride: usize,

    /// Offset of the timestamp line
    pub timestamp_offset: usize,

    /// Offset of the shift line
    pub shift_offset: usize,

    /// Offset of the measured length line
    pub length_offset: usize,
}

impl RecordLayout {
    /// Largest offset read from a block
    pub fn max_offset(&self) -> usize {
        self.timestamp_offset
            .max(self.shift_offset)
            .max(self.length_offset)
    }

    /// Validate the layout
    pub fn validate(&self) -> Result<(), String> {
        if self.stride == 0 {
            return Err("stride must be greater than 0".to_string());
        }
        for (name, offset) in [
            ("timestamp_offset", self.timestamp_offset),
            ("shift_offset", self.shift_offset),
            ("length_offset", self.length_offset),
        ] {
            if offset == 0 {
                return Err(format!("{} must not overlap the id line", name));
            }
            if offset >= self.stride {
                return Err(format!(
                    "{} {} must be less than stride {}",
                    name, offset, self.stride
                ));
            }
        }
        Ok(())
    }
}

impl Default for RecordLayout {
    /// The machine log layout: id, -, timestamp, shift, 4 others, length
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            timestamp_offset: 2,
            shift_offset: 3,
            length_offset: 8,
        }
    }
}
