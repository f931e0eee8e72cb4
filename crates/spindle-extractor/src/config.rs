//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use spindle_domain::RecordLayout;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Number of leading lines of the first page dumped at debug level
    pub preview_lines: usize,

    /// Stride and field offsets of one record block
    pub layout: RecordLayout,
}

impl ExtractorConfig {
    /// Use a different record layout
    pub fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            preview_lines: 50,
            layout: RecordLayout::default(),
        }
    }
}
