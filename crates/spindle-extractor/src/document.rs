//! Plain-text page source
//!
//! Text-layout tools separate pages with a form feed. Each page is split into
//! lines on `\n`; a stray `\r` is left in place and removed by the field
//! trimming in the parser.

use crate::error::ExtractorError;
use spindle_domain::traits::PageSource;
use std::fs;
use std::path::Path;

/// Page separator in extracted document text
pub const PAGE_SEPARATOR: char = '\u{000C}';

/// Document text already extracted from its binary container
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    /// Wrap extracted text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read extracted text from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExtractorError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::new(text))
    }

    /// Split into pages of lines
    pub fn split_pages(&self) -> Vec<Vec<String>> {
        if self.text.is_empty() {
            return Vec::new();
        }

        let mut pages: Vec<Vec<String>> = self
            .text
            .split(PAGE_SEPARATOR)
            .map(|page| page.split('\n').map(str::to_string).collect())
            .collect();

        // Text ending with a form feed leaves an empty trailing page
        if self.text.ends_with(PAGE_SEPARATOR) {
            pages.pop();
        }
        pages
    }
}

impl PageSource for TextDocument {
    type Error = ExtractorError;

    fn pages(&self) -> Result<Vec<Vec<String>>, Self::Error> {
        Ok(self.split_pages())
    }
}
