//! Line cursor state machine over one page
//!
//! Every step either emits a record and skips the whole block, or skips a
//! single line. A candidate block that cannot be read is never allowed to
//! consume the lines after its anchor, so a later record on the same page is
//! still found.

use once_cell::sync::Lazy;
use regex::Regex;
use spindle_domain::{Record, RecordLayout};
use std::fmt;

/// Anchor line: ASCII digits, whitespace, then at least one more token
static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| compile_regex(r"^([0-9]+)\s+\S+"));

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid regex pattern `{pattern}`: {err}"),
    }
}

/// Return the id token if `line` starts a candidate record block
///
/// The line is trimmed first. A bare number with nothing after it is not an
/// anchor.
pub fn match_anchor(line: &str) -> Option<&str> {
    ANCHOR_RE
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Why a step did not emit a record
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The line is not an anchor
    NoAnchor,

    /// The page ends before the last field line of the block
    Truncated {
        /// Lines the block needs from its anchor
        needed: usize,
        /// Lines left on the page from the anchor
        available: usize,
    },

    /// The length line is not a number
    BadLength(String),
}

impl SkipReason {
    /// Whether the step rejected an anchored candidate block
    pub fn is_rejected_candidate(&self) -> bool {
        !matches!(self, SkipReason::NoAnchor)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoAnchor => write!(f, "no anchor"),
            SkipReason::Truncated { needed, available } => write!(
                f,
                "block truncated: needs {} lines, {} left on page",
                needed, available
            ),
            SkipReason::BadLength(raw) => write!(f, "length line '{}' is not a valid length", raw),
        }
    }
}

/// Outcome of one cursor step
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Anchor matched and the block parsed: emit and skip the block
    Emit {
        /// The reconstructed record
        record: Record,
        /// Lines consumed
        advance: usize,
    },

    /// No anchor, or the block could not be read: skip one line
    Skip {
        /// What went wrong
        reason: SkipReason,
    },
}

impl Step {
    /// Number of lines the cursor moves past for this step
    pub fn advance(&self) -> usize {
        match self {
            Step::Emit { advance, .. } => *advance,
            Step::Skip { .. } => 1,
        }
    }
}

/// Cursor over the lines of a single page
pub struct LineCursor<'a, L> {
    lines: &'a [L],
    layout: RecordLayout,
    position: usize,
}

impl<'a, L: AsRef<str>> LineCursor<'a, L> {
    /// Create a cursor at the first line of `lines`
    pub fn new(lines: &'a [L], layout: RecordLayout) -> Self {
        Self {
            lines,
            layout,
            position: 0,
        }
    }

    /// Current line index
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether every line has been consumed
    pub fn is_done(&self) -> bool {
        self.position >= self.lines.len()
    }

    /// Evaluate the block at the cursor and advance past it
    ///
    /// Returns the line index the step started at, or `None` once the page
    /// is exhausted. The cursor never moves beyond the end of the page.
    pub fn step(&mut self) -> Option<(usize, Step)> {
        if self.is_done() {
            return None;
        }
        let start = self.position;
        let step = self.read_block(start);
        self.position = (start + step.advance()).min(self.lines.len());
        Some((start, step))
    }

    fn read_block(&self, start: usize) -> Step {
        let Some(id) = match_anchor(self.lines[start].as_ref()) else {
            return Step::Skip {
                reason: SkipReason::NoAnchor,
            };
        };

        let needed = self.layout.max_offset() + 1;
        let available = self.lines.len() - start;
        if available < needed {
            return Step::Skip {
                reason: SkipReason::Truncated { needed, available },
            };
        }

        let field = |offset: usize| self.lines[start + offset].as_ref().trim();
        let timestamp = field(self.layout.timestamp_offset);
        let shift = field(self.layout.shift_offset);
        let raw_length = field(self.layout.length_offset);

        let actual_length = match raw_length.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                return Step::Skip {
                    reason: SkipReason::BadLength(raw_length.to_string()),
                }
            }
        };

        Step::Emit {
            record: Record::new(id, timestamp, shift, actual_length),
            advance: self.layout.stride,
        }
    }
}

impl<'a, L: AsRef<str>> Iterator for LineCursor<'a, L> {
    type Item = (usize, Step);

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: &str, ts: &str, shift: &str, len: &str) -> Vec<String> {
        vec![
            format!("{} MACHINE-7", id),
            "Nylon 6".to_string(),
            ts.to_string(),
            shift.to_string(),
            "Op. Ruiz".to_string(),
            "1200".to_string(),
            "Line 2".to_string(),
            "OK".to_string(),
            len.to_string(),
        ]
    }

    #[test]
    fn test_anchor_matches_number_and_token() {
        assert_eq!(match_anchor("101 ABC"), Some("101"));
        assert_eq!(match_anchor("  7\tX-1  "), Some("7"));
    }

    #[test]
    fn test_bare_number_is_not_anchor() {
        assert_eq!(match_anchor("42"), None);
        assert_eq!(match_anchor("42   "), None);
    }

    #[test]
    fn test_non_leading_digits_not_anchor() {
        assert_eq!(match_anchor("ID 42"), None);
        assert_eq!(match_anchor("12.5 m"), None);
        assert_eq!(match_anchor(""), None);
    }

    #[test]
    fn test_non_ascii_digits_not_anchor() {
        // Arabic-Indic digits
        assert_eq!(match_anchor("\u{0661}\u{0662} X"), None);
    }

    #[test]
    fn test_well_formed_block_emits_and_skips_stride() {
        let lines = block("101", "2024-01-01 08:00:00", "A", "10.5");
        let mut cursor = LineCursor::new(&lines, RecordLayout::default());

        let (start, step) = cursor.step().unwrap();
        assert_eq!(start, 0);
        match step {
            Step::Emit { record, advance } => {
                assert_eq!(record, Record::new("101", "2024-01-01 08:00:00", "A", 10.5));
                assert_eq!(advance, 9);
            }
            other => panic!("expected emit, got {:?}", other),
        }
        assert_eq!(cursor.position(), 9);
        assert!(cursor.step().is_none());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let lines = block("5", "  2024-01-01 08:00:00 ", "\tB ", " 3.25\r");
        let steps: Vec<_> = LineCursor::new(&lines, RecordLayout::default()).collect();
        assert_eq!(
            steps[0].1,
            Step::Emit {
                record: Record::new("5", "2024-01-01 08:00:00", "B", 3.25),
                advance: 9
            }
        );
    }

    #[test]
    fn test_bad_length_skips_one_line() {
        let lines = block("101", "2024-01-01 08:00:00", "A", "n/a");
        let mut cursor = LineCursor::new(&lines, RecordLayout::default());
        let (_, step) = cursor.step().unwrap();
        assert_eq!(
            step,
            Step::Skip {
                reason: SkipReason::BadLength("n/a".to_string())
            }
        );
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_negative_length_emitted_as_printed() {
        let lines = block("101", "2024-01-01 08:00:00", "A", "-4.0");
        let mut cursor = LineCursor::new(&lines, RecordLayout::default());
        let (_, step) = cursor.step().unwrap();
        assert_eq!(
            step,
            Step::Emit {
                record: Record::new("101", "2024-01-01 08:00:00", "A", -4.0),
                advance: 9
            }
        );
        assert_eq!(cursor.position(), 9);
    }

    #[test]
    fn test_nan_and_inf_lengths_emit_full_block() {
        for raw in ["nan", "inf", "-Infinity"] {
            let lines = block("7", "2024-01-01 08:00:00", "A", raw);
            let mut cursor = LineCursor::new(&lines, RecordLayout::default());
            let (_, step) = cursor.step().unwrap();
            assert!(matches!(step, Step::Emit { advance: 9, .. }), "{}: {:?}", raw, step);
            assert!(cursor.is_done());
        }
    }

    #[test]
    fn test_truncated_block_at_page_end() {
        let mut lines = block("101", "2024-01-01 08:00:00", "A", "10.5");
        lines.truncate(6);
        let mut cursor = LineCursor::new(&lines, RecordLayout::default());
        let (_, step) = cursor.step().unwrap();
        assert_eq!(
            step,
            Step::Skip {
                reason: SkipReason::Truncated {
                    needed: 9,
                    available: 6
                }
            }
        );
        assert_eq!(cursor.position(), 1);

        // The rest of the lines are scanned without emitting or panicking
        let rest: Vec<_> = cursor.collect();
        assert_eq!(rest.len(), 5);
        assert!(rest.iter().all(|(_, s)| matches!(s, Step::Skip { .. })));
    }

    #[test]
    fn test_stride_longer_than_fields_clamps_at_page_end() {
        let layout = RecordLayout {
            stride: 6,
            timestamp_offset: 1,
            shift_offset: 2,
            length_offset: 3,
        };
        let lines = vec!["9 X", "2024-01-01 08:00:00", "A", "1.0"];
        let mut cursor = LineCursor::new(&lines, layout);
        let (_, step) = cursor.step().unwrap();
        assert!(matches!(step, Step::Emit { advance: 6, .. }));
        assert_eq!(cursor.position(), 4);
        assert!(cursor.is_done());
    }

    #[test]
    fn test_skip_reason_classification() {
        assert!(!SkipReason::NoAnchor.is_rejected_candidate());
        assert!(SkipReason::BadLength("x".into()).is_rejected_candidate());
        assert!(SkipReason::Truncated { needed: 9, available: 2 }.is_rejected_candidate());
    }
}
