//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use spindle_domain::{AggregateOutcome, Record};
use spindle_extractor::ExtractionReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format records output.
    pub fn format_records(&self, records: &[Record]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => Ok(self.format_records_quiet(records)),
        }
    }

    /// Format records as a table.
    fn format_records_table(&self, records: &[Record]) -> String {
        if records.is_empty() {
            return self.colorize("No records found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Timestamp", "Shift", "Length"]);

        for record in records {
            builder.push_record([
                record.id.clone(),
                record.timestamp.clone(),
                record.shift.clone(),
                format!("{:.2}", record.actual_length),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format records in quiet mode (IDs only).
    fn format_records_quiet(&self, records: &[Record]) -> String {
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.join("\n")
    }

    /// Format an aggregation outcome.
    pub fn format_outcome(&self, outcome: &AggregateOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = serde_json::to_value(outcome)?;
                if let (Some(payload), Some(obj)) = (outcome.barcode_payload(), value.as_object_mut()) {
                    obj.insert("payload".to_string(), serde_json::Value::String(payload));
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(match outcome {
                AggregateOutcome::Total { matched, .. } => format!(
                    "{}\n{}",
                    self.colorize(&outcome.barcode_payload().unwrap_or_default(), "cyan"),
                    self.info(&format!("{} matching record(s)", matched))
                ),
                AggregateOutcome::NoData => self.warning("No data in range."),
            }),
            OutputFormat::Quiet => Ok(outcome.barcode_payload().unwrap_or_default()),
        }
    }

    /// Format an ingest summary.
    pub fn ingest_summary(&self, report: &ExtractionReport) -> String {
        let mut msg = self.success(&format!(
            "Data loaded: {} entries from {} page(s)",
            report.records_emitted, report.pages_scanned
        ));
        if !report.failures.is_empty() {
            msg.push('\n');
            msg.push_str(&self.warning(&format!(
                "{} candidate block(s) skipped ({} truncated, {} bad length)",
                report.failures.len(),
                report.truncated_count(),
                report.bad_length_count()
            )));
        }
        if !report.irregular.is_empty() {
            msg.push('\n');
            msg.push_str(&self.warning(&format!(
                "{} record(s) kept with a negative or non-finite length",
                report.irregular.len()
            )));
        }
        msg
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_records() -> Vec<Record> {
        vec![
            Record::new("101", "2024-01-01 08:00:00", "A", 10.5),
            Record::new("102", "2024-01-01 09:00:00", "B", 5.0),
        ]
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_records(&create_test_records()).unwrap();
        assert!(output.contains("actual_length"));
        assert!(output.contains("\"shift\": \"A\""));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_records(&create_test_records()).unwrap();
        assert_eq!(output, "101\n102");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&create_test_records()).unwrap();
        assert!(output.contains("Timestamp"));
        assert!(output.contains("10.50"));
    }

    #[test]
    fn test_empty_records() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&[]).unwrap();
        assert!(output.contains("No records found"));
    }

    #[test]
    fn test_outcome_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let outcome = AggregateOutcome::Total { total: 10.5, matched: 1 };
        let output = formatter.format_outcome(&outcome).unwrap();
        assert!(output.starts_with("TOTAL : 10.50"));
        assert!(output.contains("1 matching record(s)"));
    }

    #[test]
    fn test_no_data_is_explicit() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_outcome(&AggregateOutcome::NoData).unwrap();
        assert_eq!(output, "⚠ No data in range.");

        let zero = AggregateOutcome::Total { total: 0.0, matched: 3 };
        assert!(formatter.format_outcome(&zero).unwrap().contains("TOTAL : 0.00"));
    }

    #[test]
    fn test_outcome_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let outcome = AggregateOutcome::Total { total: 2.0, matched: 2 };
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_outcome(&outcome).unwrap()).unwrap();
        assert_eq!(value["status"], "total");
        assert_eq!(value["payload"], "TOTAL : 2.00");
        assert_eq!(value["matched"], 2);

        let no_data: serde_json::Value =
            serde_json::from_str(&formatter.format_outcome(&AggregateOutcome::NoData).unwrap())
                .unwrap();
        assert_eq!(no_data["status"], "no_data");
        assert!(no_data.get("payload").is_none());
    }

    #[test]
    fn test_outcome_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let outcome = AggregateOutcome::Total { total: 7.456, matched: 1 };
        assert_eq!(formatter.format_outcome(&outcome).unwrap(), "TOTAL : 7.46");
    }

    #[test]
    fn test_ingest_summary_flags_irregular_lengths() {
        use spindle_domain::RecordError;
        use spindle_extractor::IrregularRecord;

        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut report = ExtractionReport {
            pages_scanned: 1,
            lines_scanned: 18,
            records_emitted: 2,
            ..ExtractionReport::default()
        };
        assert_eq!(
            formatter.ingest_summary(&report),
            "✓ Data loaded: 2 entries from 1 page(s)"
        );

        report.irregular.push(IrregularRecord {
            page: 0,
            line: 9,
            id: "2".to_string(),
            error: RecordError::InvalidLength(-4.0),
        });
        let summary = formatter.ingest_summary(&report);
        assert!(summary.ends_with("⚠ 1 record(s) kept with a negative or non-finite length"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
