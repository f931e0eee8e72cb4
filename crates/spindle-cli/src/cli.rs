//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use spindle_domain::Query;
use std::path::PathBuf;

/// Spindle CLI - Rebuild production records from machine logs and total them by shift.
#[derive(Debug, Parser)]
#[command(name = "spindle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SPINDLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot file path (overrides the configured one)
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (payload or ids only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract records from a document's text and replace the snapshot
    Ingest(IngestArgs),

    /// Total the measured length for a shift and time window
    Total(TotalArgs),

    /// List records in the snapshot
    Records(RecordsArgs),

    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments for the ingest command.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// Text extracted from the machine log, pages separated by form feeds
    pub file: PathBuf,
}

/// Arguments for the total command.
#[derive(Debug, Parser)]
pub struct TotalArgs {
    /// Shift label (exact, case-sensitive)
    #[arg(long, requires_all = ["start", "end"], required_unless_present = "entries")]
    pub shift: Option<String>,

    /// Window start, inclusive (YYYY-MM-DD HH:MM:SS)
    #[arg(long, requires = "shift")]
    pub start: Option<String>,

    /// Window end, inclusive (YYYY-MM-DD HH:MM:SS)
    #[arg(long, requires = "shift")]
    pub end: Option<String>,

    /// Additional entry summed into the same total: SHIFT,START,END
    #[arg(long = "entry", value_parser = parse_entry)]
    pub entries: Vec<Query>,
}

/// Arguments for the records command.
#[derive(Debug, Parser)]
pub struct RecordsArgs {
    /// Only show records for this shift
    #[arg(long)]
    pub shift: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse a `SHIFT,START,END` entry into a query.
pub fn parse_entry(raw: &str) -> Result<Query, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [shift, start, end] => Query::parse(shift, start, end).map_err(|e| e.to_string()),
        _ => Err(format!("expected SHIFT,START,END, got '{}'", raw)),
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
