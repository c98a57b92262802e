//! CLI argument definitions for the ledger intake tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use intake_cli::config::{CONFIG_ENV, ConfigOverrides};
use intake_core::Source;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Validate and load NetSuite, Salesforce and Anrok CSV exports",
    long_about = "Validate and load NetSuite, Salesforce and Anrok CSV exports.\n\n\
                  Each data row is checked against the report's column schema. Valid\n\
                  rows are stored; rejected rows are written to a failure log with\n\
                  the reason in the first column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include cell values in trace logs.
    ///
    /// Exports carry customer names and amounts. Values are redacted unless
    /// this flag is given.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload one export file.
    Upload(UploadArgs),

    /// List sources, report keys and their columns.
    Reports(ReportsArgs),

    /// Locate the header row of an export without uploading it.
    CheckHeader(CheckHeaderArgs),
}

/// Which report a file holds.
#[derive(Args)]
pub struct TargetArgs {
    /// Source system (ns, sfdc, anrok).
    #[arg(value_name = "SOURCE")]
    pub source: Source,

    /// Report key within the source, e.g. SO_line_item_detail.
    #[arg(value_name = "REPORT")]
    pub report: String,

    /// CSV export to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Ingest tunables shared by commands that read a file.
#[derive(Args)]
pub struct IngestArgs {
    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Reject files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Number of leading rows searched for the header.
    #[arg(long = "header-search-rows", value_name = "N")]
    pub header_search_rows: Option<usize>,

    /// Two-digit years more than this many years past the reference year
    /// are read as 19xx.
    #[arg(long = "pivot-window", value_name = "YEARS")]
    pub pivot_window: Option<i32>,

    /// Reference year for two-digit years (default: current year).
    #[arg(long = "reference-year", value_name = "YEAR")]
    pub reference_year: Option<i32>,

    /// Input encoding label, e.g. utf-8, windows-1252, utf-16le.
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,
}

impl IngestArgs {
    pub fn overrides(&self, failure_dir: Option<PathBuf>) -> ConfigOverrides {
        ConfigOverrides {
            max_file_size: self.max_file_size,
            header_search_rows: self.header_search_rows,
            pivot_window: self.pivot_window,
            reference_year: self.reference_year,
            encoding: self.encoding.clone(),
            failure_dir,
        }
    }
}

#[derive(Args)]
pub struct UploadArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub ingest: IngestArgs,

    /// Directory for the JSON-lines tables.
    #[arg(long = "out-dir", value_name = "DIR", default_value = "intake-out")]
    pub out_dir: PathBuf,

    /// Directory for the failure log (default: next to the input file).
    #[arg(long = "failure-dir", value_name = "DIR")]
    pub failure_dir: Option<PathBuf>,

    /// Stop the run after this many seconds.
    #[arg(long = "timeout-secs", value_name = "N")]
    pub timeout_secs: Option<u64>,

    /// Validate every row and write the failure log without storing records.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ReportsArgs {
    /// Only list reports for this source.
    #[arg(value_name = "SOURCE")]
    pub source: Option<Source>,
}

#[derive(Args)]
pub struct CheckHeaderArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub ingest: IngestArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
