//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ndc",
    version,
    about = "PTU A560 debit-note notice generator",
    long_about = "Generate PTU A560 debit-note notices from a tabular export.\n\n\
                  One XML artifact per data row, sealed with an MD5 content digest\n\
                  and optionally wrapped in a ZIP archive."
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

    /// Log output format (pretty for human, json for machine parsing).
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

    /// Allow cell values (personal data) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file (default: ./ndc.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate one notice per row of the input file.
    Generate(GenerateArgs),

    /// Print the notice for a single row without writing anything.
    Inspect(InspectArgs),

    /// List the source field names the mapper reads.
    Fields,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// CSV export or workbook (.xlsx, .xls, .ods) whose first row holds the field names.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for artifacts (overrides `output_dir`).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Leave plain XML artifacts instead of ZIP archives.
    #[arg(long = "no-archive")]
    pub no_archive: bool,

    /// Keep the plain artifact next to its archive.
    #[arg(long = "keep-original")]
    pub keep_original: bool,

    /// Fail records whose essential fields are blank.
    #[arg(long = "require-fields")]
    pub require_fields: bool,

    /// Transform and hash every row without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the batch report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Field delimiter (sniffed from the header line by default).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV export or workbook (.xlsx, .xls, .ods) whose first row holds the field names.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Spreadsheet row to render (the first data row is 2).
    #[arg(long = "row", value_name = "N", default_value_t = 2)]
    pub row: usize,

    /// Field delimiter (sniffed from the header line by default).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,
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
