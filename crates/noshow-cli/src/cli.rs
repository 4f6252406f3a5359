//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use noshow_model::BinningRule;

#[derive(Parser)]
#[command(
    name = "noshow",
    version,
    about = "Medical appointment no-show analysis",
    long_about = "Load a medical appointments dataset, normalize and filter it,\n\
                  and compute the no-show dashboard aggregates."
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

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow row-level values (e.g. neighbourhood names) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pipeline on a dataset and report the aggregates.
    Report(ReportArgs),

    /// Print the raw-to-clean column contract.
    Columns,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Dataset CSV file, or a directory containing it.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// JSON file with pipeline options; flags below override its fields.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File name to look for when SOURCE is a directory.
    #[arg(long = "file-name", value_name = "NAME")]
    pub file_name: Option<String>,

    /// Lowest age kept by the validity filter.
    #[arg(long = "min-age", value_name = "YEARS", allow_negative_numbers = true)]
    pub min_age: Option<i64>,

    /// Highest age kept by the validity filter.
    #[arg(long = "max-age", value_name = "YEARS", allow_negative_numbers = true)]
    pub max_age: Option<i64>,

    /// Number of neighbourhoods in the top rankings.
    #[arg(long = "top-k", value_name = "K")]
    pub top_k: Option<usize>,

    /// Waiting-days histogram binning: sturges, width:N or count:N.
    #[arg(long = "bins", value_name = "RULE")]
    pub bins: Option<BinningRule>,

    /// Write the full report as JSON.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write one CSV per aggregate table into this directory.
    #[arg(long = "tables-dir", value_name = "DIR")]
    pub tables_dir: Option<PathBuf>,

    /// Write the filtered cleaned table as CSV.
    #[arg(long = "cleaned", value_name = "FILE")]
    pub cleaned: Option<PathBuf>,

    /// Skip the terminal summary.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
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
