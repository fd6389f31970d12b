//! CLI argument definitions for chartab.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "chartab",
    version,
    about = "chartab - tabulate spreadsheet data for charting",
    long_about = "Turn a decoded table (CSV file or JSON row array) into the two\n\
                  chart-feeding views: per-column value frequencies and pairwise\n\
                  metric aggregations. Both commands print a JSON body on stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Count distinct values per column across the whole table.
    Tabulate(TabulateArgs),

    /// Sum a numeric metric column under two grouping columns.
    Aggregate(AggregateArgs),
}

#[derive(Parser)]
pub struct TabulateArgs {
    /// Source table: a .csv file, or a JSON array of row objects.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Render a human-readable per-column overview instead of JSON.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Pretty-print the JSON body.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Parser)]
pub struct AggregateArgs {
    /// Source table: a .csv file, or a JSON array of row objects.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Primary grouping column.
    #[arg(long = "column1", value_name = "COLUMN")]
    pub column1: String,

    /// Secondary grouping column.
    #[arg(long = "column2", value_name = "COLUMN")]
    pub column2: String,

    /// Numeric metric column to sum.
    #[arg(long = "metric", value_name = "COLUMN")]
    pub metric: String,

    /// Pretty-print the JSON body.
    #[arg(long = "pretty")]
    pub pretty: bool,
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
