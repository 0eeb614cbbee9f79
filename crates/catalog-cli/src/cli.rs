//! CLI argument definitions for the course catalog browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "course-catalog",
    version,
    about = "Browse a course catalog from the command line",
    long_about = "Load a JSON course catalog and query it: list courses,\n\
                  look one up by acronym, search free text, or filter by year."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the catalog JSON file (default: COURSE_CATALOG_PATH or
    /// Course-Subject.json in the working directory).
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

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
    /// List every course in the catalog.
    List,

    /// Show one course in detail.
    Show(ShowArgs),

    /// Search course names and overviews for a substring.
    Search(SearchArgs),

    /// List courses that offer modules in a given year.
    Year(YearArgs),

    /// List a course's modules, optionally restricted to one year.
    Modules(ModulesArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Course acronym, matched exactly (case-sensitive).
    #[arg(value_name = "ACRONYM")]
    pub acronym: String,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Substring to look for, case-insensitively.
    #[arg(value_name = "QUERY")]
    pub query: String,
}

#[derive(Parser)]
pub struct YearArgs {
    /// Year number (1 for year_1, and so on).
    #[arg(value_name = "YEAR")]
    pub year: u32,
}

#[derive(Parser)]
pub struct ModulesArgs {
    /// Course acronym, matched exactly (case-sensitive).
    #[arg(value_name = "ACRONYM")]
    pub acronym: String,

    /// Restrict the listing to a single year.
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<u32>,
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
