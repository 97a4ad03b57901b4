//! CLI argument definitions for the lumen recommendation engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lumen",
    version,
    about = "Lumen - dashboard template and KPI recommendation engine",
    long_about = "Recommend industry-tailored dashboard layouts for tabular data.\n\n\
                  Given a CSV dataset and an industry, lumen picks a template\n\
                  variation, binds each chart's semantic roles to real columns,\n\
                  and computes aggregate KPI values."
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
    /// Recommend charts and KPIs for a dataset.
    Recommend(RecommendArgs),

    /// List the template pool for an industry (for a template picker).
    Templates(TemplatesArgs),

    /// List all known industry keys.
    Industries,
}

#[derive(Parser)]
pub struct RecommendArgs {
    /// Path to the CSV dataset.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,

    /// Free-text industry identifier (e.g. "finance", "SFW CRM").
    ///
    /// Normalized by substring matching; unrecognized input falls back
    /// to retail.
    #[arg(long = "industry", value_name = "IDENTIFIER")]
    pub industry: Option<String>,

    /// Template id, "template1" through "template10".
    #[arg(long = "template", value_name = "ID", default_value = "template1")]
    pub template: String,

    /// JSON override bundle replacing built-in KPIs/templates per industry.
    #[arg(long = "overrides", value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Column to prefer for count-aggregated KPIs.
    #[arg(long = "category-column", value_name = "COLUMN")]
    pub category_column: Option<String>,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TemplatesArgs {
    /// Free-text industry identifier; defaults to retail.
    #[arg(long = "industry", value_name = "IDENTIFIER")]
    pub industry: Option<String>,

    /// JSON override bundle replacing built-in KPIs/templates per industry.
    #[arg(long = "overrides", value_name = "FILE")]
    pub overrides: Option<PathBuf>,
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
