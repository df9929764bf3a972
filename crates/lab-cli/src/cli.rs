//! CLI argument definitions for `labmetrics`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use lab_map::VariantPreference;
use lab_model::{MetricKind, Race, Sex};

#[derive(Parser)]
#[command(
    name = "labmetrics",
    version,
    about = "Resolve lab measurements and compute composite biomarkers",
    long_about = "Resolve analytes in extracted lab reports and compute composite indices.\n\n\
                  Supports eGFR (CKD-EPI 2021), FIB-4, De Ritis, AIP, TG/HDL, TC/HDL,\n\
                  NLR and HbA1c with estimated average glucose."
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

    /// Allow measurement values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute composite metrics from a measurements file.
    Evaluate(EvaluateArgs),

    /// Show how each measurement is indexed.
    Inspect(InspectArgs),

    /// Resolve a single analyte by alias.
    Resolve(ResolveArgs),

    /// List supported composite metrics.
    Metrics,
}

#[derive(Parser)]
pub struct EvaluateArgs {
    /// JSON file: an array of measurements or {measurements, demographics}.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Patient sex (overrides the file).
    #[arg(long = "sex", value_enum)]
    pub sex: Option<SexArg>,

    /// Patient age in years (overrides the file).
    #[arg(long = "age", value_parser = clap::value_parser!(u32).range(1..))]
    pub age: Option<u32>,

    /// Patient race (overrides the file; no formula uses it).
    #[arg(long = "race", value_enum)]
    pub race: Option<RaceArg>,

    /// Only compute these metrics (repeatable or comma separated).
    #[arg(long = "only", value_enum, value_delimiter = ',')]
    pub only: Vec<MetricArg>,

    /// JSON file with extra aliases per analyte.
    #[arg(long = "aliases", value_name = "FILE")]
    pub aliases: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// JSON file: an array of measurements or {measurements, demographics}.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// JSON file: an array of measurements or {measurements, demographics}.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Candidate analyte name, highest priority first (repeatable).
    #[arg(long = "alias", required = true)]
    pub aliases: Vec<String>,

    /// Leukocyte differential variant to prefer.
    #[arg(long = "prefer", value_enum, default_value = "any")]
    pub prefer: PreferArg,

    /// Number of nearest keys to suggest when nothing resolves.
    #[arg(long = "suggestions", default_value_t = 5)]
    pub suggestions: usize,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RaceArg {
    Black,
    NonBlack,
    Unspecified,
}

impl From<RaceArg> for Race {
    fn from(arg: RaceArg) -> Self {
        match arg {
            RaceArg::Black => Race::Black,
            RaceArg::NonBlack => Race::NonBlack,
            RaceArg::Unspecified => Race::Unspecified,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Egfr,
    Fib4,
    DeRitis,
    Aip,
    TgHdl,
    TcHdl,
    Nlr,
    Hba1c,
}

impl From<MetricArg> for MetricKind {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Egfr => MetricKind::Egfr,
            MetricArg::Fib4 => MetricKind::Fib4,
            MetricArg::DeRitis => MetricKind::DeRitis,
            MetricArg::Aip => MetricKind::Aip,
            MetricArg::TgHdl => MetricKind::TgHdl,
            MetricArg::TcHdl => MetricKind::TcHdl,
            MetricArg::Nlr => MetricKind::Nlr,
            MetricArg::Hba1c => MetricKind::HbA1c,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PreferArg {
    Absolute,
    Percentage,
    Any,
}

impl From<PreferArg> for VariantPreference {
    fn from(arg: PreferArg) -> Self {
        match arg {
            PreferArg::Absolute => VariantPreference::Absolute,
            PreferArg::Percentage => VariantPreference::Percentage,
            PreferArg::Any => VariantPreference::Any,
        }
    }
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
