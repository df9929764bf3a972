//! Lab metrics CLI.

use clap::{ColorChoice, Parser};
use lab_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use crate::commands::{run_evaluate, run_inspect, run_metrics, run_resolve};
use crate::summary::{print_evaluation, print_json, print_measurements, print_resolution};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Evaluate(args) => match run_evaluate(&args) {
            Ok(report) => emit(args.format, &report, print_evaluation, 0),
            Err(error) => report_error(&error),
        },
        Command::Inspect(args) => match run_inspect(&args) {
            Ok(rows) => emit(args.format, &rows, |rows| print_measurements(rows), 0),
            Err(error) => report_error(&error),
        },
        Command::Resolve(args) => match run_resolve(&args) {
            Ok(outcome) => {
                let code = if outcome.is_resolved() { 0 } else { 1 };
                emit(args.format, &outcome, print_resolution, code)
            }
            Err(error) => report_error(&error),
        },
        Command::Metrics => match run_metrics() {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

/// Print a command result as a table or JSON, returning `code` on success.
fn emit<T: serde::Serialize>(
    format: OutputFormatArg,
    value: &T,
    table: impl FnOnce(&T),
    code: i32,
) -> i32 {
    match format {
        OutputFormatArg::Table => {
            table(value);
            code
        }
        OutputFormatArg::Json => match print_json(value) {
            Ok(()) => code,
            Err(error) => {
                eprintln!("error: failed to serialize output: {error}");
                1
            }
        },
    }
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config.log_data = cli.log_data;
    config
}
