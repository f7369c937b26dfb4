//! Assay measurement CLI.

use assay_cli::config::load_or_default;
use assay_cli::logging::{LogConfig, LogFormat, init_logging};
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_normalize, run_parity};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // Help and version go to stdout and succeed; usage errors exit 1.
            let exit_code = if error.use_stderr() { 1 } else { 0 };
            let _ = error.print();
            std::process::exit(exit_code);
        }
    };
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = match load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };
    let result = match &cli.command {
        Command::Normalize(args) => run_normalize(args, &config),
        Command::Parity(args) => run_parity(args, &config),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["assay"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["normalize", "results.csv", "-c", "value"]);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_defer_to_rust_log() {
        let config = log_config_from_cli(&parse(&[]));
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.with_timestamps);
        assert!(!config.log_data);
    }

    #[test]
    fn verbosity_flags_pin_level() {
        let config = log_config_from_cli(&parse(&["-vv"]));
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn explicit_log_level_wins_over_verbosity() {
        let config = log_config_from_cli(&parse(&["-v", "--log-level", "trace"]));
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn log_output_flags_are_applied() {
        let config = log_config_from_cli(&parse(&[
            "--log-format",
            "json",
            "--log-file",
            "assay.log",
            "--log-data",
            "--log-timestamps",
            "--color",
            "never",
        ]));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("assay.log")));
        assert!(config.log_data);
        assert!(config.with_timestamps);
        assert!(!config.with_ansi);
    }
}
