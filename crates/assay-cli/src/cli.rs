//! CLI argument definitions for the assay tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "assay",
    version,
    about = "Normalize assay measurement columns and compare predictions with parity bands",
    long_about = "Normalize assay measurement columns and compare predictions with parity \
                  bands.\n\n\
                  Text results such as '3.7 mg' are reduced to their number; censored\n\
                  results such as '<0.5' are dropped unless --keep-censored is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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

    /// Prefix human-readable log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow raw cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize one CSV column to numbers.
    Normalize(NormalizeArgs),

    /// Compare predicted and measured columns with fold error bands.
    Parity(ParityArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// CSV file to read.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Column to normalize.
    #[arg(long = "column", short = 'c', value_name = "NAME")]
    pub column: String,

    /// Parse censored values such as '<5' instead of treating them as missing.
    #[arg(long = "keep-censored")]
    pub keep_censored: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ParityArgs {
    /// CSV file to read.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Column holding predicted values (x axis).
    #[arg(long = "predicted", value_name = "NAME")]
    pub predicted: String,

    /// Column holding measured values (y axis).
    #[arg(long = "measured", value_name = "NAME")]
    pub measured: String,

    /// Fold factor to evaluate; repeat or comma-separate (default: 2,3).
    #[arg(long = "fold", value_name = "FOLD", value_delimiter = ',')]
    pub folds: Vec<f64>,

    /// Multiplicative bands for data on its natural scale (default: log10-additive bands).
    #[arg(long = "linear-bands")]
    pub linear_bands: bool,

    /// Parse censored values such as '<5' instead of treating them as missing.
    #[arg(long = "keep-censored")]
    pub keep_censored: bool,

    /// X axis label.
    #[arg(long = "x-label", value_name = "LABEL")]
    pub x_label: Option<String>,

    /// Y axis label.
    #[arg(long = "y-label", value_name = "LABEL")]
    pub y_label: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fold_accepts_commas_and_repeats() {
        let cli = Cli::try_parse_from([
            "assay",
            "parity",
            "results.csv",
            "--predicted",
            "pred",
            "--measured",
            "obs",
            "--fold",
            "2,5",
            "--fold",
            "10",
        ])
        .unwrap();
        let Command::Parity(args) = cli.command else {
            panic!("expected parity command");
        };
        assert_eq!(args.folds, vec![2.0, 5.0, 10.0]);
        assert!(!args.linear_bands);
    }

    #[test]
    fn normalize_requires_column() {
        assert!(Cli::try_parse_from(["assay", "normalize", "results.csv"]).is_err());
        let cli = Cli::try_parse_from([
            "assay",
            "normalize",
            "results.csv",
            "-c",
            "value",
            "--keep-censored",
        ])
        .unwrap();
        let Command::Normalize(args) = cli.command else {
            panic!("expected normalize command");
        };
        assert_eq!(args.column, "value");
        assert!(args.keep_censored);
    }
}
