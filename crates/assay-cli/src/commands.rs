use anyhow::{Context, Result};
use assay_cli::config::AssayConfig;
use assay_cli::pipeline::{NormalizeReport, ParityReport, normalize_column, parity_from_csv};
use assay_normalize::NormalizeOptions;
use assay_parity::{BandScale, ParityOptions};

use crate::cli::{NormalizeArgs, OutputFormatArg, ParityArgs};
use crate::summary::{print_normalize_summary, print_parity_summary};

pub fn run_normalize(args: &NormalizeArgs, config: &AssayConfig) -> Result<()> {
    let options = normalize_options(args.keep_censored, config);
    let report = normalize_column(&args.csv, &args.column, &options)?;
    match args.format {
        OutputFormatArg::Table => print_normalize_summary(&report),
        OutputFormatArg::Json => print_json(&normalize_json(&report))?,
    }
    Ok(())
}

pub fn run_parity(args: &ParityArgs, config: &AssayConfig) -> Result<()> {
    let normalize = normalize_options(args.keep_censored, config);
    let parity = parity_options(args, config);
    let report = parity_from_csv(
        &args.csv,
        &args.predicted,
        &args.measured,
        &normalize,
        &parity,
    )?;
    match args.format {
        OutputFormatArg::Table => print_parity_summary(&report),
        OutputFormatArg::Json => print_json(&parity_json(&report))?,
    }
    Ok(())
}

/// `--keep-censored` wins over the config file.
fn normalize_options(keep_censored: bool, config: &AssayConfig) -> NormalizeOptions {
    if keep_censored {
        config.normalize.with_remove_lower_than(false)
    } else {
        config.normalize
    }
}

/// Command-line values win over the config file, which wins over defaults.
fn parity_options(args: &ParityArgs, config: &AssayConfig) -> ParityOptions {
    let mut options = config.parity.to_options();
    if !args.folds.is_empty() {
        options = options.with_folds(args.folds.clone());
    }
    if args.linear_bands {
        options = options.with_scale(BandScale::Linear);
    }
    let (x_label, y_label) = options.axis_labels.clone();
    options.with_axis_labels(
        args.x_label.clone().unwrap_or(x_label),
        args.y_label.clone().unwrap_or(y_label),
    )
}

fn normalize_json(report: &NormalizeReport) -> serde_json::Value {
    serde_json::json!({
        "column": report.column.name,
        "remove_lower_than": report.options.remove_lower_than,
        "values": report.column.values(),
        "summary": report.column.summary,
    })
}

fn parity_json(report: &ParityReport) -> serde_json::Value {
    serde_json::json!({
        "predicted": report.predicted.name,
        "measured": report.measured.name,
        "plot": report.plot,
    })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize JSON output")?;
    println!("{text}");
    Ok(())
}
