//! Command pipelines: load, normalize, compare.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assay_ingest::{read_column, read_columns};
use assay_normalize::{NormalizeOptions, NormalizeSummary, Normalized, RawValue, classify_all};
use assay_parity::{ParityOptions, ParityPlot};
use tracing::{info, info_span, trace};

use crate::logging::redact_value;

/// One normalized CSV column.
#[derive(Debug, Clone)]
pub struct NormalizedColumn {
    pub name: String,
    pub raw: Vec<RawValue>,
    pub outcomes: Vec<Normalized>,
    pub summary: NormalizeSummary,
}

impl NormalizedColumn {
    /// Normalize an already-loaded column.
    pub fn from_values(name: String, raw: Vec<RawValue>, options: &NormalizeOptions) -> Self {
        let outcomes = classify_all(&raw, options);
        for (row, (value, outcome)) in raw.iter().zip(&outcomes).enumerate() {
            trace!(
                column = %name,
                row,
                raw = redact_value(&value.to_string()),
                status = outcome.label(),
                "normalized cell"
            );
        }
        let summary = NormalizeSummary::from_outcomes(&outcomes);
        Self {
            name,
            raw,
            outcomes,
            summary,
        }
    }

    /// Normalized values, one per row.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.outcomes.iter().copied().map(Normalized::value).collect()
    }
}

/// Result of the `normalize` command.
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    pub path: PathBuf,
    pub options: NormalizeOptions,
    pub column: NormalizedColumn,
}

/// Result of the `parity` command.
#[derive(Debug, Clone)]
pub struct ParityReport {
    pub path: PathBuf,
    pub predicted: NormalizedColumn,
    pub measured: NormalizedColumn,
    pub plot: ParityPlot,
}

/// Load one column from `path` and normalize it.
pub fn normalize_column(
    path: &Path,
    column: &str,
    options: &NormalizeOptions,
) -> Result<NormalizeReport> {
    let span = info_span!("normalize", path = %path.display(), column);
    let _guard = span.enter();

    let data = read_column(path, column).with_context(|| format!("load column '{column}'"))?;
    let column = NormalizedColumn::from_values(data.name, data.values, options);
    info!(
        rows = column.summary.total,
        resolved = column.summary.resolved(),
        unresolved = column.summary.unresolved(),
        "normalized column"
    );
    Ok(NormalizeReport {
        path: path.to_path_buf(),
        options: *options,
        column,
    })
}

/// Load predicted and measured columns, normalize both, and build parity geometry.
pub fn parity_from_csv(
    path: &Path,
    predicted: &str,
    measured: &str,
    normalize: &NormalizeOptions,
    parity: &ParityOptions,
) -> Result<ParityReport> {
    let span = info_span!("parity", path = %path.display(), predicted, measured);
    let _guard = span.enter();

    let mut columns = read_columns(path, &[predicted, measured])
        .with_context(|| format!("load columns '{predicted}' and '{measured}'"))?
        .into_iter();
    let (Some(predicted_data), Some(measured_data)) = (columns.next(), columns.next()) else {
        anyhow::bail!("expected two columns from {}", path.display());
    };

    let predicted =
        NormalizedColumn::from_values(predicted_data.name, predicted_data.values, normalize);
    let measured =
        NormalizedColumn::from_values(measured_data.name, measured_data.values, normalize);

    let plot = ParityPlot::build(&predicted.values(), &measured.values(), parity)
        .context("build parity plot")?;
    info!(
        points = plot.points.len(),
        dropped = plot.dropped,
        folds = plot.bands.len(),
        "built parity plot"
    );

    Ok(ParityReport {
        path: path.to_path_buf(),
        predicted,
        measured,
        plot,
    })
}
