//! Parity plot geometry.
//!
//! A parity plot scatters predicted (x) against measured (y) values on a
//! square canvas with a dashed unity line and shaded fold error bands. This
//! module computes everything a renderer needs: the shared axis limits, the
//! unity segment, one band polygon per fold, and how many points each band
//! captures.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ParityError, Result};
use crate::options::{BandScale, ParityOptions};

/// Padding added on both sides of the data range.
pub const AXIS_PADDING: f64 = 1.0;

/// Shared limits for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLimits {
    pub lower: f64,
    pub upper: f64,
}

impl AxisLimits {
    /// Limits covering every point on both axes, padded by [`AXIS_PADDING`].
    fn from_points(points: &[(f64, f64)]) -> Self {
        let (min, max) = points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), &(x, y)| (min.min(x).min(y), max.max(x).max(y)),
        );
        Self {
            lower: min - AXIS_PADDING,
            upper: max + AXIS_PADDING,
        }
    }

    /// Endpoints of the unity line `y = x` across the limits.
    pub fn unity_line(&self) -> [(f64, f64); 2] {
        [(self.lower, self.lower), (self.upper, self.upper)]
    }
}

/// One fold error band, evaluated at both axis limits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldBand {
    pub fold: f64,
    /// Lower edge at the lower and upper x limit.
    pub lower_edge: (f64, f64),
    /// Upper edge at the lower and upper x limit.
    pub upper_edge: (f64, f64),
    /// Points whose measured value falls inside the band.
    pub within: usize,
    /// `within` as a fraction of all plotted points.
    pub coverage: f64,
}

/// Everything needed to draw a parity plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParityPlot {
    /// Complete `(predicted, measured)` pairs in input order.
    pub points: Vec<(f64, f64)>,
    /// Rows skipped because one side was missing.
    pub dropped: usize,
    pub limits: AxisLimits,
    pub scale: BandScale,
    pub bands: Vec<FoldBand>,
    pub axis_labels: (String, String),
}

impl ParityPlot {
    /// Build the plot geometry from two aligned series.
    ///
    /// Rows where either side is `None` are dropped. Fails if the series
    /// differ in length, no complete row remains, a complete row holds an
    /// infinite value, or a fold factor is unusable.
    pub fn build(
        predicted: &[Option<f64>],
        measured: &[Option<f64>],
        options: &ParityOptions,
    ) -> Result<Self> {
        if predicted.len() != measured.len() {
            return Err(ParityError::LengthMismatch {
                predicted: predicted.len(),
                measured: measured.len(),
            });
        }
        options.validate()?;

        let points = complete_pairs(predicted, measured)?;
        let dropped = predicted.len() - points.len();
        if points.is_empty() {
            return Err(ParityError::NoCompletePairs {
                total: predicted.len(),
            });
        }
        if dropped > 0 {
            warn!(
                dropped,
                total = predicted.len(),
                "dropped rows with a missing predicted or measured value"
            );
        }

        let limits = AxisLimits::from_points(&points);
        let bands = options
            .folds
            .iter()
            .map(|&fold| fold_band(&points, limits, options.scale, fold))
            .collect();

        debug!(
            points = points.len(),
            lower = limits.lower,
            upper = limits.upper,
            "built parity plot"
        );

        Ok(Self {
            points,
            dropped,
            limits,
            scale: options.scale,
            bands,
            axis_labels: options.axis_labels.clone(),
        })
    }

    /// Look up the band for a fold factor.
    pub fn band(&self, fold: f64) -> Option<&FoldBand> {
        self.bands.iter().find(|band| band.fold == fold)
    }
}

/// Collect rows where both sides are present.
fn complete_pairs(
    predicted: &[Option<f64>],
    measured: &[Option<f64>],
) -> Result<Vec<(f64, f64)>> {
    let mut points = Vec::with_capacity(predicted.len());
    for (index, pair) in predicted.iter().zip(measured).enumerate() {
        let (Some(x), Some(y)) = pair else {
            continue;
        };
        // NaN is treated as absent, like a missing cell.
        if x.is_nan() || y.is_nan() {
            continue;
        }
        if x.is_infinite() || y.is_infinite() {
            return Err(ParityError::NonFiniteValue {
                index,
                predicted: *x,
                measured: *y,
            });
        }
        points.push((*x, *y));
    }
    Ok(points)
}

fn fold_band(points: &[(f64, f64)], limits: AxisLimits, scale: BandScale, fold: f64) -> FoldBand {
    let (lower_at_low, upper_at_low) = scale.band_at(limits.lower, fold);
    let (lower_at_high, upper_at_high) = scale.band_at(limits.upper, fold);
    let within = points
        .iter()
        .filter(|&&(x, y)| scale.within(x, y, fold))
        .count();
    let coverage = within as f64 / points.len() as f64;
    FoldBand {
        fold,
        lower_edge: (lower_at_low, lower_at_high),
        upper_edge: (upper_at_low, upper_at_high),
        within,
        coverage,
    }
}
