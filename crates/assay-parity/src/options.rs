//! Parity plot options.

use serde::{Deserialize, Serialize};

use crate::error::{ParityError, Result};

/// Default fold factors drawn around the unity line.
pub const DEFAULT_FOLDS: [f64; 2] = [2.0, 3.0];

/// How a fold factor is turned into a band around the unity line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandScale {
    /// Data is already log10-transformed; a fold is an additive offset of `log10(fold)`.
    #[default]
    Log,
    /// Data is on its natural scale; a fold multiplies and divides.
    Linear,
}

impl BandScale {
    /// Build from the `log_errorbands` style boolean.
    pub fn from_log_flag(log: bool) -> Self {
        if log { BandScale::Log } else { BandScale::Linear }
    }

    /// Lower and upper band edge for `x` at the given fold.
    pub fn band_at(self, x: f64, fold: f64) -> (f64, f64) {
        match self {
            BandScale::Log => {
                let offset = fold.log10();
                (x - offset, x + offset)
            }
            BandScale::Linear => (x / fold, x * fold),
        }
    }

    /// Returns true if `measured` lies inside the fold band around `predicted`.
    ///
    /// Edges are inclusive. In linear scale the edges are ordered first, so
    /// negative predictions still get a proper interval.
    pub fn within(self, predicted: f64, measured: f64, fold: f64) -> bool {
        let (a, b) = self.band_at(predicted, fold);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        (low..=high).contains(&measured)
    }
}

/// Options for building a parity plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParityOptions {
    /// Fold factors to draw, in order.
    pub folds: Vec<f64>,
    /// Band construction.
    pub scale: BandScale,
    /// X and Y axis labels.
    pub axis_labels: (String, String),
}

impl Default for ParityOptions {
    fn default() -> Self {
        Self {
            folds: DEFAULT_FOLDS.to_vec(),
            scale: BandScale::default(),
            axis_labels: ("Predicted".to_string(), "Measured".to_string()),
        }
    }
}

impl ParityOptions {
    /// Replace the fold factors.
    #[must_use]
    pub fn with_folds(mut self, folds: Vec<f64>) -> Self {
        self.folds = folds;
        self
    }

    /// Set the band scale.
    #[must_use]
    pub fn with_scale(mut self, scale: BandScale) -> Self {
        self.scale = scale;
        self
    }

    /// Set the axis labels.
    #[must_use]
    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.axis_labels = (x.into(), y.into());
        self
    }

    /// Check that every fold is usable.
    pub fn validate(&self) -> Result<()> {
        if self.folds.is_empty() {
            return Err(ParityError::NoFolds);
        }
        if let Some(&fold) = self.folds.iter().find(|f| !f.is_finite() || **f <= 0.0) {
            return Err(ParityError::InvalidFold { fold });
        }
        Ok(())
    }
}
