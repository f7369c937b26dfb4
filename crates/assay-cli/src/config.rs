//! Optional TOML configuration file.
//!
//! ```toml
//! [normalize]
//! remove_lower_than = true
//!
//! [parity]
//! folds = [2.0, 3.0]
//! log_bands = true
//! axis_labels = ["Predicted", "Measured"]
//! ```
//!
//! Every key is optional; missing keys keep their defaults. Command-line
//! flags take precedence over values loaded here.

use std::path::{Path, PathBuf};

use assay_normalize::NormalizeOptions;
use assay_parity::{BandScale, DEFAULT_FOLDS, ParityOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssayConfig {
    pub normalize: NormalizeOptions,
    pub parity: ParityConfig,
}

/// `[parity]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParityConfig {
    pub folds: Vec<f64>,
    pub log_bands: bool,
    pub axis_labels: (String, String),
}

impl Default for ParityConfig {
    fn default() -> Self {
        let defaults = ParityOptions::default();
        Self {
            folds: DEFAULT_FOLDS.to_vec(),
            log_bands: defaults.scale == BandScale::Log,
            axis_labels: defaults.axis_labels,
        }
    }
}

impl ParityConfig {
    /// Convert to the options consumed by the parity builder.
    pub fn to_options(&self) -> ParityOptions {
        ParityOptions::default()
            .with_folds(self.folds.clone())
            .with_scale(BandScale::from_log_flag(self.log_bands))
            .with_axis_labels(self.axis_labels.0.clone(), self.axis_labels.1.clone())
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(contents: &str, path: &Path) -> Result<AssayConfig, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load configuration from a file.
pub fn load_config(path: &Path) -> Result<AssayConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse_config(&contents, path)?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Load from `path` when given, otherwise use defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<AssayConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(AssayConfig::default()),
    }
}
