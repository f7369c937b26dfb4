//! Parity plot geometry for predicted vs. measured comparisons.
//!
//! Computes the square axis limits, unity line, and fold error bands of a
//! parity plot, plus the share of points each band captures. Rendering is
//! left to the caller.
//!
//! # Example
//!
//! ```
//! use assay_parity::{BandScale, ParityOptions, ParityPlot};
//!
//! let predicted = [Some(1.0), Some(2.0), Some(4.0)];
//! let measured = [Some(1.5), Some(2.0), Some(9.0)];
//! let options = ParityOptions::default()
//!     .with_folds(vec![2.0])
//!     .with_scale(BandScale::Linear);
//!
//! let plot = ParityPlot::build(&predicted, &measured, &options)?;
//! assert_eq!(plot.limits.lower, 0.0);
//! assert_eq!(plot.limits.upper, 10.0);
//! assert_eq!(plot.bands[0].within, 2);
//! # Ok::<(), assay_parity::ParityError>(())
//! ```

mod error;
mod options;
mod plot;

pub use error::{ParityError, Result};
pub use options::{BandScale, DEFAULT_FOLDS, ParityOptions};
pub use plot::{AXIS_PADDING, AxisLimits, FoldBand, ParityPlot};
