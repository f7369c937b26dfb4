//! Numeric list normalizer.
//!
//! Coerces an ordered list of [`RawValue`]s into `Option<f64>` values of the
//! same length and order. Each element is resolved independently:
//!
//! 1. Numeric input is copied through (`Integer` widened to `f64`).
//! 2. Text containing `<` is dropped when `remove_lower_than` is set.
//! 3. Other text yields its first embedded decimal number.
//! 4. Anything left over is missing (`None`).
//!
//! Nothing here fails: values that cannot be resolved degrade to `None`.
//! [`classify`] exposes *why* a value resolved the way it did.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::normalization::numeric::{extract_number, is_censored};
use crate::value::RawValue;

/// Options controlling normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Treat text carrying a `<` marker as missing.
    ///
    /// When false, `"<5"` falls through to number extraction and yields `5.0`.
    pub remove_lower_than: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            remove_lower_than: true,
        }
    }
}

impl NormalizeOptions {
    /// Set the less-than policy.
    #[must_use]
    pub fn with_remove_lower_than(mut self, enable: bool) -> Self {
        self.remove_lower_than = enable;
        self
    }
}

/// Outcome of normalizing one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Normalized {
    /// Input was already numeric.
    Numeric(f64),
    /// Number extracted from text.
    Extracted(f64),
    /// Censored text dropped by the less-than policy.
    Censored,
    /// Text with no embedded number.
    Unparseable,
    /// Input was absent (null, empty, NaN).
    Missing,
}

impl Normalized {
    /// The normalized value, `None` for every non-numeric outcome.
    pub fn value(self) -> Option<f64> {
        match self {
            Normalized::Numeric(value) | Normalized::Extracted(value) => Some(value),
            Normalized::Censored | Normalized::Unparseable | Normalized::Missing => None,
        }
    }

    /// Short lowercase label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Normalized::Numeric(_) => "numeric",
            Normalized::Extracted(_) => "extracted",
            Normalized::Censored => "censored",
            Normalized::Unparseable => "unparseable",
            Normalized::Missing => "missing",
        }
    }
}

/// Resolve a single element under the given options.
pub fn classify(value: &RawValue, options: &NormalizeOptions) -> Normalized {
    match value {
        RawValue::Float(v) if v.is_nan() => Normalized::Missing,
        RawValue::Float(v) => Normalized::Numeric(*v),
        RawValue::Integer(v) => Normalized::Numeric(*v as f64),
        RawValue::Missing => Normalized::Missing,
        RawValue::Text(text) if options.remove_lower_than && is_censored(text) => {
            Normalized::Censored
        }
        RawValue::Text(text) => match extract_number(text) {
            Some(v) => Normalized::Extracted(v),
            None => Normalized::Unparseable,
        },
    }
}

/// Classify every element, preserving order and length.
pub fn classify_all(items: &[RawValue], options: &NormalizeOptions) -> Vec<Normalized> {
    let outcomes: Vec<Normalized> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let outcome = classify(item, options);
            trace!(index, status = outcome.label(), "normalized element");
            outcome
        })
        .collect();
    let summary = NormalizeSummary::from_outcomes(&outcomes);
    debug!(
        total = summary.total,
        numeric = summary.numeric,
        extracted = summary.extracted,
        censored = summary.censored,
        unparseable = summary.unparseable,
        missing = summary.missing,
        remove_lower_than = options.remove_lower_than,
        "normalized numeric list"
    );
    outcomes
}

/// Normalize a list of values under the given options.
pub fn normalize_with_options(items: &[RawValue], options: &NormalizeOptions) -> Vec<Option<f64>> {
    classify_all(items, options)
        .into_iter()
        .map(Normalized::value)
        .collect()
}

/// Normalize a mixed list of numbers and text into `Option<f64>` values.
///
/// `remove_lower_than` controls censored values: when true, any text
/// containing `<` becomes `None`; when false it is parsed like any other text.
///
/// ```
/// use assay_normalize::{RawValue, normalize_numeric_list};
///
/// let items = vec![
///     RawValue::Float(1.0),
///     RawValue::from("<2"),
///     RawValue::from("3.7 mg"),
///     RawValue::from("bad"),
/// ];
/// assert_eq!(
///     normalize_numeric_list(&items, true),
///     vec![Some(1.0), None, Some(3.7), None]
/// );
/// assert_eq!(
///     normalize_numeric_list(&items, false),
///     vec![Some(1.0), Some(2.0), Some(3.7), None]
/// );
/// ```
pub fn normalize_numeric_list(items: &[RawValue], remove_lower_than: bool) -> Vec<Option<f64>> {
    let options = NormalizeOptions::default().with_remove_lower_than(remove_lower_than);
    normalize_with_options(items, &options)
}

/// Per-status tally of a normalized batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeSummary {
    pub total: usize,
    pub numeric: usize,
    pub extracted: usize,
    pub censored: usize,
    pub unparseable: usize,
    pub missing: usize,
}

impl NormalizeSummary {
    /// Tally a slice of outcomes.
    pub fn from_outcomes(outcomes: &[Normalized]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.record(*outcome);
        }
        summary
    }

    /// Count one outcome.
    pub fn record(&mut self, outcome: Normalized) {
        self.total += 1;
        match outcome {
            Normalized::Numeric(_) => self.numeric += 1,
            Normalized::Extracted(_) => self.extracted += 1,
            Normalized::Censored => self.censored += 1,
            Normalized::Unparseable => self.unparseable += 1,
            Normalized::Missing => self.missing += 1,
        }
    }

    /// Number of elements that resolved to a value.
    pub fn resolved(&self) -> usize {
        self.numeric + self.extracted
    }

    /// Number of elements that resolved to `None`.
    pub fn unresolved(&self) -> usize {
        self.censored + self.unparseable + self.missing
    }
}
