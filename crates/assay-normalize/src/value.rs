//! Input element type for the normalizer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalization::numeric::parse_numeric;

/// A single raw measurement as it arrives from a spreadsheet, CSV cell, or JSON array.
///
/// The normalizer matches on the shape explicitly. `Integer` is treated like
/// `Float`; `Missing` always normalizes to `None`.
///
/// Serialized untagged, so the JSON array `[1, 2.5, "<3", null]` deserializes
/// to `[Integer, Float, Text, Missing]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Whole number.
    Integer(i64),
    /// Floating-point number. NaN is the missing marker of upstream tools.
    Float(f64),
    /// Free text, possibly with units, qualifiers, or a `<` censoring marker.
    Text(String),
    /// Absent value (null, empty cell).
    Missing,
}

impl RawValue {
    /// Type a CSV cell.
    ///
    /// - Empty or whitespace-only: `Missing`
    /// - Cleanly numeric (see [`parse_numeric`]): `Float`
    /// - Anything else: `Text`, with the original cell content kept verbatim
    pub fn from_cell(cell: &str) -> Self {
        if cell.trim().is_empty() {
            return RawValue::Missing;
        }
        match parse_numeric(cell) {
            Some(value) => RawValue::Float(value),
            None => RawValue::Text(cell.to_string()),
        }
    }

    /// Returns true for `Missing` and NaN floats.
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Float(value) => value.is_nan(),
            RawValue::Integer(_) | RawValue::Text(_) => false,
        }
    }

}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Integer(value) => write!(f, "{value}"),
            RawValue::Float(value) => write!(f, "{value}"),
            RawValue::Text(text) => f.write_str(text),
            RawValue::Missing => f.write_str(""),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Normalized output feeds back in as `Float`/`Missing`.
impl From<Option<f64>> for RawValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(value) => RawValue::Float(value),
            None => RawValue::Missing,
        }
    }
}
