//! Numeric normalization for measurement lists.
//!
//! Lab exports and assay spreadsheets mix clean numbers with text such as
//! `"3.7 mg"`, `"<0.5"` (below the limit of quantification), or `"n/a"`. This
//! crate turns such a list into `Option<f64>` values, one per input, in order.
//!
//! # Example
//!
//! ```
//! use assay_normalize::{NormalizeOptions, RawValue, normalize_with_options};
//!
//! let items = vec![RawValue::Float(1.0), RawValue::from("<2"), RawValue::Missing];
//! let options = NormalizeOptions::default();
//! assert_eq!(normalize_with_options(&items, &options), vec![Some(1.0), None, None]);
//! ```
//!
//! # Design Principles
//!
//! - **Total**: every input maps to a value or `None`; nothing errors
//! - **Order-preserving**: output index `i` corresponds to input index `i`
//! - **Stateless**: pure functions, safe to call from any thread

mod normalizer;
mod value;

pub mod normalization;

pub use normalizer::{
    NormalizeOptions, NormalizeSummary, Normalized, classify, classify_all,
    normalize_numeric_list, normalize_with_options,
};
pub use value::RawValue;
