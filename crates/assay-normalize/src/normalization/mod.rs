//! Normalization functions.

pub mod numeric;
