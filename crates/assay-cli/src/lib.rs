//! Library components for the `assay` command-line tool.

pub mod config;
pub mod logging;
pub mod pipeline;
