//! Pipeline module.
//!
//! This module provides the batch entry point that ties loading, cleaning and
//! Parquet output together.

mod runner;

pub use runner::{FeaturePipeline, clean_and_write, write_parquet};
