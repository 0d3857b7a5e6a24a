//! Report generation module.
//!
//! Serializes a [`RunSummary`](crate::types::RunSummary) to
//! `cleaning_report.json` in the processed directory (`--emit-report`).

mod generator;

pub use generator::{CleaningReport, REPORT_FILE_NAME, ReportGenerator};
