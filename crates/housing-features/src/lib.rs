//! Housing Feature Engineering Library
//!
//! Cleans the raw Ames housing-price CSVs into analysis-ready Parquet files,
//! built on Polars.
//!
//! # Overview
//!
//! - **Loading**: [`load_raw`] reads `data/raw/{train,test}.csv`, treating `NA` as missing
//! - **Imputation**: column-specific rules for what a missing value means
//! - **Encoding**: quality ratings (`Ex`..`Po`) become integers 5..1
//! - **Feature Derivation**: `TotalSF`, `AgeAtSale`, `YearsSinceRemod`, `IsRemodeled`
//! - **Target Stabilization**: `SalePrice_log = ln(SalePrice + 1)` on the train split
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use housing_features::{FeaturePipeline, ProjectPaths};
//!
//! // Whole batch over the default project layout
//! let summary = housing_features::clean_and_write()?;
//!
//! // Or against another root
//! let paths = ProjectPaths::builder().root("/srv/housing").build();
//! let summary = FeaturePipeline::new(paths).run()?;
//! ```
//!
//! # Transforming a single frame
//!
//! ```rust,ignore
//! use housing_features::{load_raw, transform, ProjectPaths, Split};
//!
//! let raw = load_raw(&ProjectPaths::default(), Split::Train)?;
//! let (clean, steps) = transform(raw, true)?;
//! for step in &steps {
//!     println!("{}", step);
//! }
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::{CLEANING_STEPS, TransformStep, transform};
pub use config::{ProjectPaths, ProjectPathsBuilder, RANDOM_STATE};
pub use error::{FeatureError, Result as FeatureResult, ResultExt};
pub use loader::{load_raw, load_raw_str};
pub use pipeline::{FeaturePipeline, clean_and_write, write_parquet};
pub use reporting::{CleaningReport, ReportGenerator};
pub use types::{RunSummary, Split, SplitSummary};
