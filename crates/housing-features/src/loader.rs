//! Raw CSV loading.

use crate::config::ProjectPaths;
use crate::error::{FeatureError, Result, ResultExt};
use crate::types::Split;
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Cell contents that mean "missing" in the raw files.
///
/// The housing CSVs spell absence as `NA`; the rest are the usual spreadsheet
/// and dataframe spellings of a null.
pub const MISSING_TOKENS: [&str; 14] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "<NA>", "#N/A", "#NA",
    "None",
];

/// Load the raw CSV for a split.
///
/// Column types are inferred from the whole file.
///
/// # Errors
///
/// Returns [`FeatureError::RawFileNotFound`] when `<raw>/<split>.csv` does not exist.
pub fn load_raw(paths: &ProjectPaths, split: Split) -> Result<DataFrame> {
    let path = paths.raw_file(split.file_stem());
    if !path.exists() {
        return Err(FeatureError::RawFileNotFound {
            split: split.to_string(),
            path: path.display().to_string(),
        });
    }

    info!("Loading {} split from: {}", split, path.display());
    let df = read_csv(&path).context(format!("Reading {}", path.display()))?;
    info!("Loaded {} split: {:?}", split, df.shape());

    Ok(df)
}

/// Load a split named by string; only `"train"` and `"test"` are accepted.
pub fn load_raw_str(paths: &ProjectPaths, split: &str) -> Result<DataFrame> {
    load_raw(paths, split.parse()?)
}

/// Read a CSV file with headers, treating [`MISSING_TOKENS`] as null.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let null_values = NullValues::AllColumns(MISSING_TOKENS.iter().map(|t| (*t).into()).collect());

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(null_values)),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!("Parsed {} columns from {}", df.width(), path.display());
    Ok(df)
}
