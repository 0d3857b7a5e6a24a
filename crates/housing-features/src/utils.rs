//! Shared helpers for the transform steps.

use polars::prelude::*;

// =============================================================================
// Column Presence
// =============================================================================

/// Check whether a column exists in the frame.
#[inline]
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// The listed columns that are absent from the frame, in input order.
pub fn missing_columns<'a>(df: &DataFrame, names: &[&'a str]) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| !has_column(df, name))
        .collect()
}

/// Columns present in `after` but not in `before`.
pub fn added_columns(before: &[String], after: &DataFrame) -> Vec<String> {
    after
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .filter(|name| !before.contains(name))
        .collect()
}

/// Owned column names of a frame.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Clone a column out of the frame as a Series.
pub fn column_series(df: &DataFrame, name: &str) -> PolarsResult<Series> {
    Ok(df.column(name)?.as_materialized_series().clone())
}

// =============================================================================
// Series Transformation Utilities
// =============================================================================

/// Fill nulls in a Series with a string, casting the Series to String first.
pub fn fill_string_nulls(series: &Series, fill_value: &str) -> PolarsResult<Series> {
    let as_str = series.cast(&DataType::String)?;
    let filled: StringChunked = as_str
        .str()?
        .into_iter()
        .map(|val| Some(val.unwrap_or(fill_value)))
        .collect();

    Ok(filled.with_name(series.name().clone()).into_series())
}

/// Convert a Series to Float64 without losing observed values.
///
/// Numeric input casts losslessly. Other input must parse in full: a value
/// that would turn into null is an error rather than a silent gap.
pub fn to_float64(series: &Series) -> PolarsResult<Series> {
    if is_numeric_dtype(series.dtype()) {
        series.cast(&DataType::Float64)
    } else {
        series.strict_cast(&DataType::Float64)
    }
}

/// Fill nulls in a numeric Series with zero.
///
/// Non-numeric input (e.g. an all-null column inferred as String) goes
/// through [`to_float64`] first.
pub fn fill_numeric_nulls_zero(series: &Series) -> PolarsResult<Series> {
    let numeric = if is_numeric_dtype(series.dtype()) {
        series.clone()
    } else {
        to_float64(series)?
    };
    numeric.fill_null(FillNullStrategy::Zero)
}

// =============================================================================
// Tests
// =============================================================================
