//! Missing-value rules for the housing schema.
//!
//! Each rule knows what a null means for its columns: an absent feature
//! (`"None"`), an absent quantity (`0`), or an unknown frontage that is best
//! guessed from the neighborhood.

use super::columns::{CAT_NONE, LOT_FRONTAGE, MS_SUB_CLASS, NEIGHBORHOOD, NONE_LABEL, NUM_ZERO};
use crate::error::Result;
use crate::utils::{
    column_series, fill_numeric_nulls_zero, fill_string_nulls, has_column, is_numeric_dtype,
    to_float64,
};
use polars::prelude::*;
use tracing::{debug, warn};

/// Domain-specific imputation for the housing columns.
pub struct HousingImputer;

impl HousingImputer {
    /// Cast the building class code to String so it is treated as a label.
    pub fn normalize_building_class(
        df: &mut DataFrame,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        let series = column_series(df, MS_SUB_CLASS)?;
        if series.dtype() == &DataType::String {
            return Ok(());
        }

        let converted = series.cast(&DataType::String)?;
        df.replace(MS_SUB_CLASS, converted)?;

        processing_steps.push(format!(
            "Converted '{}' from {} to String",
            MS_SUB_CLASS,
            series.dtype()
        ));
        Ok(())
    }

    /// Fill nulls in the feature-absent categorical columns with `"None"`.
    pub fn impute_categorical_none(
        df: &mut DataFrame,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        for col_name in CAT_NONE {
            if !has_column(df, col_name) {
                continue;
            }
            let series = column_series(df, col_name)?;
            let missing = series.null_count();
            if missing == 0 {
                continue;
            }

            let filled = fill_string_nulls(&series, NONE_LABEL)?;
            df.replace(col_name, filled)?;

            debug!("Filled {} nulls in '{}' with '{}'", missing, col_name, NONE_LABEL);
            processing_steps.push(format!(
                "Filled '{}' with '{}': {} values",
                col_name, NONE_LABEL, missing
            ));
        }
        Ok(())
    }

    /// Fill nulls in the quantity columns with zero.
    pub fn impute_numeric_zero(
        df: &mut DataFrame,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        for col_name in NUM_ZERO {
            if !has_column(df, col_name) {
                continue;
            }
            let series = column_series(df, col_name)?;
            let missing = series.null_count();
            if missing == 0 && is_numeric_dtype(series.dtype()) {
                continue;
            }

            let filled = fill_numeric_nulls_zero(&series)?;
            df.replace(col_name, filled)?;

            debug!("Filled {} nulls in '{}' with 0", missing, col_name);
            processing_steps.push(format!("Filled '{}' with 0: {} values", col_name, missing));
        }
        Ok(())
    }

    /// Fill `LotFrontage` from the neighborhood median, falling back to the
    /// global median.
    ///
    /// The global median is taken over the original column. When every value
    /// is null there is nothing to fall back on and the nulls are left in place.
    pub fn impute_lot_frontage(
        df: &mut DataFrame,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        let frontage = to_float64(&column_series(df, LOT_FRONTAGE)?)?;
        let missing = frontage.null_count();
        let global_median = frontage.median();
        df.replace(LOT_FRONTAGE, frontage)?;

        let group_filled = if has_column(df, NEIGHBORHOOD) {
            // Rows without a neighborhood form no group
            let group_median = when(col(NEIGHBORHOOD).is_not_null())
                .then(col(LOT_FRONTAGE).median().over([col(NEIGHBORHOOD)]))
                .otherwise(lit(NULL));
            let out = df
                .clone()
                .lazy()
                .select([col(LOT_FRONTAGE).fill_null(group_median)])
                .collect()?;
            column_series(&out, LOT_FRONTAGE)?
        } else {
            column_series(df, LOT_FRONTAGE)?
        };
        let after_group = group_filled.null_count();

        let filled = match global_median {
            Some(m) => group_filled.f64()?.fill_null_with_values(m)?.into_series(),
            None => group_filled,
        };
        let remaining = filled.null_count();
        df.replace(LOT_FRONTAGE, filled)?;

        if missing > 0 {
            processing_steps.push(format!(
                "Filled '{}': {} by neighborhood median, {} by global median",
                LOT_FRONTAGE,
                missing - after_group,
                after_group - remaining
            ));
        }

        if remaining > 0 {
            warn!(
                "'{}' has no observed values; {} nulls left unfilled",
                LOT_FRONTAGE, remaining
            );
        }

        Ok(())
    }
}
